pub mod camera;
pub mod camera_input;
pub mod cube;
pub mod frame_slot;
pub mod rectangles;
pub mod scene;

#[cfg(feature = "web")]
pub mod canvas2d;
