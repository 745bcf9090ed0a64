use std::f32::consts::FRAC_PI_2;

use super::camera::Camera;

const ORBIT_SPEED: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.01;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 50.0;

/// Pointer-driven orbit state for a [`Camera`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    pub camera: Camera,
    pub dragging: bool,
    pub last_pointer: (f32, f32),
}

impl CameraInput {
    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.last_pointer = (x, y);
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }

        let (lx, ly) = self.last_pointer;
        self.last_pointer = (x, y);

        self.camera.yaw -= (x - lx) * ORBIT_SPEED;
        self.camera.pitch += (y - ly) * ORBIT_SPEED;

        // clamp pitch so we don't flip upside-down
        let max_pitch = FRAC_PI_2 - 0.01;
        self.camera.pitch = self.camera.pitch.clamp(-max_pitch, max_pitch);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        self.camera.distance =
            (self.camera.distance + wheel_delta * ZOOM_SPEED).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
