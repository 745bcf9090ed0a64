use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::{ClassAttribute, Effect, ElementChild, GlobalAttributes, on_cleanup};
use leptos::{IntoView, component, view};
use wasm_bindgen_futures::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::render::camera::Camera;
use crate::render::camera_input::CameraInput;
use crate::render::canvas2d;
use crate::render::scene::CubeScene;

/// Mounts a canvas and keeps drawing `scene` on it while the page is shown.
#[component]
fn CubeCanvas(
    id: &'static str,
    caption: &'static str,
    scene: CubeScene,
    camera: Camera,
    #[prop(optional)] orbit: bool,
) -> impl IntoView {
    let alive = Arc::new(AtomicBool::new(true));

    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    // runs once "next tick" of Leptos
    Effect::new(move |_| {
        let scene = scene.clone();
        let alive = alive.clone();
        spawn_local(async move {
            // wait until the <canvas> actually exists
            TimeoutFuture::new(0).await;

            let run = || -> anyhow::Result<()> {
                let canvas = canvas2d::find_canvas(id)?;
                let input = Rc::new(RefCell::new(CameraInput { camera, ..CameraInput::default() }));
                if orbit {
                    canvas2d::add_camera_orbit(&input, &canvas)?;
                }
                canvas2d::start_render_loop(canvas, scene, input, alive)
            };

            if let Err(e) = run() {
                log::error!("canvas #{id}: {e}");
            }
        });
    });

    view! {
        <figure class="max-w-4xl mx-auto">
          <canvas
            id=id
            width="800"
            height="600"
            class="w-full rounded-lg"
          ></canvas>
          <figcaption class="mt-2 text-sm text-text">{caption}</figcaption>
        </figure>
    }
}

#[component]
pub fn CanvasOne() -> impl IntoView {
    view! {
        <CubeCanvas
            id="canvas-one"
            caption="One spinning cube."
            scene={CubeScene::single()}
            camera={Camera::default()}
        />
    }
}

#[component]
pub fn CanvasTwo() -> impl IntoView {
    view! {
        <CubeCanvas
            id="canvas-two"
            caption="A 3 × 3 grid of cubes."
            scene={CubeScene::grid(3)}
            camera={Camera { distance: 9.0, ..Camera::default() }}
        />
    }
}

#[component]
pub fn CanvasThree() -> impl IntoView {
    view! {
        <CubeCanvas
            id="canvas-three"
            caption="Click & drag to orbit, scroll to zoom."
            scene={CubeScene { spin: 0.3, ..CubeScene::single() }}
            camera={Camera { pitch: 0.4, yaw: 0.6, ..Camera::default() }}
            orbit=true
        />
    }
}
