use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, anyhow};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, Window};

use super::camera_input::CameraInput;
use super::frame_slot::FrameSlot;
use super::scene::{CubeScene, Segment};

const STROKE: &str = "#7dd3fc";
const BACKGROUND: &str = "#0f172a";

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| anyhow!("no window"))
}

pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    let document = window()?.document().ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("canvas #{id} not in DOM yet"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| anyhow!("#{id} is not a canvas"))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext failed: {e:?}"))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("context is not 2d"))
}

pub fn draw(ctx: &CanvasRenderingContext2d, segments: &[Segment], width: f64, height: f64) {
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_stroke_style_str(STROKE);
    ctx.set_line_width(1.5);
    ctx.begin_path();
    for (a, b) in segments {
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
    }
    ctx.stroke();
}

/// The callback is handed to the JS garbage collector, so it goes away
/// together with `target`.
pub fn add_listener<T, F>(target: &EventTarget, ty: &str, f: F) -> Result<()>
where
    T: 'static + JsCast + FromWasmAbi,
    F: 'static + FnMut(T),
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(_)>).into_js_value();
    target
        .add_event_listener_with_callback(ty, cb.unchecked_ref())
        .map_err(|e| anyhow!("could not listen for {ty}: {e:?}"))
}

/// Drag to orbit, wheel to zoom.
pub fn add_camera_orbit(input: &Rc<RefCell<CameraInput>>, canvas: &HtmlCanvasElement) -> Result<()> {
    let st = input.clone();
    add_listener(canvas, "pointerdown", move |e: web_sys::PointerEvent| {
        if e.button() != 0 {
            return;
        }
        st.borrow_mut().begin_drag(e.client_x() as f32, e.client_y() as f32);
        // prevent default so canvas doesn't lose focus
        e.prevent_default();
    })?;

    let st = input.clone();
    add_listener(canvas, "pointermove", move |e: web_sys::PointerEvent| {
        st.borrow_mut().drag_to(e.client_x() as f32, e.client_y() as f32);
    })?;

    for ty in ["pointerup", "pointerleave"] {
        let st = input.clone();
        add_listener(canvas, ty, move |_: web_sys::PointerEvent| {
            st.borrow_mut().end_drag();
        })?;
    }

    let st = input.clone();
    add_listener(canvas, "wheel", move |e: web_sys::WheelEvent| {
        st.borrow_mut().zoom(e.delta_y() as f32);
        e.prevent_default();
    })
}

/// Draws `scene` every animation frame until `alive` is cleared.
pub fn start_render_loop(
    canvas: HtmlCanvasElement,
    scene: CubeScene,
    input: Rc<RefCell<CameraInput>>,
    alive: Arc<AtomicBool>,
) -> Result<()> {
    let ctx = context_2d(&canvas)?;
    let performance = window()?.performance().ok_or_else(|| anyhow!("no performance clock"))?;
    let t0 = performance.now();

    // the RAF callback lives in a slot so it can re-schedule itself each frame
    let slot: FrameSlot<Closure<dyn FnMut(f64)>> = FrameSlot::new();
    let this = slot.clone();

    slot.fill(Closure::wrap(Box::new(move |now: f64| {
        if !alive.load(Ordering::Relaxed) {
            log::debug!("render loop for #{} stopped", canvas.id());
            // still inside the callback: free it once this frame has returned
            if let Some(cb) = this.take() {
                spawn_local(async move { drop(cb) });
            }
            return;
        }

        let (w, h) = (canvas.width() as f64, canvas.height() as f64);
        let t_secs = ((now - t0) / 1000.0) as f32;
        let segments = scene.project(&input.borrow().camera, t_secs, w as f32, h as f32);
        draw(&ctx, &segments, w, h);

        if let Err(e) = request_frame(&this) {
            log::error!("{e}");
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&slot)
}

fn request_frame(slot: &FrameSlot<Closure<dyn FnMut(f64)>>) -> Result<()> {
    let requested = slot.with(|cb| -> Result<()> {
        window()?
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("requestAnimationFrame failed: {e:?}"))?;
        Ok(())
    });
    requested.ok_or_else(|| anyhow!("render loop already stopped"))?
}
