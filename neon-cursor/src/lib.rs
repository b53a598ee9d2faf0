//! Decorative cursor-trail overlay: a full-viewport canvas that renders a
//! glowing tail behind the pointer. Purely visual; the canvas never
//! intercepts pointer events and the host page behaves identically without
//! it.

pub mod trail;

pub use trail::{Trail, TrailConfig, TrailPoint};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

/// Trail color (violet) as an rgb triple; alpha comes from point age.
#[cfg(target_arch = "wasm32")]
const NEON_RGB: (u8, u8, u8) = (167, 139, 250);

#[cfg(target_arch = "wasm32")]
struct OverlayInner {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    trail: Trail,
    last_ts: Option<f64>,
    destroyed: bool,
}

/// Handle to a mounted overlay. Dropping the handle alone does not tear the
/// overlay down; call [`NeonCursor::destroy`] so listeners and the frame
/// loop are released deterministically.
#[cfg(target_arch = "wasm32")]
pub struct NeonCursor {
    inner: Rc<RefCell<OverlayInner>>,
    pointer_cb: Closure<dyn FnMut(PointerEvent)>,
    resize_cb: Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl NeonCursor {
    /// Create the canvas inside `container_id`, register pointer and resize
    /// listeners, and start the frame loop.
    pub fn mount(container_id: &str) -> Result<NeonCursor, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str("overlay container not found"))?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        canvas.set_class_name("neon-cursor-canvas");
        container.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        size_to_viewport(&window, &canvas);

        let inner = Rc::new(RefCell::new(OverlayInner {
            canvas,
            ctx,
            trail: Trail::new(TrailConfig::default()),
            last_ts: None,
            destroyed: false,
        }));

        let pointer_cb = {
            let inner = inner.clone();
            Closure::<dyn FnMut(PointerEvent)>::wrap(Box::new(move |ev: PointerEvent| {
                inner
                    .borrow_mut()
                    .trail
                    .set_target(ev.client_x() as f64, ev.client_y() as f64);
            }))
        };
        window
            .add_event_listener_with_callback("pointermove", pointer_cb.as_ref().unchecked_ref())?;

        let resize_cb = {
            let inner = inner.clone();
            Closure::<dyn FnMut()>::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    size_to_viewport(&window, &inner.borrow().canvas);
                }
            }))
        };
        window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())?;

        start_render_loop(inner.clone());
        log::debug!("cursor overlay mounted");

        Ok(NeonCursor {
            inner,
            pointer_cb,
            resize_cb,
        })
    }

    /// Stop the frame loop, unhook both window listeners, and detach the
    /// canvas from the DOM.
    pub fn destroy(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.destroyed = true;
            inner.trail.clear();
        }
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "pointermove",
                self.pointer_cb.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
        }
        let inner = self.inner.borrow();
        if let Some(parent) = inner.canvas.parent_element() {
            let _ = parent.remove_child(&inner.canvas);
        }
        log::debug!("cursor overlay destroyed");
    }
}

#[cfg(target_arch = "wasm32")]
fn size_to_viewport(window: &web_sys::Window, canvas: &HtmlCanvasElement) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

#[cfg(target_arch = "wasm32")]
fn start_render_loop(inner_rc: Rc<RefCell<OverlayInner>>) {
    let f = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let mut should_continue = true;
        {
            let mut inner = inner_rc.borrow_mut();
            if inner.destroyed {
                should_continue = false;
            } else {
                frame(&mut inner, timestamp);
            }
        }

        if should_continue {
            let window = web_sys::window().unwrap();
            window
                .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .unwrap();
        }
    }) as Box<dyn FnMut(f64)>));

    let window = web_sys::window().unwrap();
    window
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .unwrap();
}

#[cfg(target_arch = "wasm32")]
fn frame(inner: &mut OverlayInner, timestamp: f64) {
    // Clamp dt so a background-tab pause does not wipe the whole trail in
    // one giant step.
    let dt = match inner.last_ts {
        Some(prev) => (timestamp - prev).clamp(0.0, 100.0),
        None => 16.0,
    };
    inner.last_ts = Some(timestamp);
    inner.trail.step(dt);

    let width = inner.canvas.width() as f64;
    let height = inner.canvas.height() as f64;
    let ctx = &inner.ctx;
    ctx.clear_rect(0.0, 0.0, width, height);
    if inner.trail.is_empty() {
        return;
    }

    let lifetime = inner.trail.config().lifetime_ms;
    let (r, g, b) = NEON_RGB;
    ctx.set_line_cap("round");
    ctx.set_shadow_blur(14.0);
    ctx.set_shadow_color(&format!("rgba({r}, {g}, {b}, 0.6)"));

    let points: Vec<&TrailPoint> = inner.trail.points().collect();
    for pair in points.windows(2) {
        let alpha = pair[1].alpha(lifetime);
        if alpha <= 0.0 {
            continue;
        }
        ctx.set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {:.3})", alpha * 0.85));
        ctx.set_line_width(1.0 + 4.0 * alpha);
        ctx.begin_path();
        ctx.move_to(pair[0].x, pair[0].y);
        ctx.line_to(pair[1].x, pair[1].y);
        ctx.stroke();
    }

    if let Some((hx, hy)) = inner.trail.head() {
        ctx.set_fill_style_str(&format!("rgba({r}, {g}, {b}, 0.9)"));
        ctx.begin_path();
        let _ = ctx.arc(hx, hy, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
    ctx.set_shadow_blur(0.0);
}
