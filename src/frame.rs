use crate::core::{CursorEngine, FrameHost, FrameLoop};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed [`FrameHost`].
///
/// The callback is installed after the layer state exists (it needs a weak
/// reference back to it) and is dropped on teardown.
pub struct RafHost {
    window: web::Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl RafHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    pub fn release_callback(&mut self) {
        self.callback = None;
    }
}

impl FrameHost for RafHost {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let cb = self.callback.as_ref()?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[frame] requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

/// Everything the per-frame callback touches.
pub struct LayerState {
    pub engine: CursorEngine,
    pub frames: FrameLoop<RafHost>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub last_instant: Instant,
}

impl LayerState {
    pub fn frame(&mut self) {
        if !self.frames.begin_frame() {
            return;
        }
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let report = self.engine.tick(dt);
        if !report.expired.is_empty() {
            log::trace!(
                "[frame] retired {} particles, {} live",
                report.expired.len(),
                report.live
            );
        }
        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        render::draw(&self.ctx, &self.canvas, &self.engine.scene(), dpr);
        self.frames.end_frame();
    }

    /// Stop the loop, release the rAF closure and clear the canvas.
    pub fn shutdown(&mut self) -> usize {
        self.frames.stop();
        self.frames.host_mut().release_callback();
        let cleared = self.engine.teardown();
        render::clear(&self.ctx, &self.canvas);
        cleared
    }
}

pub fn start_loop(state: &Rc<RefCell<LayerState>>) {
    let weak: Weak<RefCell<LayerState>> = Rc::downgrade(state);
    let tick = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(s) = weak.upgrade() {
            s.borrow_mut().frame();
        }
    }) as Box<dyn FnMut(f64)>);
    let mut st = state.borrow_mut();
    st.frames.host_mut().callback = Some(tick);
    st.last_instant = Instant::now();
    st.frames.start();
}
