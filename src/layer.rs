use crate::core::{CursorConfig, CursorEngine, FrameLoop};
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::{self, LayerState, RafHost};
use anyhow::anyhow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A mounted cursor layer. Dropping it tears everything down.
pub struct CursorLayer {
    state: Rc<RefCell<LayerState>>,
    listeners: Listeners,
    document: web::Document,
}

impl CursorLayer {
    /// Mount on `host` (or `<body>` when `None`).
    ///
    /// `data-cursor-*` attributes on the host override the default config.
    /// Returns `Ok(None)` when the device has no fine pointer or the viewport
    /// is too narrow.
    pub fn mount(host: Option<web::Element>) -> anyhow::Result<Option<Self>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;
        let parent: web::Element = match host {
            Some(el) => el,
            None => document
                .body()
                .ok_or_else(|| anyhow!("no <body>"))?
                .into(),
        };

        let mut cfg = CursorConfig::default();
        cfg.apply_overrides(|name| parent.get_attribute(name))
            .map_err(|e| anyhow!("invalid cursor config: {e}"))?;

        if !dom::fine_pointer_available(&window, cfg.min_viewport_width) {
            log::info!("[cursor] no fine pointer or narrow viewport; not mounting");
            return Ok(None);
        }

        // every fallible step runs before the overlay is appended
        let engine = CursorEngine::new(cfg)?;
        let (canvas, ctx) = dom::create_overlay(&document, &parent)?;
        let state = Rc::new(RefCell::new(LayerState {
            engine,
            frames: FrameLoop::new(RafHost::new(window.clone())),
            canvas,
            ctx,
            last_instant: Instant::now(),
        }));

        let mut listeners = Listeners::default();
        events::wire_pointer_handlers(&window, &document, &state, &mut listeners);
        dom::set_native_cursor_hidden(&document, true);
        frame::start_loop(&state);
        log::info!("[cursor] mounted");

        Ok(Some(Self {
            state,
            listeners,
            document,
        }))
    }

    pub fn live_particles(&self) -> usize {
        self.state.borrow().engine.live_particles()
    }

    fn teardown(&mut self) {
        let removed = self.listeners.remove_all();
        let cleared = {
            let mut st = self.state.borrow_mut();
            let cleared = st.shutdown();
            st.canvas.remove();
            cleared
        };
        dom::set_native_cursor_hidden(&self.document, false);
        log::info!(
            "[cursor] unmounted: {} listeners removed, {} particles cleared",
            removed,
            cleared
        );
    }
}

impl Drop for CursorLayer {
    fn drop(&mut self) {
        self.teardown();
    }
}
