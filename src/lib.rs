//! Custom cursor layer for the studio site: a dot pinned to the pointer, a
//! lagging follower ring, fading trail dots, press bursts and orbiting
//! accents.
//!
//! `core` is plain Rust and tested on the host. The remaining modules bind it
//! to the browser and only build for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod layer;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_api::*;

#[cfg(target_arch = "wasm32")]
mod web_api {
    use crate::dom;
    use crate::layer::CursorLayer;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    /// Element whose presence triggers mounting at startup.
    const AUTO_MOUNT_ID: &str = "cursor-layer";

    thread_local! {
        static AUTO_LAYER: RefCell<Option<CursorLayer>> = const { RefCell::new(None) };
    }

    /// JS-owned handle to a mounted layer.
    #[wasm_bindgen]
    pub struct CursorHandle {
        layer: Option<CursorLayer>,
    }

    #[wasm_bindgen]
    impl CursorHandle {
        /// Remove listeners, cancel the frame loop and drop the overlay.
        pub fn unmount(&mut self) {
            self.layer.take();
        }

        #[wasm_bindgen(getter)]
        pub fn mounted(&self) -> bool {
            self.layer.is_some()
        }

        #[wasm_bindgen(getter, js_name = liveParticles)]
        pub fn live_particles(&self) -> usize {
            self.layer.as_ref().map(|l| l.live_particles()).unwrap_or(0)
        }
    }

    /// Mount on the element with `host_id`, or on `<body>`. Resolves to
    /// `undefined` when the device has no fine pointer.
    #[wasm_bindgen(js_name = mountCursor)]
    pub fn mount_cursor(host_id: Option<String>) -> Result<Option<CursorHandle>, JsValue> {
        let host = match host_id {
            Some(id) => Some(
                dom::window_document()
                    .and_then(|d| d.get_element_by_id(&id))
                    .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?,
            ),
            None => None,
        };
        let layer = CursorLayer::mount(host).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(layer.map(|l| CursorHandle { layer: Some(l) }))
    }

    /// Tear down the layer mounted at startup, if any.
    #[wasm_bindgen(js_name = unmountAutoCursor)]
    pub fn unmount_auto_cursor() -> bool {
        AUTO_LAYER.with(|slot| slot.borrow_mut().take().is_some())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("atelier-cursor starting");

        let host = dom::window_document().and_then(|d| d.get_element_by_id(AUTO_MOUNT_ID));
        if let Some(host) = host {
            match CursorLayer::mount(Some(host)) {
                Ok(layer) => AUTO_LAYER.with(|slot| *slot.borrow_mut() = layer),
                Err(e) => log::error!("[cursor] mount error: {:?}", e),
            }
        }
        Ok(())
    }
}
