pub mod pointer;

pub use pointer::wire_pointer_handlers;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

struct Registration {
    target: web::EventTarget,
    kind: &'static str,
    handler: Handler,
}

/// Every listener the layer added, kept so teardown can remove them.
///
/// Handlers are owned here instead of `forget()`-ed; dropping the set
/// deregisters everything that is still attached.
#[derive(Default)]
pub struct Listeners {
    registrations: Vec<Registration>,
}

impl Listeners {
    /// Attach a passive listener of `kind` on `target`.
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            handler.as_ref().unchecked_ref(),
            &opts,
        ) {
            Ok(()) => self.registrations.push(Registration {
                target: target.clone(),
                kind,
                handler,
            }),
            Err(e) => log::warn!("[events] could not listen for {}: {:?}", kind, e),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Detach and drop every handler. Returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let n = self.registrations.len();
        for r in self.registrations.drain(..) {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.kind, r.handler.as_ref().unchecked_ref());
        }
        n
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
