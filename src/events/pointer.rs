use super::Listeners;
use crate::core::INTERACTIVE_SELECTOR;
use crate::dom;
use crate::frame::LayerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and pen pointers only; touch never shows a custom cursor.
#[inline]
fn pointer_event(ev: &web::Event) -> Option<&web::PointerEvent> {
    ev.dyn_ref::<web::PointerEvent>()
        .filter(|pe| pe.pointer_type() != "touch")
}

#[inline]
fn client_pos(pe: &web::PointerEvent) -> Vec2 {
    Vec2::new(pe.client_x() as f32, pe.client_y() as f32)
}

/// Whether `target` is, or sits inside, an interactive element.
#[inline]
fn is_interactive(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

/// Run `f` against the layer state if it is still alive.
#[inline]
fn with_state(state: &Weak<RefCell<LayerState>>, f: impl FnOnce(&mut LayerState)) {
    if let Some(s) = state.upgrade() {
        f(&mut s.borrow_mut());
    }
}

pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    state: &Rc<RefCell<LayerState>>,
    listeners: &mut Listeners,
) {
    let doc_target: &web::EventTarget = document.as_ref();

    let s = Rc::downgrade(state);
    listeners.add(doc_target, "pointermove", move |ev| {
        if let Some(pe) = pointer_event(&ev) {
            let pos = client_pos(pe);
            with_state(&s, |st| st.engine.pointer_move(pos));
        }
    });

    let s = Rc::downgrade(state);
    listeners.add(doc_target, "pointerdown", move |ev| {
        if let Some(pe) = pointer_event(&ev) {
            let pos = client_pos(pe);
            with_state(&s, |st| {
                let ids = st.engine.pointer_down(pos);
                log::debug!(
                    "[events] burst of {} at ({:.0},{:.0})",
                    ids.len(),
                    pos.x,
                    pos.y
                );
            });
        }
    });

    for kind in ["pointerup", "pointercancel"] {
        let s = Rc::downgrade(state);
        listeners.add(doc_target, kind, move |_ev| {
            with_state(&s, |st| st.engine.pointer_up());
        });
    }

    // pointerover/pointerout bubble from every element, so one pair of
    // listeners covers elements added after mount as well
    let s = Rc::downgrade(state);
    listeners.add(doc_target, "pointerover", move |ev| {
        let hovering = is_interactive(ev.target());
        with_state(&s, |st| {
            st.engine.set_hovering(hovering);
        });
    });

    // judged by where the pointer went; no related target means it left the page
    let s = Rc::downgrade(state);
    listeners.add(doc_target, "pointerout", move |ev| {
        let into = ev
            .dyn_ref::<web::MouseEvent>()
            .and_then(|me| me.related_target());
        let hovering = is_interactive(into);
        with_state(&s, |st| {
            st.engine.set_hovering(hovering);
        });
    });

    if let Some(root) = document.document_element() {
        let root_target: &web::EventTarget = root.as_ref();

        let s = Rc::downgrade(state);
        let doc = document.clone();
        listeners.add(root_target, "pointerenter", move |_ev| {
            with_state(&s, |st| st.engine.pointer_enter());
            dom::set_native_cursor_hidden(&doc, true);
        });

        let s = Rc::downgrade(state);
        let doc = document.clone();
        listeners.add(root_target, "pointerleave", move |_ev| {
            with_state(&s, |st| {
                st.engine.pointer_leave();
                st.engine.set_hovering(false);
            });
            dom::set_native_cursor_hidden(&doc, false);
        });
    }

    let s = Rc::downgrade(state);
    let win_target: &web::EventTarget = window.as_ref();
    listeners.add(win_target, "resize", move |_ev| {
        with_state(&s, |st| dom::sync_canvas_backing_size(&st.canvas));
    });

    log::info!("[events] {} listeners attached", listeners.len());
}
