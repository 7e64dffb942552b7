use crate::dom;
use std::cell::Cell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// Any of these ends an active drag.
const DRAG_END_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "blur"];

/// Window-level listeners owned by a single in-progress drag.
///
/// Listeners are attached on construction and detached on [`detach`],
/// [`release`] or drop, whichever comes first.
///
/// [`detach`]: DragListeners::detach
/// [`release`]: DragListeners::release
pub struct DragListeners {
    window: web::Window,
    on_move: Closure<dyn FnMut(web::PointerEvent)>,
    on_end: Closure<dyn FnMut(web::Event)>,
    attached: Cell<bool>,
}

impl DragListeners {
    pub fn attach(
        on_move: impl FnMut(web::PointerEvent) + 'static,
        mut on_end: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let on_move = Closure::wrap(Box::new(on_move) as Box<dyn FnMut(web::PointerEvent)>);
        let on_end = Closure::wrap(Box::new(move |_ev: web::Event| on_end()) as Box<dyn FnMut(_)>);
        let listeners = Self {
            window,
            on_move,
            on_end,
            attached: Cell::new(true),
        };

        // On error the partially attached set is dropped, which detaches it.
        listeners
            .window
            .add_event_listener_with_callback("pointermove", listeners.on_move.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
        for ty in DRAG_END_EVENTS {
            listeners
                .window
                .add_event_listener_with_callback(ty, listeners.on_end.as_ref().unchecked_ref())
                .map_err(dom::js_err)?;
        }
        Ok(listeners)
    }

    pub fn detach(&self) {
        if !self.attached.replace(false) {
            return;
        }
        _ = self
            .window
            .remove_event_listener_with_callback("pointermove", self.on_move.as_ref().unchecked_ref());
        for ty in DRAG_END_EVENTS {
            _ = self
                .window
                .remove_event_listener_with_callback(ty, self.on_end.as_ref().unchecked_ref());
        }
    }

    /// Detach now and free the closures on the next microtask.
    ///
    /// Used when the drag is ended from inside one of these listeners, which
    /// must not be dropped while it is still running.
    pub fn release(self) {
        self.detach();
        spawn_local(async move {
            drop(self);
        });
    }
}

impl Drop for DragListeners {
    fn drop(&mut self) {
        self.detach();
    }
}
