use crate::dom;
use crate::events::DragListeners;
use crate::knob::{Knob, KnobConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A knob mounted in the DOM.
///
/// Dropping the widget removes its element and releases any drag still in
/// progress.
pub struct KnobWidget {
    inner: Rc<KnobInner>,
    on_pointerdown: Closure<dyn FnMut(web::PointerEvent)>,
}

struct KnobInner {
    knob: RefCell<Knob>,
    root: web::HtmlElement,
    face: web::HtmlElement,
    indicator: web::HtmlElement,
    readout: Option<web::HtmlElement>,
    on_change: Box<dyn Fn(i32)>,
    drag: RefCell<Option<DragListeners>>,
}

impl KnobWidget {
    pub fn mount(
        document: &web::Document,
        parent: &web::Element,
        config: KnobConfig,
        value: i32,
        on_change: impl Fn(i32) + 'static,
    ) -> anyhow::Result<Self> {
        let root = dom::create(document, "div", &format!("knob {}", config.size.class_name()))?;
        let face = dom::create(document, "div", "knob-face")?;
        let diameter = format!("{}px", config.size.diameter_px());
        _ = face.style().set_property("width", &diameter);
        _ = face.style().set_property("height", &diameter);
        let indicator = dom::create(document, "div", "knob-indicator")?;
        dom::append(&face, &indicator)?;
        dom::append(&root, &face)?;

        if !config.label.is_empty() {
            let label = dom::create_with_text(document, "div", "knob-label", &config.label)?;
            _ = label.style().set_property("color", &config.color);
            dom::append(&root, &label)?;
        }
        let readout = if config.show_value {
            let el = dom::create(document, "div", "knob-value")?;
            _ = el.style().set_property("color", &config.color);
            dom::append(&root, &el)?;
            Some(el)
        } else {
            None
        };

        let inner = Rc::new(KnobInner {
            knob: RefCell::new(Knob::new(config, value)?),
            root,
            face,
            indicator,
            readout,
            on_change: Box::new(on_change),
            drag: RefCell::new(None),
        });
        inner.paint();

        let weak = Rc::downgrade(&inner);
        let on_pointerdown = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if let Some(inner) = weak.upgrade() {
                ev.prevent_default();
                inner.begin_drag(ev.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        inner
            .face
            .add_event_listener_with_callback("pointerdown", on_pointerdown.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
        dom::append(parent, &inner.root)?;

        Ok(Self {
            inner,
            on_pointerdown,
        })
    }

    #[inline]
    pub fn root(&self) -> &web::HtmlElement {
        &self.inner.root
    }

    /// Mirror externally owned bounds and value unless a drag is in progress.
    pub fn reconcile(&self, min: i32, max: i32, value: i32) -> anyhow::Result<()> {
        let changed = self.inner.knob.borrow_mut().reconcile(min, max, value)?;
        if changed {
            self.inner.paint();
        }
        Ok(())
    }
}

impl Drop for KnobWidget {
    fn drop(&mut self) {
        if let Some(listeners) = self.inner.drag.borrow_mut().take() {
            listeners.detach();
            log::debug!("[knob] drag released on unmount");
        }
        _ = self.inner.face.remove_event_listener_with_callback(
            "pointerdown",
            self.on_pointerdown.as_ref().unchecked_ref(),
        );
        self.inner.root.remove();
    }
}

impl KnobInner {
    fn begin_drag(self: &Rc<Self>, pointer_y: f64) {
        if self.drag.borrow().is_some() {
            return;
        }
        self.knob.borrow_mut().begin_drag(pointer_y);

        let weak_move = Rc::downgrade(self);
        let weak_end = Rc::downgrade(self);
        let listeners = DragListeners::attach(
            move |ev: web::PointerEvent| {
                if let Some(inner) = weak_move.upgrade() {
                    ev.prevent_default();
                    inner.drag_to(ev.client_y() as f64);
                }
            },
            move || {
                if let Some(inner) = weak_end.upgrade() {
                    inner.end_drag();
                }
            },
        );
        match listeners {
            Ok(listeners) => {
                *self.drag.borrow_mut() = Some(listeners);
                dom::set_class(&self.root, "dragging", true);
            }
            Err(e) => {
                log::warn!("[knob] could not start drag: {:?}", e);
                self.knob.borrow_mut().end_drag();
            }
        }
    }

    fn drag_to(&self, pointer_y: f64) {
        let emitted = self.knob.borrow_mut().drag_to(pointer_y);
        if let Some(value) = emitted {
            self.paint();
            (self.on_change)(value);
        }
    }

    fn end_drag(&self) {
        self.knob.borrow_mut().end_drag();
        dom::set_class(&self.root, "dragging", false);
        let listeners = self.drag.borrow_mut().take();
        if let Some(listeners) = listeners {
            // Called from inside one of the drag listeners.
            listeners.release();
        }
    }

    fn paint(&self) {
        let knob = self.knob.borrow();
        _ = self.indicator.style().set_property(
            "transform",
            &format!("translateX(-50%) rotate({:.1}deg)", knob.rotation_deg()),
        );
        if let Some(readout) = &self.readout {
            readout.set_text_content(Some(&knob.value().to_string()));
        }
    }
}
