//! `web-sys` implementation of the carousel host surface.

use carousel_core::host::Handler;
use carousel_core::{EventKind, HostError, HostEvent, HostSurface, ListenTarget};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

/// Host surface backed by the page's window and document.
#[derive(Clone, Debug)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    /// Bind to the current window and document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: gloo::utils::window(),
            document: gloo::utils::document(),
        }
    }

    /// Document the host creates elements in.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

impl Default for DomHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSurface for DomHost {
    type Node = Element;
    type Listener = EventListener;

    fn children(&self, node: &Element) -> Vec<Element> {
        let collection = node.children();
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn create_div(&self, class: &str) -> Result<Element, HostError> {
        let div = self
            .document
            .create_element("div")
            .map_err(|err| host_error("create_div", &err))?;
        div.set_attribute("class", class)
            .map_err(|err| host_error("create_div", &err))?;
        Ok(div)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), HostError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| host_error("append_child", &err))
    }

    fn clone_node(&self, node: &Element) -> Result<Element, HostError> {
        node.clone_node_with_deep(true)
            .map_err(|err| host_error("clone_node", &err))?
            .dyn_into::<Element>()
            .map_err(|_| HostError::new("clone_node", "clone is not an element"))
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), HostError> {
        node.set_attribute(name, value)
            .map_err(|err| host_error("set_attribute", &err))
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            console::error!("carousel style write failed", property, err);
        }
    }

    fn toggle_class(&self, node: &Element, class: &str, on: bool) {
        if let Err(err) = node.class_list().toggle_with_force(class, on) {
            console::error!("carousel class toggle failed", class, err);
        }
    }

    fn flush_layout(&self, node: &Element) {
        if let Some(html) = node.dyn_ref::<HtmlElement>() {
            // reading a layout property forces a synchronous reflow
            let _ = html.offset_left();
        }
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or_default()
    }

    fn listen(
        &self,
        target: ListenTarget<'_, Element>,
        kind: EventKind,
        mut handler: Handler,
    ) -> EventListener {
        let event_type = match kind {
            EventKind::Click => "click",
            EventKind::KeyUp => "keyup",
            EventKind::Resize => "resize",
            EventKind::TransitionEnd => "transitionend",
        };
        let callback = move |event: &Event| {
            let payload = match kind {
                EventKind::Click => HostEvent::Click,
                EventKind::KeyUp => HostEvent::KeyUp {
                    key: event
                        .dyn_ref::<KeyboardEvent>()
                        .map(KeyboardEvent::key)
                        .unwrap_or_default(),
                },
                EventKind::Resize => HostEvent::Resize,
                EventKind::TransitionEnd => HostEvent::TransitionEnd,
            };
            handler(payload);
        };
        match target {
            ListenTarget::Viewport => EventListener::new(&self.window, event_type, callback),
            ListenTarget::Node(node) => EventListener::new(node, event_type, callback),
        }
    }
}

fn host_error(operation: &'static str, err: &JsValue) -> HostError {
    HostError::new(operation, format!("{err:?}"))
}
