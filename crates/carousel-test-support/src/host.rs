//! In-memory host surface.
//!
//! Nodes live in an arena owned by the host; handles are plain indices.
//! Events are delivered synchronously by the `click`/`key_up`/`resize`
//! helpers, mirroring how a browser event loop serialises handlers.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use carousel_core::host::Handler;
use carousel_core::{EventKind, HostError, HostEvent, HostSurface, ListenTarget};

/// Handle to a node in the fake document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FakeNode(usize);

#[derive(Clone, Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    children: Vec<FakeNode>,
    parent: Option<FakeNode>,
}

struct Registration {
    target: Option<FakeNode>,
    kind: EventKind,
    handler: Rc<RefCell<Handler>>,
    active: Rc<Cell<bool>>,
}

struct Dom {
    nodes: Vec<NodeData>,
    listeners: Vec<Registration>,
    viewport_width: f64,
    flushes: usize,
    style_log: Vec<(FakeNode, String, String)>,
    fail_on: Option<&'static str>,
}

/// Guard that deactivates its handler when dropped.
#[derive(Debug)]
pub struct FakeListener {
    active: Rc<Cell<bool>>,
}

impl Drop for FakeListener {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// Host surface backed by an in-memory node arena.
#[derive(Clone)]
pub struct FakeHost {
    dom: Rc<RefCell<Dom>>,
}

impl FakeHost {
    /// Create a host whose viewport is `viewport_width` pixels wide.
    #[must_use]
    pub fn new(viewport_width: f64) -> Self {
        Self {
            dom: Rc::new(RefCell::new(Dom {
                nodes: Vec::new(),
                listeners: Vec::new(),
                viewport_width,
                flushes: 0,
                style_log: Vec::new(),
                fail_on: None,
            })),
        }
    }

    /// Create a host with a desktop-sized viewport.
    #[must_use]
    pub fn desktop() -> Self {
        Self::new(1280.0)
    }

    /// Make the named operation fail from now on.
    pub fn fail_on(&self, operation: &'static str) {
        self.dom.borrow_mut().fail_on = Some(operation);
    }

    /// Create a detached element with `tag`.
    #[must_use]
    pub fn element(&self, tag: &str) -> FakeNode {
        self.insert(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        })
    }

    /// Create a `section` holding `count` slide children tagged `data-slide`.
    #[must_use]
    pub fn slides(&self, count: usize) -> FakeNode {
        let section = self.element("section");
        for index in 0..count {
            let slide = self.element("img");
            self.dom.borrow_mut().nodes[slide.0]
                .attributes
                .insert("data-slide".to_string(), index.to_string());
            self.attach(section, slide);
        }
        section
    }

    /// Tag name of `node`.
    #[must_use]
    pub fn tag(&self, node: FakeNode) -> String {
        self.dom.borrow().nodes[node.0].tag.clone()
    }

    /// Child handles of `node`, in order.
    #[must_use]
    pub fn child_nodes(&self, node: FakeNode) -> Vec<FakeNode> {
        self.dom.borrow().nodes[node.0].children.clone()
    }

    /// Parent handle of `node`, if attached.
    #[must_use]
    pub fn parent(&self, node: FakeNode) -> Option<FakeNode> {
        self.dom.borrow().nodes[node.0].parent
    }

    /// Whether `node` carries `class`.
    #[must_use]
    pub fn has_class(&self, node: FakeNode, class: &str) -> bool {
        self.dom.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|token| token == class)
    }

    /// Attribute value on `node`.
    #[must_use]
    pub fn attribute(&self, node: FakeNode, name: &str) -> Option<String> {
        self.dom.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    /// Inline style value on `node`.
    #[must_use]
    pub fn style(&self, node: FakeNode, property: &str) -> Option<String> {
        self.dom.borrow().nodes[node.0].styles.get(property).cloned()
    }

    /// Every value written to `property` on `node`, oldest first.
    #[must_use]
    pub fn style_writes(&self, node: FakeNode, property: &str) -> Vec<String> {
        self.dom
            .borrow()
            .style_log
            .iter()
            .filter(|(target, name, _)| *target == node && name == property)
            .map(|(_, _, value)| value.clone())
            .collect()
    }

    /// Nodes carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<FakeNode> {
        let dom = self.dom.borrow();
        let mut found = Vec::new();
        let mut stack: Vec<FakeNode> = dom
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(index, _)| FakeNode(index))
            .rev()
            .collect();
        while let Some(node) = stack.pop() {
            let data = &dom.nodes[node.0];
            if data.classes.iter().any(|token| token == class) {
                found.push(node);
            }
            stack.extend(data.children.iter().rev().copied());
        }
        found
    }

    /// First node carrying `class`.
    ///
    /// # Panics
    /// Panics when no node carries `class`.
    #[must_use]
    pub fn first_by_class(&self, class: &str) -> FakeNode {
        self.find_by_class(class)
            .first()
            .copied()
            .unwrap_or_else(|| panic!("no node with class '{class}'"))
    }

    /// Number of layout flushes requested so far.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.dom.borrow().flushes
    }

    /// Number of registered handlers still active.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.dom
            .borrow()
            .listeners
            .iter()
            .filter(|registration| registration.active.get())
            .count()
    }

    /// Deliver a click to `node`.
    pub fn click(&self, node: FakeNode) {
        self.dispatch(Some(node), &HostEvent::Click);
    }

    /// Deliver a key release to `node`.
    pub fn key_up(&self, node: FakeNode, key: &str) {
        self.dispatch(
            Some(node),
            &HostEvent::KeyUp {
                key: key.to_string(),
            },
        );
    }

    /// Deliver a transition end to `node`.
    pub fn transition_end(&self, node: FakeNode) {
        self.dispatch(Some(node), &HostEvent::TransitionEnd);
    }

    /// Change the viewport width and deliver a resize.
    pub fn resize(&self, width: f64) {
        self.dom.borrow_mut().viewport_width = width;
        self.dispatch(None, &HostEvent::Resize);
    }

    fn dispatch(&self, target: Option<FakeNode>, event: &HostEvent) {
        let kind = event.kind();
        let handlers: Vec<_> = self
            .dom
            .borrow()
            .listeners
            .iter()
            .filter(|registration| {
                registration.active.get()
                    && registration.kind == kind
                    && registration.target == target
            })
            .map(|registration| Rc::clone(&registration.handler))
            .collect();
        for handler in handlers {
            (&mut **handler.borrow_mut())(event.clone());
        }
    }

    fn insert(&self, data: NodeData) -> FakeNode {
        let mut dom = self.dom.borrow_mut();
        dom.nodes.push(data);
        FakeNode(dom.nodes.len() - 1)
    }

    fn attach(&self, parent: FakeNode, child: FakeNode) {
        let mut dom = self.dom.borrow_mut();
        if let Some(previous) = dom.nodes[child.0].parent.take() {
            dom.nodes[previous.0].children.retain(|node| *node != child);
        }
        dom.nodes[child.0].parent = Some(parent);
        dom.nodes[parent.0].children.push(child);
    }

    fn deep_clone(&self, node: FakeNode) -> FakeNode {
        let data = self.dom.borrow().nodes[node.0].clone();
        let copy = self.insert(NodeData {
            children: Vec::new(),
            parent: None,
            ..data.clone()
        });
        for child in data.children {
            let child_copy = self.deep_clone(child);
            self.attach(copy, child_copy);
        }
        copy
    }

    fn check(&self, operation: &'static str) -> Result<(), HostError> {
        if self.dom.borrow().fail_on == Some(operation) {
            return Err(HostError::new(operation, "injected failure"));
        }
        Ok(())
    }
}

impl HostSurface for FakeHost {
    type Node = FakeNode;
    type Listener = FakeListener;

    fn children(&self, node: &FakeNode) -> Vec<FakeNode> {
        self.child_nodes(*node)
    }

    fn create_div(&self, class: &str) -> Result<FakeNode, HostError> {
        self.check("create_div")?;
        Ok(self.insert(NodeData {
            tag: "div".to_string(),
            classes: class.split_whitespace().map(str::to_string).collect(),
            ..NodeData::default()
        }))
    }

    fn append_child(&self, parent: &FakeNode, child: &FakeNode) -> Result<(), HostError> {
        self.check("append_child")?;
        self.attach(*parent, *child);
        Ok(())
    }

    fn clone_node(&self, node: &FakeNode) -> Result<FakeNode, HostError> {
        self.check("clone_node")?;
        Ok(self.deep_clone(*node))
    }

    fn set_attribute(&self, node: &FakeNode, name: &str, value: &str) -> Result<(), HostError> {
        self.check("set_attribute")?;
        self.dom.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_style(&self, node: &FakeNode, property: &str, value: &str) {
        let mut dom = self.dom.borrow_mut();
        dom.style_log
            .push((*node, property.to_string(), value.to_string()));
        let styles = &mut dom.nodes[node.0].styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn toggle_class(&self, node: &FakeNode, class: &str, on: bool) {
        let mut dom = self.dom.borrow_mut();
        let classes = &mut dom.nodes[node.0].classes;
        let present = classes.iter().any(|token| token == class);
        if on && !present {
            classes.push(class.to_string());
        } else if !on && present {
            classes.retain(|token| token != class);
        }
    }

    fn flush_layout(&self, _node: &FakeNode) {
        self.dom.borrow_mut().flushes += 1;
    }

    fn viewport_width(&self) -> f64 {
        self.dom.borrow().viewport_width
    }

    fn listen(
        &self,
        target: ListenTarget<'_, FakeNode>,
        kind: EventKind,
        handler: Handler,
    ) -> FakeListener {
        let active = Rc::new(Cell::new(true));
        let target = match target {
            ListenTarget::Viewport => None,
            ListenTarget::Node(node) => Some(*node),
        };
        self.dom.borrow_mut().listeners.push(Registration {
            target,
            kind,
            handler: Rc::new(RefCell::new(handler)),
            active: Rc::clone(&active),
        });
        FakeListener { active }
    }
}
