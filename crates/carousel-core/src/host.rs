//! Rendering-environment capabilities the controller depends on.
//!
//! # Design
//! - The controller never touches a global window or document; element
//!   creation, event subscription and viewport queries all go through
//!   [`HostSurface`].
//! - Listeners are RAII guards: dropping one deregisters its handler.
//! - Style and class writes are best-effort; a host logs its own failures.

use crate::error::HostError;

/// Events the controller subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation of a control.
    Click,
    /// Key release while the target has focus.
    KeyUp,
    /// Viewport size change.
    Resize,
    /// End of a CSS transition on the target.
    TransitionEnd,
}

/// Payload delivered to a listener.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// A control was clicked.
    Click,
    /// A key was released.
    KeyUp {
        /// DOM `key` value, e.g. `ArrowRight`.
        key: String,
    },
    /// The viewport was resized.
    Resize,
    /// A transition finished.
    TransitionEnd,
}

impl HostEvent {
    /// Kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Click => EventKind::Click,
            Self::KeyUp { .. } => EventKind::KeyUp,
            Self::Resize => EventKind::Resize,
            Self::TransitionEnd => EventKind::TransitionEnd,
        }
    }
}

/// Where a listener is attached.
#[derive(Clone, Copy, Debug)]
pub enum ListenTarget<'a, N> {
    /// The window/viewport.
    Viewport,
    /// A specific node.
    Node(&'a N),
}

/// Event handler boxed for storage by the host.
pub type Handler = Box<dyn FnMut(HostEvent)>;

/// Capabilities a rendering environment provides to the controller.
pub trait HostSurface: Clone + 'static {
    /// Element handle.
    type Node: Clone + 'static;
    /// Guard keeping a registered handler alive.
    type Listener: 'static;

    /// Current element children of `node`, in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Create a detached `div` carrying `class`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the element cannot be created.
    fn create_div(&self, class: &str) -> Result<Self::Node, HostError>;

    /// Append `child` to `parent`, moving it if already attached.
    ///
    /// # Errors
    /// Returns [`HostError`] when the host rejects the insertion.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Deep-copy `node` and its subtree.
    ///
    /// # Errors
    /// Returns [`HostError`] when the node cannot be cloned.
    fn clone_node(&self, node: &Self::Node) -> Result<Self::Node, HostError>;

    /// Set an attribute on `node`.
    ///
    /// # Errors
    /// Returns [`HostError`] when the attribute cannot be written.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError>;

    /// Set an inline style property; an empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Add (`on`) or remove a class token.
    fn toggle_class(&self, node: &Self::Node, class: &str, on: bool);

    /// Force pending style changes on `node` to be applied before returning.
    fn flush_layout(&self, node: &Self::Node);

    /// Viewport width in CSS pixels.
    fn viewport_width(&self) -> f64;

    /// Register `handler` for `kind` events on `target`.
    fn listen(
        &self,
        target: ListenTarget<'_, Self::Node>,
        kind: EventKind,
        handler: Handler,
    ) -> Self::Listener;
}
