//! Carousel controller.
//!
//! # Design
//! - All mutable state lives behind one `Rc<RefCell<_>>`; event handlers and
//!   internal observers hold weak references, so dropping the [`Carousel`]
//!   releases everything.
//! - Observers run after the state borrow is released, in registration
//!   order, so they may read controller state.
//! - Listener guards are owned by the controller; dropping it (or calling
//!   [`Carousel::dispose`]) deregisters the resize, keyboard, click and
//!   transition-end handlers.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use crate::breakpoints::{EffectiveSlides, ViewportMode};
use crate::error::{CarouselError, HostError};
use crate::host::{EventKind, Handler, HostEvent, HostSurface, ListenTarget};
use crate::layout::{
    item_width_percent, percent, strip_width_percent, translate3d, translate_percent,
};
use crate::navigation::{
    Bounds, Direction, active_page, infinite_rebase, pagination_targets, resolve_target, signed,
};
use crate::observers::{MoveObservers, SubscriptionId, notify_all};
use crate::options::CarouselOptions;

/// Class names of the generated structure. External stylesheets rely on them.
pub mod class {
    /// Focusable root frame.
    pub const ROOT: &str = "carousel";
    /// Sliding strip holding the items.
    pub const CONTAINER: &str = "carousel-container";
    /// Wrapper around each slide.
    pub const ITEM: &str = "carousel-item";
    /// Next control.
    pub const NEXT: &str = "carousel-next";
    /// Previous control.
    pub const PREV: &str = "carousel-prev";
    /// Marker on the next control when no further slide exists.
    pub const NEXT_HIDDEN: &str = "carousel-next-hidden";
    /// Marker on the previous control at index zero.
    pub const PREV_HIDDEN: &str = "carousel-prev-hidden";
    /// Pagination row.
    pub const PAGINATION: &str = "carousel-pagination";
    /// Pagination button.
    pub const PAGINATION_BUTTON: &str = "carousel-pagination-button";
    /// Marker on the highlighted pagination button.
    pub const PAGINATION_BUTTON_ACTIVE: &str = "carousel-pagination-button-active";
}

/// Whether a move is animated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transition {
    /// Let the stylesheet transition play.
    #[default]
    Animated,
    /// Suspend the transition for this move only.
    Instant,
}

type Shared<H> = Rc<RefCell<State<H>>>;

struct State<H: HostSurface> {
    host: H,
    options: CarouselOptions,
    root: H::Node,
    container: H::Node,
    items: Vec<H::Node>,
    current: usize,
    offset: usize,
    mode: ViewportMode,
    observers: MoveObservers,
}

impl<H: HostSurface> State<H> {
    fn effective(&self) -> EffectiveSlides {
        EffectiveSlides::resolve(&self.options, self.mode)
    }

    fn bounds(&self) -> Bounds {
        Bounds {
            current: self.current,
            item_count: self.items.len(),
            visible: self.effective().visible,
            loop_items: self.options.loop_items,
        }
    }

    fn apply_layout(&self) {
        let visible = self.effective().visible;
        let count = self.items.len();
        self.host.set_style(
            &self.container,
            "width",
            &percent(strip_width_percent(count, visible)),
        );
        let item_width = percent(item_width_percent(count, visible));
        for item in &self.items {
            self.host.set_style(item, "width", &item_width);
        }
    }

    fn translate(&self, index: usize, transition: Transition) {
        let instant = transition == Transition::Instant;
        if instant {
            self.host.set_style(&self.container, "transition", "none");
        }
        self.host.set_style(
            &self.container,
            "transform",
            &translate3d(translate_percent(index, self.items.len())),
        );
        self.host.flush_layout(&self.container);
        if instant {
            self.host.set_style(&self.container, "transition", "");
        }
    }
}

/// Sliding strip built from a container's children.
pub struct Carousel<H: HostSurface> {
    shared: Shared<H>,
    listeners: Vec<H::Listener>,
}

impl<H: HostSurface> Carousel<H> {
    /// Rebuild `element`'s children into a carousel.
    ///
    /// Options are validated before the host is touched.
    ///
    /// # Errors
    /// Returns [`CarouselError::LoopAndInfinite`] or
    /// [`CarouselError::InvalidOption`] for invalid options, and
    /// [`CarouselError::Host`] when the host fails to build the structure.
    pub fn new(host: H, element: &H::Node, options: CarouselOptions) -> Result<Self, CarouselError> {
        options.validate()?;

        let children = host.children(element);
        let root = host.create_div(class::ROOT)?;
        host.set_attribute(&root, "tabindex", "0")?;
        let container = host.create_div(class::CONTAINER)?;
        host.append_child(&root, &container)?;
        host.append_child(element, &root)?;

        let mut items = children
            .iter()
            .map(|child| {
                let item = host.create_div(class::ITEM)?;
                host.append_child(&item, child)?;
                Ok(item)
            })
            .collect::<Result<Vec<_>, HostError>>()?;

        let offset = options.infinite_offset();
        if options.infinite {
            if offset > children.len() {
                warn!(
                    offset,
                    items = children.len(),
                    "not enough items in the carousel for infinite mode"
                );
            }
            items = pad_with_clones(&host, items, offset)?;
        }

        let shared = Rc::new(RefCell::new(State {
            host: host.clone(),
            options,
            root: root.clone(),
            container: container.clone(),
            items,
            current: 0,
            offset,
            mode: ViewportMode::Desktop,
            observers: MoveObservers::new(),
        }));

        if options.infinite {
            goto(&shared, signed(offset), Transition::Instant);
        }
        {
            let state = shared.borrow();
            for item in &state.items {
                host.append_child(&container, item)?;
            }
            state.apply_layout();
        }

        let mut listeners = Vec::new();
        if options.navigation {
            listeners.extend(create_navigation(&shared)?);
        }
        if options.pagination {
            listeners.extend(create_pagination(&shared)?);
        }

        let (current, subscribers) = {
            let state = shared.borrow();
            (state.current, state.observers.snapshot())
        };
        notify_all(&subscribers, current);
        on_viewport_resize(&shared);

        listeners.push(host.listen(
            ListenTarget::Viewport,
            EventKind::Resize,
            weak_handler(&shared, |shared, _| on_viewport_resize(shared)),
        ));
        listeners.push(host.listen(
            ListenTarget::Node(&root),
            EventKind::KeyUp,
            weak_handler(&shared, |shared, event| {
                let HostEvent::KeyUp { key } = event else {
                    return;
                };
                if let Some(direction) = Direction::from_key(&key) {
                    step(shared, direction);
                }
            }),
        ));
        if options.infinite {
            listeners.push(host.listen(
                ListenTarget::Node(&container),
                EventKind::TransitionEnd,
                weak_handler(&shared, |shared, _| reset_infinite(shared)),
            ));
        }

        debug!(
            items = shared.borrow().items.len(),
            offset,
            infinite = options.infinite,
            loop_items = options.loop_items,
            "carousel mounted"
        );
        Ok(Self { shared, listeners })
    }

    /// Move forward by the effective scroll step.
    pub fn next(&self) {
        step(&self.shared, Direction::Next);
    }

    /// Move backward by the effective scroll step.
    pub fn prev(&self) {
        step(&self.shared, Direction::Prev);
    }

    /// Move so that `index` is the first visible slide.
    ///
    /// Out-of-range requests wrap in loop mode and are otherwise ignored
    /// without notifying observers.
    pub fn goto_item(&self, index: isize, transition: Transition) {
        goto(&self.shared, index, transition);
    }

    /// Register an observer called with the new index after every move.
    pub fn on_move(&self, callback: impl Fn(usize) + 'static) -> SubscriptionId {
        self.shared.borrow_mut().observers.subscribe(callback)
    }

    /// Remove an observer. Returns `false` when it was not registered.
    pub fn off_move(&self, id: SubscriptionId) -> bool {
        self.shared.borrow_mut().observers.unsubscribe(id)
    }

    /// Current index register, clones included.
    #[must_use]
    pub fn current_item(&self) -> usize {
        self.shared.borrow().current
    }

    /// Number of items on the strip, clones included.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.shared.borrow().items.len()
    }

    /// Clone padding on each side of the strip (zero outside infinite mode).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.shared.borrow().offset
    }

    /// Whether the narrowed mobile layout is active.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.shared.borrow().mode.is_mobile()
    }

    /// Options the carousel was built with.
    #[must_use]
    pub fn options(&self) -> CarouselOptions {
        self.shared.borrow().options
    }

    /// Root frame node.
    #[must_use]
    pub fn root(&self) -> H::Node {
        self.shared.borrow().root.clone()
    }

    /// Deregister every event handler and observer.
    pub fn dispose(self) {
        let Self { shared, listeners } = self;
        drop(listeners);
        shared.borrow_mut().observers.clear();
        debug!("carousel disposed");
    }
}

fn pad_with_clones<H: HostSurface>(
    host: &H,
    items: Vec<H::Node>,
    offset: usize,
) -> Result<Vec<H::Node>, HostError> {
    let span = offset.min(items.len());
    let mut padded = Vec::with_capacity(items.len() + 2 * span);
    for item in &items[items.len() - span..] {
        padded.push(host.clone_node(item)?);
    }
    let head = items[..span]
        .iter()
        .map(|item| host.clone_node(item))
        .collect::<Result<Vec<_>, HostError>>()?;
    padded.extend(items);
    padded.extend(head);
    Ok(padded)
}

fn weak_handler<H: HostSurface>(
    shared: &Shared<H>,
    handle: impl Fn(&Shared<H>, HostEvent) + 'static,
) -> Handler {
    let weak: Weak<RefCell<State<H>>> = Rc::downgrade(shared);
    Box::new(move |event| {
        if let Some(shared) = weak.upgrade() {
            handle(&shared, event);
        }
    })
}

fn goto<H: HostSurface>(shared: &Shared<H>, index: isize, transition: Transition) {
    let (target, subscribers) = {
        let mut state = shared.borrow_mut();
        let Some(target) = resolve_target(index, &state.bounds()) else {
            trace!(index, "move ignored at boundary");
            return;
        };
        state.translate(target, transition);
        state.current = target;
        (target, state.observers.snapshot())
    };
    debug!(index = target, ?transition, "carousel moved");
    notify_all(&subscribers, target);
}

fn step<H: HostSurface>(shared: &Shared<H>, direction: Direction) {
    let target = {
        let state = shared.borrow();
        let current = signed(state.current);
        let scroll = signed(state.effective().scroll);
        match direction {
            Direction::Next => current + scroll,
            Direction::Prev => current - scroll,
        }
    };
    goto(shared, target, Transition::Animated);
}

fn reset_infinite<H: HostSurface>(shared: &Shared<H>) {
    let target = {
        let state = shared.borrow();
        infinite_rebase(
            state.current,
            state.items.len(),
            state.offset,
            state.options.slides_to_scroll,
        )
    };
    if let Some(target) = target {
        goto(shared, target, Transition::Instant);
    }
}

fn on_viewport_resize<H: HostSurface>(shared: &Shared<H>) {
    let (current, subscribers) = {
        let mut state = shared.borrow_mut();
        let mode = ViewportMode::for_width(state.host.viewport_width());
        if mode == state.mode {
            return;
        }
        state.mode = mode;
        state.apply_layout();
        debug!(mobile = mode.is_mobile(), "carousel layout switched");
        (state.current, state.observers.snapshot())
    };
    notify_all(&subscribers, current);
}

fn create_navigation<H: HostSurface>(shared: &Shared<H>) -> Result<Vec<H::Listener>, HostError> {
    let (host, root, loop_items) = {
        let state = shared.borrow();
        (state.host.clone(), state.root.clone(), state.options.loop_items)
    };
    let next_button = host.create_div(class::NEXT)?;
    let prev_button = host.create_div(class::PREV)?;
    host.append_child(&root, &next_button)?;
    host.append_child(&root, &prev_button)?;

    let listeners = vec![
        host.listen(
            ListenTarget::Node(&next_button),
            EventKind::Click,
            weak_handler(shared, |shared, _| step(shared, Direction::Next)),
        ),
        host.listen(
            ListenTarget::Node(&prev_button),
            EventKind::Click,
            weak_handler(shared, |shared, _| step(shared, Direction::Prev)),
        ),
    ];
    if loop_items {
        return Ok(listeners);
    }

    let weak = Rc::downgrade(shared);
    shared.borrow_mut().observers.subscribe(move |index| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let state = shared.borrow();
        state
            .host
            .toggle_class(&prev_button, class::PREV_HIDDEN, index == 0);
        state.host.toggle_class(
            &next_button,
            class::NEXT_HIDDEN,
            !state.bounds().has_item_after_visible(),
        );
    });
    Ok(listeners)
}

fn create_pagination<H: HostSurface>(shared: &Shared<H>) -> Result<Vec<H::Listener>, HostError> {
    let (host, root, targets) = {
        let state = shared.borrow();
        (
            state.host.clone(),
            state.root.clone(),
            pagination_targets(
                state.items.len(),
                state.offset,
                state.options.slides_to_scroll,
            ),
        )
    };
    let pagination = host.create_div(class::PAGINATION)?;
    host.append_child(&root, &pagination)?;

    let mut buttons = Vec::with_capacity(targets.len());
    let mut listeners = Vec::with_capacity(targets.len());
    for target in targets {
        let button = host.create_div(class::PAGINATION_BUTTON)?;
        listeners.push(host.listen(
            ListenTarget::Node(&button),
            EventKind::Click,
            weak_handler(shared, move |shared, _| {
                goto(shared, signed(target), Transition::Animated);
            }),
        ));
        host.append_child(&pagination, &button)?;
        buttons.push(button);
    }

    let weak = Rc::downgrade(shared);
    shared.borrow_mut().observers.subscribe(move |index| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let state = shared.borrow();
        let Some(active) = active_page(
            index,
            state.items.len(),
            state.offset,
            state.options.slides_to_scroll,
            buttons.len(),
        ) else {
            return;
        };
        for (position, button) in buttons.iter().enumerate() {
            state
                .host
                .toggle_class(button, class::PAGINATION_BUTTON_ACTIVE, position == active);
        }
    });
    Ok(listeners)
}
