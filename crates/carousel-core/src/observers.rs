//! Ordered list of "current index moved" subscribers.

use std::fmt;
use std::rc::Rc;

/// Callback invoked with the new current index.
pub type MoveCallback = Rc<dyn Fn(usize)>;

/// Handle returned by [`MoveObservers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscribers notified synchronously, in registration order.
#[derive(Default)]
pub struct MoveObservers {
    next_id: u64,
    entries: Vec<(SubscriptionId, MoveCallback)>,
}

impl MoveObservers {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subscriber.
    pub fn subscribe(&mut self, callback: impl Fn(usize) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let callback: MoveCallback = Rc::new(callback);
        self.entries.push((id, callback));
        id
    }

    /// Remove a subscriber. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subscriber is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every subscriber.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Clone the callbacks so they can run after the owner releases its borrow.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MoveCallback> {
        self.entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect()
    }

    /// Invoke every subscriber with `index`.
    pub fn notify(&self, index: usize) {
        notify_all(&self.snapshot(), index);
    }
}

impl fmt::Debug for MoveObservers {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MoveObservers")
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Fan `index` out to a detached snapshot.
pub fn notify_all(callbacks: &[MoveCallback], index: usize) {
    for callback in callbacks {
        callback(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn notifies_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = MoveObservers::new();
        for tag in ["a", "b", "c"] {
            let seen = Rc::clone(&seen);
            observers.subscribe(move |index| seen.borrow_mut().push((tag, index)));
        }
        observers.notify(4);
        assert_eq!(*seen.borrow(), vec![("a", 4), ("b", 4), ("c", 4)]);
    }

    #[test]
    fn unsubscribe_removes_only_the_target() {
        let calls = Rc::new(RefCell::new(0_usize));
        let mut observers = MoveObservers::new();
        let first = {
            let calls = Rc::clone(&calls);
            observers.subscribe(move |_| *calls.borrow_mut() += 1)
        };
        let _second = {
            let calls = Rc::clone(&calls);
            observers.subscribe(move |_| *calls.borrow_mut() += 10)
        };
        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        assert_eq!(observers.len(), 1);
        observers.notify(0);
        assert_eq!(*calls.borrow(), 10);
        observers.clear();
        assert!(observers.is_empty());
    }
}
