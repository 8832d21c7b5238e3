//! Observable entity list.
//!
//! DESIGN
//! ======
//! `Observable<T>` owns an ordered list of entities and an ordered list of
//! listeners. Mutators in the owning store change `items` and then call
//! [`Observable::notify_all`], which hands every listener its own clone of the
//! list. Listeners never see the internal `Vec`, so nothing they do to their
//! snapshot can leak back into the store.
//!
//! Notification is synchronous: by the time `notify_all` returns, every
//! listener has run in registration order. A listener that panics is logged
//! and skipped so later listeners still observe the change.
//!
//! The panic guard only works where panics unwind, which means native builds
//! and tests. On `wasm32-unknown-unknown` panics abort, so in the browser a
//! panicking listener still ends the fan-out and the page with it. Listeners
//! must not panic.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Handle returned by [`Observable::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Ordered entities plus the callbacks interested in them.
pub struct Observable<T> {
    items: Vec<T>,
    listeners: Vec<(ListenerId, Listener<T>)>,
    next_listener: u64,
}

impl<T: Clone> Observable<T> {
    /// Create an empty list with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), listeners: Vec::new(), next_listener: 0 }
    }

    /// Register a listener. Duplicates are not detected; each registration
    /// is called once per notification, in registration order.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Call every listener with a fresh copy of the current items.
    pub fn notify_all(&mut self) {
        log::debug!("notifying {} listeners of {} items", self.listeners.len(), self.items.len());
        for (id, listener) in &mut self.listeners {
            let snapshot = self.items.clone();
            if catch_unwind(AssertUnwindSafe(|| listener(snapshot))).is_err() {
                log::error!("listener {id:?} panicked during notification; skipping");
            }
        }
    }

    /// Owned copy of the current items.
    #[must_use]
    pub fn snapshot(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Current items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Mutable access for the owning store. Callers are responsible for
    /// calling [`Observable::notify_all`] after a change.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<T: Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}
