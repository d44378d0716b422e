//! Callback observers for round changes.
//!
//! Observers register with a [`Round`](super::Round) and receive every
//! [`RoundEvent`] synchronously, in registration order, after the state has
//! been updated. Closures of the right shape are observers too.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RoundEvent;

/// Handle returned by registration, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Receives round change notifications.
pub trait RoundObserver: Send {
    /// Called once per change.
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent) + Send,
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event);
    }
}

/// Ordered set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(ObserverId, Box<dyn RoundObserver>)>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer, returns its ID.
    pub fn register(&mut self, observer: impl RoundObserver + 'static) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the ID was unknown.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Deliver an event to every observer.
    pub fn notify(&mut self, event: &RoundEvent) {
        for (_, observer) in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
