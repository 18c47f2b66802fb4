//! Ordered subscriber registry
//!
//! Explicit subscriber lists replace single-slot callback fields: multiple
//! independent consumers can register without overwriting each other, and
//! notification order is registration order.

/// Handle returned by [`Subscribers::add`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of event callbacks
pub struct Subscribers<E> {
    entries: Vec<(SubscriptionId, Box<dyn Fn(&E) + Send>)>,
    next_id: u64,
}

impl<E> Subscribers<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a callback; callbacks run in registration order
    pub fn add(&mut self, callback: impl Fn(&E) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if the id is unknown
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invoke every callback with the event, in registration order
    pub fn notify(&self, event: &E) {
        for (_, callback) in &self.entries {
            callback(event);
        }
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self::new()
    }
}
