//! # Notification Bus
//!
//! A typed observer list. Collaborators subscribe to be re-rendered after
//! every successful mutation; the store calls [`SubscriberSet::notify`]
//! exactly once per mutation, after persistence.
//!
//! ## Delivery Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  notify(&state)                                                     │
//! │    │                                                                │
//! │    ├──► listener 1  (registration order)                            │
//! │    ├──► listener 2  ── panics! ──► caught + error! logged           │
//! │    └──► listener 3  (still runs)                                    │
//! │                                                                     │
//! │  • synchronous, on the caller's thread                              │
//! │  • registration order                                               │
//! │  • panic isolation IS enforced: one bad listener cannot starve      │
//! │    the rest                                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use stockbook_core::AppState;

/// A registered listener callback.
type Listener = Box<dyn Fn(&AppState)>;

// =============================================================================
// Subscriber Handle
// =============================================================================

/// Handle returned by [`SubscriberSet::subscribe`]; pass it back to
/// [`SubscriberSet::unsubscribe`] to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

// =============================================================================
// Subscriber Set
// =============================================================================

/// The observer list.
#[derive(Default)]
pub struct SubscriberSet {
    entries: Vec<(SubscriberId, Listener)>,
    next_id: u64,
}

impl SubscriberSet {
    pub fn new() -> Self {
        SubscriberSet::default()
    }

    /// Registers a listener and returns its handle.
    ///
    /// The listener is invoked with the current state after every
    /// successful mutation, until unsubscribed.
    pub fn subscribe(&mut self, listener: impl Fn(&AppState) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether the handle was registered.
    ///
    /// Unknown or already-removed handles are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes all listeners synchronously, in registration order.
    ///
    /// A panicking listener is caught and logged; the remaining listeners
    /// still run. Errors in listeners are their owner's problem, not the
    /// store's.
    pub fn notify(&self, state: &AppState) {
        for (id, listener) in &self.entries {
            if catch_unwind(AssertUnwindSafe(|| listener(state))).is_err() {
                error!(subscriber = id.0, "Subscriber panicked during notify");
            }
        }
    }
}

impl fmt::Debug for SubscriberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.entries.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
