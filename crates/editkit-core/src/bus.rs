//! External-save broadcast channel.
//!
//! A process-wide publish point: the host application broadcasts when it is
//! about to navigate away or run a global save, and every open editor flushes
//! its pending edit in response. Handlers run synchronously, in registration
//! order, on the turn that issues the broadcast.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use anyhow::Result;

/// A registered save handler. Failures are isolated per handler: a handler
/// returning `Err` is logged and does not stop the broadcast.
pub type SaveHandler = Box<dyn FnMut() -> Result<()>>;

/// Identifies one registration on an [`ExternalSaveBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

struct Registry {
    next_id: u64,
    // Registration order is delivery order.
    entries: Vec<(SubscriberId, Rc<RefCell<SaveHandler>>)>,
}

impl Registry {
    fn remove(&mut self, id: SubscriberId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }
}

/// What a [`ExternalSaveBus::broadcast`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BroadcastOutcome {
    /// Handlers that ran and returned `Ok`.
    pub delivered: usize,
    /// Handlers that ran and returned `Err` (logged, not propagated).
    pub failed: usize,
    /// Handlers skipped because they were deregistered mid-broadcast.
    pub skipped: usize,
}

/// The shared broadcast channel.
///
/// Cloning is cheap and every clone publishes to the same subscriber list.
/// The channel is single-threaded; do not call [`broadcast`](Self::broadcast)
/// reentrantly from inside a handler (a handler may, however, subscribe or
/// unsubscribe anything mid-broadcast).
#[derive(Clone)]
pub struct ExternalSaveBus {
    registry: Rc<RefCell<Registry>>,
}

impl Default for ExternalSaveBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ExternalSaveBus {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register `handler` for every future broadcast.
    ///
    /// The returned [`SaveSubscription`] is a scoped guard: dropping it (or
    /// calling [`SaveSubscription::release`]) removes the registration. Each
    /// editor owns exactly one subscription so its handler can never outlive
    /// it.
    pub fn subscribe(&self, handler: impl FnMut() -> Result<()> + 'static) -> SaveSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry
            .entries
            .push((id, Rc::new(RefCell::new(Box::new(handler) as SaveHandler))));
        SaveSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Remove the registration with `id`. Idempotent: unsubscribing an id that
    /// is already gone is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.registry.borrow_mut().remove(id);
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Invoke every currently-registered handler once, in registration order.
    ///
    /// The subscriber list is snapshotted up front, then each entry is
    /// re-checked against the live registry just before delivery, so a handler
    /// that unsubscribes itself or a later handler mid-broadcast neither
    /// corrupts the iteration nor causes a delivery to a removed subscriber.
    pub fn broadcast(&self) -> BroadcastOutcome {
        let snapshot: Vec<(SubscriberId, Rc<RefCell<SaveHandler>>)> =
            self.registry.borrow().entries.clone();

        let mut outcome = BroadcastOutcome::default();
        for (id, handler) in snapshot {
            let still_registered = self
                .registry
                .borrow()
                .entries
                .iter()
                .any(|(entry_id, _)| *entry_id == id);
            if !still_registered {
                outcome.skipped += 1;
                continue;
            }
            match (&mut *handler.borrow_mut())() {
                Ok(()) => outcome.delivered += 1,
                Err(e) => {
                    tracing::warn!(subscriber = id.0, "save handler failed: {e:#}");
                    outcome.failed += 1;
                }
            }
        }
        outcome
    }
}

/// Owned handle to one registration on an [`ExternalSaveBus`].
///
/// Releases the registration on drop, so pairing acquire with release is a
/// matter of ownership, not discipline.
pub struct SaveSubscription {
    id: SubscriberId,
    registry: Weak<RefCell<Registry>>,
}

impl SaveSubscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Remove the registration now. Safe to call more than once; releasing an
    /// already-released subscription is a no-op.
    pub fn release(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
        self.registry = Weak::new();
    }
}

impl Drop for SaveSubscription {
    fn drop(&mut self) {
        self.release();
    }
}
