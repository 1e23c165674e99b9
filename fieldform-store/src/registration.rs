use crate::registry::EntityId;
use crate::store::FormStore;
use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Unregister token returned when a field mounts.
///
/// Calling [`unregister`](Self::unregister) removes every entity sharing
/// this registration's name, not only this one, and deletes the name's
/// value. The token is one-shot: later calls do nothing. Dropping the token
/// does not unregister.
#[derive(Debug)]
pub struct Registration {
    store: Weak<FormStore>,
    id: EntityId,
    name: String,
    active: AtomicBool,
}

impl Registration {
    pub(crate) fn new(store: Weak<FormStore>, id: EntityId, name: String) -> Self {
        Self {
            store,
            id,
            name,
            active: AtomicBool::new(true),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while this entity is still registered. Turns false once this
    /// token is released, once another registration sharing the name is
    /// released, or once the form is dropped.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
            && self
                .store
                .upgrade()
                .is_some_and(|store| store.contains_entity(self.id))
    }

    pub fn unregister(&self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            trace!(field = %self.name, id = %self.id, "Registration already released");
            return;
        }
        // The form may already be gone; nothing left to clean up then.
        if let Some(store) = self.store.upgrade() {
            store.unregister_name(&self.name);
        }
    }
}
