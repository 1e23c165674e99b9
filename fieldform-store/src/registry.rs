//! Tracks mounted fields and their change listeners.

use fieldform_model::FieldProps;
use std::fmt;
use std::sync::Arc;

/// Zero-argument callback fired after every store mutation.
pub type StoreListener = Arc<dyn Fn() + Send + Sync>;

/// Identifies one registration. Ids are never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Returns the raw counter value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// One mounted field.
#[derive(Clone)]
pub struct FieldEntity {
    id: EntityId,
    props: FieldProps,
    on_store_change: StoreListener,
}

impl FieldEntity {
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.props.name
    }

    #[must_use]
    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    /// Invokes this entity's change listener.
    pub fn notify(&self) {
        (self.on_store_change)();
    }
}

impl fmt::Debug for FieldEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntity")
            .field("id", &self.id)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}

/// Ordered list of mounted fields.
///
/// Duplicate names are accepted; removal is by name and drops every entity
/// sharing it.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<FieldEntity>,
    next_id: u64,
}

impl EntityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field and returns its id.
    pub fn register(&mut self, props: FieldProps, on_store_change: StoreListener) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(FieldEntity {
            id,
            props,
            on_store_change,
        });
        id
    }

    /// Removes all entities named `name`, returning how many were dropped.
    pub fn remove_name(&mut self, name: &str) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.name() != name);
        before - self.entities.len()
    }

    /// Entities in registration order.
    pub fn entities(&self) -> impl Iterator<Item = &FieldEntity> {
        self.entities.iter()
    }

    /// Clones every listener, in registration order, so they can be invoked
    /// without holding a borrow of the registry.
    #[must_use]
    pub fn listeners(&self) -> Vec<StoreListener> {
        self.entities
            .iter()
            .map(|e| Arc::clone(&e.on_store_change))
            .collect()
    }

    #[must_use]
    pub fn contains_id(&self, id: EntityId) -> bool {
        self.entities.iter().any(|e| e.id == id)
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
