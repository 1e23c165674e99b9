//! The form store and its public handle.

use crate::registration::Registration;
use crate::registry::{EntityId, EntityRegistry, StoreListener};
use crate::submit::{Callbacks, SubmitOutcome};
use crate::validate::validate;
use crate::values::ValueStore;
use fieldform_model::{FieldError, FieldProps, FieldValue, FormSchema, Values};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Everything one form owns. Guarded as a single unit.
#[derive(Debug, Default)]
struct FormState {
    registry: EntityRegistry,
    values: ValueStore,
    callbacks: Callbacks,
}

#[derive(Debug, Default)]
pub(crate) struct FormStore {
    state: Mutex<FormState>,
}

impl FormStore {
    /// Callbacks never run under the lock, so a poisoned lock still guards
    /// consistent state.
    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn contains_entity(&self, id: EntityId) -> bool {
        self.lock().registry.contains_id(id)
    }

    /// Drops every entity named `name` and that name's value.
    pub(crate) fn unregister_name(&self, name: &str) {
        let mut state = self.lock();
        let removed = state.registry.remove_name(name);
        let had_value = state.values.remove(name).is_some();
        debug!(field = %name, removed, had_value, "Field unregistered");
    }
}

/// Public surface over one form store.
///
/// Cloning is cheap and every clone refers to the same store, so a
/// `Form` can be handed to each mounted field and held for the life of
/// the form. Use [`Form::ptr_eq`] to check identity.
///
/// Operations run to completion before returning. Within
/// [`set_field_value`](Self::set_field_value) the merge is finished before
/// any listener fires, and [`submit`](Self::submit) sees every merge that
/// returned before it was called.
#[derive(Debug, Clone, Default)]
pub struct Form {
    store: Arc<FormStore>,
}

impl Form {
    /// Creates a form with no fields, no values, and no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both handles share one store.
    #[must_use]
    pub fn ptr_eq(a: &Form, b: &Form) -> bool {
        Arc::ptr_eq(&a.store, &b.store)
    }

    /// A detached copy of all current values.
    #[must_use]
    pub fn get_fields_value(&self) -> Values {
        self.store.lock().values.snapshot()
    }

    /// The current value of `name`, or `None` if unset or unknown.
    #[must_use]
    pub fn get_field_value(&self, name: &str) -> Option<FieldValue> {
        self.store.lock().values.get(name).cloned()
    }

    /// Merges `partial` into the store, then notifies every registered
    /// field, whether or not its own value was among the updated keys.
    ///
    /// ```
    /// # use fieldform_store::{Form, FieldValue};
    /// let form = Form::new();
    /// form.set_field_value([("username", "bob")]);
    /// assert_eq!(form.get_field_value("username"), Some(FieldValue::from("bob")));
    /// ```
    pub fn set_field_value<I, K, V>(&self, partial: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let listeners = {
            let mut state = self.store.lock();
            state
                .values
                .merge(partial.into_iter().map(|(k, v)| (k.into(), v.into())));
            state.registry.listeners()
        };
        trace!(listeners = listeners.len(), "Broadcasting store change");
        for listener in listeners {
            listener();
        }
    }

    /// Mounts a field. `on_store_change` fires after every
    /// [`set_field_value`](Self::set_field_value) on this form.
    ///
    /// Names need not be unique, but unregistering any of them removes all
    /// entities sharing the name along with its value.
    pub fn register_field_entities(
        &self,
        props: FieldProps,
        on_store_change: impl Fn() + Send + Sync + 'static,
    ) -> Registration {
        self.register_listener(props, Arc::new(on_store_change))
    }

    fn register_listener(&self, props: FieldProps, listener: StoreListener) -> Registration {
        let name = props.name.clone();
        let id: EntityId = self.store.lock().registry.register(props, listener);
        debug!(field = %name, %id, "Field registered");
        Registration::new(Arc::downgrade(&self.store), id, name)
    }

    /// Registers every field in `schema`, in order, with no change listener.
    pub fn register_schema(&self, schema: &FormSchema) -> Vec<Registration> {
        schema
            .fields
            .iter()
            .map(|props| self.register_listener(props.clone(), Arc::new(|| {})))
            .collect()
    }

    /// Runs validation without submitting.
    #[must_use]
    pub fn validate_fields(&self) -> Vec<FieldError> {
        let state = self.store.lock();
        validate(&state.registry, &state.values)
    }

    /// Validates, then invokes `on_finish` or `on_finish_failed` if set.
    ///
    /// The outcome is also returned, so callers without callbacks can
    /// inspect it.
    pub fn submit(&self) -> SubmitOutcome {
        let (outcome, callbacks) = {
            let state = self.store.lock();
            let errors = validate(&state.registry, &state.values);
            let outcome = SubmitOutcome::from_validation(errors, state.values.snapshot());
            (outcome, state.callbacks.clone())
        };
        match &outcome {
            SubmitOutcome::Finished(values) => {
                debug!(fields = values.len(), "Form submitted");
            }
            SubmitOutcome::Failed { errors, .. } => {
                debug!(errors = errors.len(), "Form submission failed validation");
            }
        }
        outcome.dispatch(&callbacks);
        outcome
    }

    /// Merges `callbacks` into the form's callback set.
    pub fn set_callbacks(&self, callbacks: Callbacks) {
        self.store.lock().callbacks.merge(callbacks);
    }
}
