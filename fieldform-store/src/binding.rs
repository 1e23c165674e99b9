use crate::registration::Registration;
use crate::store::Form;
use fieldform_model::{FieldProps, FieldValue};

/// The store-facing half of a rendered field.
///
/// A binding registers on mount, reads the controlled value for display,
/// and writes user input back as a single-key merge. Rendering itself is
/// left to the caller.
#[derive(Debug)]
pub struct FieldBinding {
    form: Form,
    registration: Registration,
}

impl FieldBinding {
    pub fn mount(
        form: &Form,
        props: FieldProps,
        on_store_change: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let registration = form.register_field_entities(props, on_store_change);
        Self {
            form: form.clone(),
            registration,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.registration.name()
    }

    /// The value to display: the stored value, or empty text when unset.
    #[must_use]
    pub fn value(&self) -> FieldValue {
        self.form.get_field_value(self.name()).unwrap_or_default()
    }

    /// Forwards user input as `{name: value}`.
    pub fn on_change(&self, value: impl Into<FieldValue>) {
        self.form.set_field_value([(self.name().to_string(), value.into())]);
    }

    /// Releases the registration. Safe to call more than once.
    pub fn unmount(&self) {
        self.registration.unregister();
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.registration.is_active()
    }
}
