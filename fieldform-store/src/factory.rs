use crate::store::Form;
use std::sync::OnceLock;
use tracing::debug;

/// Holds the one [`Form`] of a logical form, created on first access.
///
/// ```
/// # use fieldform_store::{Form, FormSlot};
/// let slot = FormSlot::new();
/// assert!(!slot.is_initialized());
/// let a = slot.get_or_init().clone();
/// let b = slot.get_or_init().clone();
/// assert!(Form::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Default)]
pub struct FormSlot {
    form: OnceLock<Form>,
}

impl FormSlot {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            form: OnceLock::new(),
        }
    }

    /// Returns the form, creating it on the first call only.
    pub fn get_or_init(&self) -> &Form {
        self.form.get_or_init(|| {
            debug!("Form store created");
            Form::new()
        })
    }

    #[must_use]
    pub fn get(&self) -> Option<&Form> {
        self.form.get()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.form.get().is_some()
    }
}
