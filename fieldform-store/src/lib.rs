//! Form state store for fieldform.
//!
//! Tracks a set of named field values independently of how fields are
//! rendered:
//!
//! - [`EntityRegistry`] — which fields are mounted, in registration order
//! - [`ValueStore`] — name → value mapping, the single source of truth
//! - [`validate`] — derives [`FieldError`]s from the first rule of each field
//! - [`Callbacks`] / [`SubmitOutcome`] — the submission pipeline
//! - [`Form`] — the public surface over one store; clones share state
//! - [`FormSlot`] — lazily creates one [`Form`] per logical form
//! - [`FieldBinding`] — the input-facing half of a mounted field
//!
//! Every mutation through [`Form::set_field_value`] is broadcast to all
//! registered fields, not only the ones whose values changed. Listeners and
//! submission callbacks run after the store lock is released, so they may
//! call back into the same [`Form`].
//!
//! [`FieldError`]: fieldform_model::FieldError

mod binding;
mod factory;
mod registration;
mod registry;
mod store;
mod submit;
mod validate;
mod values;

pub use binding::FieldBinding;
pub use factory::FormSlot;
pub use registration::Registration;
pub use registry::{EntityId, EntityRegistry, FieldEntity, StoreListener};
pub use store::Form;
pub use submit::{Callbacks, FinishFailedHandler, FinishHandler, SubmitOutcome};
pub use validate::validate;
pub use values::ValueStore;

pub use fieldform_model::{FieldError, FieldProps, FieldValue, FormSchema, Rule, Values};
