//! Data model for fieldform.
//!
//! Defines the plain types shared by the form store and its callers:
//! - [`FieldValue`] — the value held for one named field (text or number)
//! - [`Values`] — a name → value snapshot
//! - [`Rule`] — a declarative validation rule (only `required` is interpreted)
//! - [`FieldProps`] — the enumerated configuration a field registers with
//! - [`FieldError`] — one failed rule, surfaced on submission
//! - [`FormSchema`] — a list of field configurations loadable from JSON
//!
//! None of these types carry behavior beyond construction and parsing; the
//! store crate owns all state and lifecycle.

mod error;
mod schema;
mod value;

pub use error::{ModelError, ModelResult};
pub use schema::{FieldError, FieldProps, FormSchema, Rule};
pub use value::{FieldValue, Values};
