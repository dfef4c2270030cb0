//! Form domain layer
//!
//! Field descriptors, focus handling and validation for the user form.

mod field;
mod form_state;

pub use field::{fields_in, FieldGroup, FieldKind, FormField, FIELDS, FIELD_COUNT};
pub use form_state::{validate, UserForm, ValidationError};
