//! Form domain layer
//!
//! Field values, focus handling, per-field errors and the validation rules
//! of the contact form.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form, FormFocus, DEFAULT_SUBMIT_LABEL};
pub use validation::{validate_all, ValidationReport};

#[cfg(test)]
pub use form_state::BUSY_LABEL;
