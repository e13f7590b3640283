//! Contact form state: field values, focus, per-field errors and the submit control

use super::field::{FieldName, FormField};
use super::validation::{validate_field, ValidationReport};

/// Label shown on the submit control while a request is in flight
pub const BUSY_LABEL: &str = "Sending...";

/// Default label of the submit control
pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_index(&self) -> usize;
    fn set_active_index(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_index();
        self.set_active_index((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_index();
        if current == 0 {
            self.set_active_index(count - 1);
        } else {
            self.set_active_index(current - 1);
        }
    }
}

/// What currently has keyboard focus inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    Submit,
}

impl FormFocus {
    fn index(&self) -> usize {
        match self {
            Self::Field(f) => f.index(),
            Self::Submit => FieldName::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldName::from_index(index)
            .map(Self::Field)
            .unwrap_or(Self::Submit)
    }
}

/// Error message attached to one field.
///
/// An empty message means no error. `hidden` is set when the field gains
/// focus: the message is kept but no longer displayed until the next render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub hidden: bool,
}

impl FieldError {
    pub fn is_displayed(&self) -> bool {
        !self.message.is_empty() && !self.hidden
    }
}

/// Current error message for each field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: [FieldError; 3],
}

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> &FieldError {
        &self.entries[field.index()]
    }

    /// Message to display under the field, if any
    pub fn displayed(&self, field: FieldName) -> Option<&str> {
        let entry = self.get(field);
        entry.is_displayed().then_some(entry.message.as_str())
    }

    /// Replace one field's message; `None` clears it
    pub fn set(&mut self, field: FieldName, message: Option<&str>) {
        self.entries[field.index()].message = message.unwrap_or_default().to_string();
    }

    /// Replace every field's message from a full validation pass
    pub fn apply_report(&mut self, report: &ValidationReport) {
        for field in FieldName::ALL {
            self.set(field, report.error(field));
        }
    }

    /// Make every non-empty message visible again
    pub fn show_all(&mut self) {
        for entry in &mut self.entries {
            entry.hidden = false;
        }
    }

    pub fn hide(&mut self, field: FieldName) {
        self.entries[field.index()].hidden = true;
    }

    pub fn clear(&mut self) {
        self.entries = Default::default();
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| !e.message.is_empty())
    }
}

/// The submit control: its label and whether it accepts presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    idle_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
            idle_label: None,
        }
    }

    /// Disable the control and show the busy label, remembering the original
    pub fn set_busy(&mut self) {
        if self.disabled {
            return;
        }
        self.idle_label = Some(std::mem::replace(&mut self.label, BUSY_LABEL.to_string()));
        self.disabled = true;
    }

    /// Re-enable the control and restore its original label
    pub fn set_idle(&mut self) {
        if let Some(label) = self.idle_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

/// The contact form shown inside the modal
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    pub focus: FormFocus,
    pub errors: FieldErrors,
    pub submit: SubmitButton,
}

impl ContactForm {
    pub fn new(submit_label: &str) -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            email: FormField::new(FieldName::Email),
            message: FormField::new(FieldName::Message),
            focus: FormFocus::Field(FieldName::Name),
            errors: FieldErrors::default(),
            submit: SubmitButton::new(submit_label),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    /// The focused text field, `None` when the submit control has focus
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            FormFocus::Field(name) => Some(self.field_mut(name)),
            FormFocus::Submit => None,
        }
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus == FormFocus::Submit
    }

    /// Move focus, running blur validation on the field being left and
    /// hiding the error of the field being entered.
    pub fn focus(&mut self, target: FormFocus) {
        if self.focus == target {
            return;
        }
        if let FormFocus::Field(left) = self.focus {
            self.blur(left);
        }
        self.focus = target;
        if let FormFocus::Field(entered) = target {
            self.errors.hide(entered);
        }
    }

    /// Re-validate one field and render all errors
    pub fn blur(&mut self, field: FieldName) {
        let result = validate_field(field, &self.field(field).value);
        tracing::debug!(field = field.key(), valid = result.is_ok(), "field blurred");
        self.errors.set(field, result.err());
        self.errors.show_all();
    }

    /// Clear every value and every error
    pub fn reset(&mut self) {
        for field in FieldName::ALL {
            self.field_mut(field).clear();
        }
        self.errors.clear();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_LABEL)
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        4 // name, email, message, submit
    }
    fn active_index(&self) -> usize {
        self.focus.index()
    }
    fn set_active_index(&mut self, index: usize) {
        self.focus(FormFocus::from_index(index.min(3)));
    }
}
