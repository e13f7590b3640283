//! Field rules for the contact form
//!
//! Every rule is a pure function from the raw input to either `Ok(())` or the
//! message to show under the field. Rules run in a fixed order: required,
//! minimum length, maximum length, then pattern. The first failure wins.

use super::field::FieldName;
use regex::Regex;
use std::sync::LazyLock;

/// A single field's rule: raw input in, validity plus message out
pub type FieldRule = fn(&str) -> Result<(), &'static str>;

pub const MIN_LENGTH: usize = 5;
pub const NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_MAX_LENGTH: usize = 50;
pub const MESSAGE_MAX_LENGTH: usize = 300;

/// Latin and Cyrillic letters, whitespace, hyphen, apostrophe
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ\s\-']+$").expect("valid name pattern"));

/// `local@domain.tld`, nothing stricter
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Length limits and messages shared by all three rules
struct Limits {
    required: &'static str,
    too_short: &'static str,
    too_long: &'static str,
    max: usize,
}

/// Lengths count Unicode scalar values, so an emoji is one character.
fn check_limits(value: &str, limits: &Limits) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err(limits.required);
    }
    let len = value.chars().count();
    if len < MIN_LENGTH {
        return Err(limits.too_short);
    }
    if len > limits.max {
        return Err(limits.too_long);
    }
    Ok(())
}

pub fn validate_name(value: &str) -> Result<(), &'static str> {
    check_limits(
        value,
        &Limits {
            required: "Full Name is required",
            too_short: "Name must be at least 5 characters",
            too_long: "Name must be less than 50 characters",
            max: NAME_MAX_LENGTH,
        },
    )?;
    if !NAME_PATTERN.is_match(value) {
        return Err("Name can only contain letters, spaces, hyphens and apostrophes");
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), &'static str> {
    check_limits(
        value,
        &Limits {
            required: "Email is required",
            too_short: "Email must be at least 5 characters",
            too_long: "Email must be less than 50 characters",
            max: EMAIL_MAX_LENGTH,
        },
    )?;
    if !EMAIL_PATTERN.is_match(value) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<(), &'static str> {
    check_limits(
        value,
        &Limits {
            required: "Message is required",
            too_short: "Message must be at least 5 characters",
            too_long: "Message must be less than 300 characters",
            max: MESSAGE_MAX_LENGTH,
        },
    )
}

/// Look up the rule for a field
pub fn rule_for(field: FieldName) -> FieldRule {
    match field {
        FieldName::Name => validate_name,
        FieldName::Email => validate_email,
        FieldName::Message => validate_message,
    }
}

pub fn validate_field(field: FieldName, value: &str) -> Result<(), &'static str> {
    rule_for(field)(value)
}

/// Outcome of one validation pass over the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationReport {
    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Message => self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Fields that failed, in tab order
    pub fn failed_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| self.error(*f).is_some())
            .collect()
    }
}

/// Run every rule. Never short-circuits, so all errors surface together.
pub fn validate_all(name: &str, email: &str, message: &str) -> ValidationReport {
    ValidationReport {
        name: validate_name(name).err(),
        email: validate_email(email).err(),
        message: validate_message(message).err(),
    }
}
