//! Form field validation.
//!
//! Validation is local and synchronous. A [`Validator`] runs every rule of a form and
//! collects one [`FieldError`] per failing field, so callers can surface all messages at
//! once instead of stopping at the first problem. The first failing rule of a field wins.
//!
//! Rules:
//! - `required`: value must be non-blank
//! - `email`: `local@domain.tld` with no whitespace and a single `@`
//! - `digits(n)`: exactly `n` ASCII digits (phone numbers, Aadhaar, pincode)
//! - `pan`: five letters, four digits, one letter
//! - `ifsc`: four letters, a literal `0`, six alphanumerics

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleViolation {
    Required,
    InvalidEmail,
    WrongLength { expected: usize },
    NotNumeric,
    InvalidPan,
    InvalidIfsc,
    NotAllowed { allowed: Vec<String> },
    UnknownValue { value: String },
}

/// A failing field together with its user-facing label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub label: String,
    pub violation: RuleViolation,
}

impl FieldError {
    pub fn message(&self) -> String {
        match &self.violation {
            RuleViolation::Required => format!("{} is required", self.label),
            RuleViolation::InvalidEmail => "Invalid email address".to_string(),
            RuleViolation::WrongLength { expected } => {
                format!("{} must be {} digits", self.label, expected)
            }
            RuleViolation::NotNumeric => format!("{} must contain only digits", self.label),
            RuleViolation::InvalidPan => format!("{} is not a valid PAN", self.label),
            RuleViolation::InvalidIfsc => format!("{} is not a valid IFSC code", self.label),
            RuleViolation::NotAllowed { allowed } => {
                format!("{} must be one of: {}", self.label, allowed.join(", "))
            }
            RuleViolation::UnknownValue { value } => {
                format!("{} refers to unknown entry '{}'", self.label, value)
            }
        }
    }
}

/// Every field-level error of one submission, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Records an error unless the field already failed an earlier rule.
    pub fn push(&mut self, error: FieldError) {
        if !self.has(&error.field) {
            self.errors.push(error);
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message()))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Builder that runs rules field by field.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &str, label: &str, violation: RuleViolation) {
        self.errors.push(FieldError {
            field: field.to_string(),
            label: label.to_string(),
            violation,
        });
    }

    pub fn required(mut self, field: &str, label: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(field, label, RuleViolation::Required);
        }
        self
    }

    /// Fails on an empty list (multi-select fields).
    pub fn required_list(mut self, field: &str, label: &str, values: &[String]) -> Self {
        if values.iter().all(|v| v.trim().is_empty()) {
            self.fail(field, label, RuleViolation::Required);
        }
        self
    }

    pub fn required_flag(mut self, field: &str, label: &str, present: bool) -> Self {
        if !present {
            self.fail(field, label, RuleViolation::Required);
        }
        self
    }

    /// Email format check; blank values are left to `required`.
    pub fn email(mut self, field: &str, label: &str, value: &str) -> Self {
        if !value.is_empty() && !is_valid_email(value) {
            self.fail(field, label, RuleViolation::InvalidEmail);
        }
        self
    }

    /// Fixed-length numeric check; blank values are left to `required`.
    pub fn digits(mut self, field: &str, label: &str, value: &str, expected: usize) -> Self {
        if value.is_empty() {
            return self;
        }
        if !value.chars().all(|c| c.is_ascii_digit()) {
            self.fail(field, label, RuleViolation::NotNumeric);
        } else if value.len() != expected {
            self.fail(field, label, RuleViolation::WrongLength { expected });
        }
        self
    }

    pub fn pan(mut self, field: &str, label: &str, value: &str) -> Self {
        if !value.is_empty() && !is_valid_pan(value) {
            self.fail(field, label, RuleViolation::InvalidPan);
        }
        self
    }

    pub fn ifsc(mut self, field: &str, label: &str, value: &str) -> Self {
        if !value.is_empty() && !is_valid_ifsc(value) {
            self.fail(field, label, RuleViolation::InvalidIfsc);
        }
        self
    }

    pub fn one_of(mut self, field: &str, label: &str, value: &str, allowed: &[&str]) -> Self {
        if !value.is_empty() && !allowed.contains(&value) {
            self.fail(
                field,
                label,
                RuleViolation::NotAllowed {
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                },
            );
        }
        self
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }
}

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Permanent account number: five letters, four digits, one letter.
static PAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("Invalid PAN regex"));

/// Bank branch code: four letters, a literal zero, six alphanumerics.
static IFSC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}0[A-Za-z0-9]{6}$").expect("Invalid IFSC regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_pan(value: &str) -> bool {
    PAN_REGEX.is_match(value)
}

pub fn is_valid_ifsc(value: &str) -> bool {
    IFSC_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("jo hn@example.com"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@example."));
    }

    #[test]
    fn pan_and_ifsc_formats() {
        assert!(is_valid_pan("ABCDE1234F"));
        assert!(!is_valid_pan("ABCD12345F"));
        assert!(is_valid_ifsc("SBIN0001234"));
        assert!(!is_valid_ifsc("SBIN1001234"));
    }

    #[test]
    fn collects_every_failing_field() {
        let errors = Validator::new()
            .required("name", "Name", "")
            .required("email", "Email", "")
            .required("username", "Username", "jdoe")
            .finish();

        assert_eq!(errors.fields(), vec!["name", "email"]);
        assert_eq!(errors.get("name").unwrap().message(), "Name is required");
    }

    #[test]
    fn first_failing_rule_per_field_wins() {
        let errors = Validator::new()
            .required("email", "Email", "")
            .email("email", "Email", "")
            .finish();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email").unwrap().violation, RuleViolation::Required);
    }

    #[test]
    fn digits_checks_charset_before_length() {
        let errors = Validator::new()
            .digits("phone", "Contact Number", "98765x3210", 10)
            .digits("aadhar", "Aadhar Number", "1234", 12)
            .digits("optional", "Optional", "", 10)
            .finish();

        assert_eq!(errors.get("phone").unwrap().violation, RuleViolation::NotNumeric);
        assert_eq!(
            errors.get("aadhar").unwrap().message(),
            "Aadhar Number must be 12 digits"
        );
        assert!(!errors.has("optional"));
    }

    #[test]
    fn one_of_lists_allowed_values() {
        let errors = Validator::new()
            .one_of("class", "Class", "3 PU", &["1 PU", "2 PU"])
            .finish();
        assert_eq!(
            errors.get("class").unwrap().message(),
            "Class must be one of: 1 PU, 2 PU"
        );
    }

    #[test]
    fn display_joins_messages() {
        let errors = Validator::new()
            .required("name", "Name", "")
            .email("email", "Email", "nope")
            .finish();
        assert_eq!(
            errors.to_string(),
            "name: Name is required; email: Invalid email address"
        );
    }

    #[test]
    fn email_rejects_unicode_whitespace() {
        assert!(!is_valid_email("john\u{a0}@example.com"));
        assert!(!is_valid_email("john@exa\tmple.com"));
    }

    #[test]
    fn pan_and_ifsc_are_case_sensitive() {
        assert!(!is_valid_pan("abcde1234f"));
        assert!(!is_valid_pan("ABCDE1234F1"));
        assert!(!is_valid_ifsc("sbin0001234"));
        assert!(is_valid_ifsc("HDFC0ABC123"));
        assert!(!is_valid_ifsc("HDFC0ABC12"));
    }
}
