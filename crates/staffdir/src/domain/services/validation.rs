//! Field validation for employee create/edit input
//!
//! Values are trimmed before being checked. Rules:
//! - firstName, lastName, department, role: required, 2-50 characters
//! - email: required, `local@domain.tld` shape

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::entities::{EmployeePatch, NewEmployee};
use crate::domain::errors::DomainError;

pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 50;

const REQUIRED: &str = "This field is required";
const INVALID_EMAIL: &str = "Please enter a valid email address";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one input, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Message for one field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.push(FieldError { field, message });
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors.to_string())
    }
}

/// Check a name-like text field (names, department, role)
pub fn validate_text(value: &str) -> Result<(), String> {
    let value = value.trim();
    let len = value.chars().count();

    if value.is_empty() {
        Err(REQUIRED.to_string())
    } else if len < MIN_TEXT_LEN {
        Err(format!("Minimum {} characters required", MIN_TEXT_LEN))
    } else if len > MAX_TEXT_LEN {
        Err(format!("Maximum {} characters allowed", MAX_TEXT_LEN))
    } else {
        Ok(())
    }
}

/// Check the email field
pub fn validate_email(value: &str) -> Result<(), String> {
    let value = value.trim();

    if value.is_empty() {
        Err(REQUIRED.to_string())
    } else if !email_pattern().is_match(value) {
        Err(INVALID_EMAIL.to_string())
    } else {
        Ok(())
    }
}

/// Validate every field of a create request
pub fn validate_new(employee: &NewEmployee) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("firstName", validate_text(&employee.first_name));
    errors.check("lastName", validate_text(&employee.last_name));
    errors.check("email", validate_email(&employee.email));
    errors.check("department", validate_text(&employee.department));
    errors.check("role", validate_text(&employee.role));
    errors.into_result()
}

/// Validate only the fields a patch supplies
pub fn validate_patch(patch: &EmployeePatch) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if let Some(v) = &patch.first_name {
        errors.check("firstName", validate_text(v));
    }
    if let Some(v) = &patch.last_name {
        errors.check("lastName", validate_text(v));
    }
    if let Some(v) = &patch.email {
        errors.check("email", validate_email(v));
    }
    if let Some(v) = &patch.department {
        errors.check("department", validate_text(v));
    }
    if let Some(v) = &patch.role {
        errors.check("role", validate_text(v));
    }
    errors.into_result()
}
