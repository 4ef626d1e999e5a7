// Boundary validation for incoming requests
//
// Types are static; validation is an explicit function returning the
// full list of offending fields, so callers can report every problem
// at once.

use evently_contracts::{CreateEventRequest, CreateRsvpRequest};

use crate::error::{EventError, Result};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a create-event request, collecting every failure.
pub fn validate_create_event(req: &CreateEventRequest) -> Result<()> {
    let mut errors = Vec::new();

    if req.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if req.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }
    if req.location.trim().is_empty() {
        errors.push(FieldError::new("location", "Location is required"));
    }
    if req.max_attendees <= 0 {
        errors.push(FieldError::new(
            "max_attendees",
            "Max attendees must be a positive number",
        ));
    }

    into_result(errors)
}

/// Validate an RSVP request, collecting every failure.
pub fn validate_create_rsvp(req: &CreateRsvpRequest) -> Result<()> {
    let mut errors = Vec::new();

    if !is_valid_email(&req.user_email) {
        errors.push(FieldError::new(
            "user_email",
            "Please provide a valid email address",
        ));
    }
    if req.user_name.trim().is_empty() {
        errors.push(FieldError::new("user_name", "User name is required"));
    }

    into_result(errors)
}

/// Validate the email key used to withdraw an RSVP.
pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(EventError::Validation(vec![FieldError::new(
            "user_email",
            "Please provide a valid email address",
        )]))
    }
}

fn into_result(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EventError::Validation(errors))
    }
}

/// Structural email check: non-empty local part, domain containing a dot,
/// no whitespace. Deliberately permissive; the mailbox is never verified.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
