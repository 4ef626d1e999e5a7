// Error types for event and RSVP operations

use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldError;

/// Result type alias for event and RSVP operations
pub type Result<T> = std::result::Result<T, EventError>;

/// Errors surfaced directly to the caller as distinct, user-visible
/// conditions. None are retried or recovered locally; persistence-layer
/// failures propagate unchanged through `Internal`.
#[derive(Debug, Error)]
pub enum EventError {
    /// Event not found
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    /// RSVP not found for the given (event, email) key
    #[error("RSVP not found for {email} on event {event_id}")]
    RsvpNotFound { event_id: Uuid, email: String },

    /// Event is full
    #[error("Event is full: {event_id} has reached {max_attendees} attendees")]
    CapacityExceeded { event_id: Uuid, max_attendees: i32 },

    /// Attendee already RSVP'd to this event
    #[error("User {email} already RSVP'd to event {event_id}")]
    DuplicateRegistration { event_id: Uuid, email: String },

    /// Malformed input, with one entry per offending field
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EventError {
    /// True for conditions the caller caused and can correct;
    /// false for infrastructure failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, EventError::Internal(_))
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
