// RSVP DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registration binding an attendee (email + name) to an event.
///
/// `(event_id, user_email)` is unique across all RSVPs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request to RSVP to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRsvpRequest {
    pub user_email: String,
    pub user_name: String,
}

/// Request to withdraw an RSVP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelRsvpRequest {
    pub user_email: String,
}
