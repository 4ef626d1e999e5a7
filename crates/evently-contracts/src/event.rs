// Event DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Pagination;
use crate::rsvp::Rsvp;
use crate::user::UserSummary;

/// An event as stored: created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// An event enriched with its creator summary and current RSVPs,
/// the shape returned by all read operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub creator: UserSummary,
    pub rsvps: Vec<Rsvp>,
    pub rsvp_count: i64,
}

/// Request to create a new event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
}

/// Paginated event list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    pub events: Vec<EventDetails>,
    pub pagination: Pagination,
}
