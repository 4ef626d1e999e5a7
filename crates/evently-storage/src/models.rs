// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use evently_contracts::{Event, EventDetails, Rsvp, UserSummary};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for UserSummary {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Event row joined with its creator, as selected by all read queries.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub max_attendees: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub creator_name: String,
    pub creator_email: String,
}

impl EventRow {
    /// Attach the event's RSVPs to produce the public shape.
    pub fn into_details(self, rsvps: Vec<Rsvp>) -> EventDetails {
        let rsvp_count = rsvps.len() as i64;
        EventDetails {
            creator: UserSummary {
                id: self.created_by,
                name: self.creator_name,
                email: self.creator_email,
            },
            event: Event {
                id: self.id,
                title: self.title,
                description: self.description,
                date: self.date,
                location: self.location,
                max_attendees: self.max_attendees,
                created_by: self.created_by,
                created_at: self.created_at,
            },
            rsvps,
            rsvp_count,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct RsvpRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<RsvpRow> for Rsvp {
    fn from(row: RsvpRow) -> Self {
        Self {
            id: row.id,
            event_id: row.event_id,
            user_email: row.user_email,
            user_name: row.user_name,
            created_at: row.created_at,
        }
    }
}
