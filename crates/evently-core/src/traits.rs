// Persistence collaborator trait for pluggable backends
//
// Implementations:
// - `evently_storage::Database` for Postgres in production
// - `InMemoryEventStore` for unit tests and examples

use async_trait::async_trait;
use evently_contracts::{CreateEventRequest, CreateRsvpRequest, EventDetails, Rsvp};
use uuid::Uuid;

use crate::error::Result;

/// Filter applied identically to the listed slice and to the total count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Restrict to events created by this user ("my events").
    pub created_by: Option<Uuid>,
}

impl EventFilter {
    pub fn by_creator(creator_id: Uuid) -> Self {
        Self {
            created_by: Some(creator_id),
        }
    }
}

/// Persistence operations consumed by the event and RSVP services.
///
/// All reads return events enriched with creator summary and RSVPs.
/// `create_rsvp` is the authoritative admission guard: implementations
/// must enforce the `(event_id, user_email)` uniqueness invariant and the
/// capacity limit at the storage layer, returning `DuplicateRegistration`
/// or `CapacityExceeded` when the service-level fast-path checks raced.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// List events ordered by ascending date, plus the total count under
    /// the same filter.
    async fn list_events(
        &self,
        filter: EventFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<EventDetails>, i64)>;

    /// Fetch a single event by id.
    async fn get_event(&self, id: Uuid) -> Result<Option<EventDetails>>;

    /// Persist a new event for the given creator.
    async fn create_event(
        &self,
        input: CreateEventRequest,
        creator_id: Uuid,
    ) -> Result<EventDetails>;

    /// Current number of RSVPs for an event.
    async fn count_rsvps(&self, event_id: Uuid) -> Result<i64>;

    /// Fetch an RSVP by its `(event_id, email)` key.
    async fn get_rsvp(&self, event_id: Uuid, email: &str) -> Result<Option<Rsvp>>;

    /// Persist a new RSVP.
    async fn create_rsvp(&self, event_id: Uuid, input: CreateRsvpRequest) -> Result<Rsvp>;

    /// Delete an RSVP by its `(event_id, email)` key. Returns whether a
    /// record was removed.
    async fn delete_rsvp(&self, event_id: Uuid, email: &str) -> Result<bool>;
}
