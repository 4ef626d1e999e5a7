// In-memory store implementation for examples and testing
//
// Keeps all data behind a single RwLock, so the check-and-insert in
// `create_rsvp` is serialized and the capacity/uniqueness invariants hold
// without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use evently_contracts::{
    CreateEventRequest, CreateRsvpRequest, Event, EventDetails, Rsvp, UserSummary,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{EventError, Result};
use crate::traits::{EventFilter, EventStore};

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<Uuid, UserSummary>,
    events: HashMap<Uuid, Event>,
    rsvps: HashMap<Uuid, Vec<Rsvp>>,
}

/// In-memory event store
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user so they can appear as an event creator.
    pub async fn add_user(&self, user: UserSummary) {
        self.inner.write().await.users.insert(user.id, user);
    }

    /// Pre-populate an event without going through validation
    /// (useful for testing).
    pub async fn seed_event(&self, event: Event) {
        self.inner.write().await.events.insert(event.id, event);
    }

    /// Clear all data
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.users.clear();
        inner.events.clear();
        inner.rsvps.clear();
    }
}

impl Inner {
    fn details(&self, event: &Event) -> Result<EventDetails> {
        let creator = self
            .users
            .get(&event.created_by)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown creator {}", event.created_by))?;
        let rsvps = self.rsvps.get(&event.id).cloned().unwrap_or_default();
        let rsvp_count = rsvps.len() as i64;
        Ok(EventDetails {
            event: event.clone(),
            creator,
            rsvps,
            rsvp_count,
        })
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn list_events(
        &self,
        filter: EventFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<EventDetails>, i64)> {
        let inner = self.inner.read().await;

        let mut matching: Vec<&Event> = inner
            .events
            .values()
            .filter(|e| filter.created_by.map_or(true, |c| e.created_by == c))
            .collect();
        matching.sort_by_key(|e| (e.date, e.id));

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .map(|e| inner.details(e))
            .collect::<Result<Vec<_>>>()?;

        Ok((page, total))
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<EventDetails>> {
        let inner = self.inner.read().await;
        inner.events.get(&id).map(|e| inner.details(e)).transpose()
    }

    async fn create_event(
        &self,
        input: CreateEventRequest,
        creator_id: Uuid,
    ) -> Result<EventDetails> {
        let mut inner = self.inner.write().await;
        let event = Event {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            date: input.date,
            location: input.location,
            max_attendees: input.max_attendees,
            created_by: creator_id,
            created_at: Utc::now(),
        };
        let details = inner.details(&event)?;
        inner.events.insert(event.id, event);
        Ok(details)
    }

    async fn count_rsvps(&self, event_id: Uuid) -> Result<i64> {
        let inner = self.inner.read().await;
        Ok(inner.rsvps.get(&event_id).map_or(0, |r| r.len() as i64))
    }

    async fn get_rsvp(&self, event_id: Uuid, email: &str) -> Result<Option<Rsvp>> {
        let inner = self.inner.read().await;
        Ok(inner
            .rsvps
            .get(&event_id)
            .and_then(|rsvps| rsvps.iter().find(|r| r.user_email == email).cloned()))
    }

    async fn create_rsvp(&self, event_id: Uuid, input: CreateRsvpRequest) -> Result<Rsvp> {
        // Single write guard covers the whole check-and-insert
        let mut inner = self.inner.write().await;

        let max_attendees = inner
            .events
            .get(&event_id)
            .map(|e| e.max_attendees)
            .ok_or(EventError::EventNotFound(event_id))?;

        // Capacity before uniqueness, matching the Postgres backend
        let rsvps = inner.rsvps.entry(event_id).or_default();
        if rsvps.len() as i64 >= i64::from(max_attendees) {
            return Err(EventError::CapacityExceeded {
                event_id,
                max_attendees,
            });
        }
        if rsvps.iter().any(|r| r.user_email == input.user_email) {
            return Err(EventError::DuplicateRegistration {
                event_id,
                email: input.user_email,
            });
        }

        let rsvp = Rsvp {
            id: Uuid::now_v7(),
            event_id,
            user_email: input.user_email,
            user_name: input.user_name,
            created_at: Utc::now(),
        };
        rsvps.push(rsvp.clone());
        Ok(rsvp)
    }

    async fn delete_rsvp(&self, event_id: Uuid, email: &str) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.rsvps.get_mut(&event_id) {
            Some(rsvps) => {
                let before = rsvps.len();
                rsvps.retain(|r| r.user_email != email);
                Ok(rsvps.len() < before)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store_with_event(max_attendees: i32) -> (InMemoryEventStore, Uuid) {
        let store = InMemoryEventStore::new();
        let creator = UserSummary {
            id: Uuid::now_v7(),
            name: "Admin User".into(),
            email: "admin@eventsystem.com".into(),
        };
        let event = Event {
            id: Uuid::now_v7(),
            title: "Startup Meetup".into(),
            description: "Monthly meetup".into(),
            date: Utc::now(),
            location: "Downtown Innovation Hub".into(),
            max_attendees,
            created_by: creator.id,
            created_at: Utc::now(),
        };
        let event_id = event.id;
        store.add_user(creator).await;
        store.seed_event(event).await;
        (store, event_id)
    }

    fn rsvp(email: &str) -> CreateRsvpRequest {
        CreateRsvpRequest {
            user_email: email.into(),
            user_name: "Attendee".into(),
        }
    }

    #[tokio::test]
    async fn full_event_reports_capacity_before_duplicate() {
        let (store, event_id) = store_with_event(1).await;
        store.create_rsvp(event_id, rsvp("alice@x.com")).await.unwrap();

        // Same email on a full event: capacity wins, as on Postgres
        let err = store.create_rsvp(event_id, rsvp("alice@x.com")).await;
        assert!(matches!(err, Err(EventError::CapacityExceeded { .. })));
    }

    #[tokio::test]
    async fn duplicate_reported_when_capacity_remains() {
        let (store, event_id) = store_with_event(5).await;
        store.create_rsvp(event_id, rsvp("alice@x.com")).await.unwrap();

        let err = store.create_rsvp(event_id, rsvp("alice@x.com")).await;
        assert!(matches!(err, Err(EventError::DuplicateRegistration { .. })));
    }
}
