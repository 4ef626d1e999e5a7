// Event service: paginated listing, retrieval, creation

use std::sync::Arc;

use evently_contracts::{CreateEventRequest, EventDetails, EventListResponse, ListQuery};
use uuid::Uuid;

use crate::error::{EventError, Result};
use crate::pagination::PageParams;
use crate::traits::{EventFilter, EventStore};
use crate::validation::validate_create_event;

pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// List events ordered by ascending date.
    ///
    /// A page past the end of the collection returns an empty slice with
    /// correct pagination metadata, not an error.
    pub async fn list(&self, query: &ListQuery) -> Result<EventListResponse> {
        self.list_filtered(query, EventFilter::default()).await
    }

    /// List only the events created by `creator_id`.
    pub async fn list_by_creator(
        &self,
        creator_id: Uuid,
        query: &ListQuery,
    ) -> Result<EventListResponse> {
        self.list_filtered(query, EventFilter::by_creator(creator_id))
            .await
    }

    async fn list_filtered(
        &self,
        query: &ListQuery,
        filter: EventFilter,
    ) -> Result<EventListResponse> {
        let params = PageParams::from_query(query);
        let (events, total) = self
            .store
            .list_events(filter, params.offset(), params.limit)
            .await?;

        Ok(EventListResponse {
            events,
            pagination: params.metadata(total),
        })
    }

    /// Fetch a single event with creator and RSVP details.
    pub async fn get(&self, id: Uuid) -> Result<EventDetails> {
        self.store
            .get_event(id)
            .await?
            .ok_or(EventError::EventNotFound(id))
    }

    /// Validate and persist a new event for the given creator.
    pub async fn create(
        &self,
        req: CreateEventRequest,
        creator_id: Uuid,
    ) -> Result<EventDetails> {
        validate_create_event(&req)?;
        let details = self.store.create_event(req, creator_id).await?;
        tracing::debug!(event_id = %details.event.id, %creator_id, "event created");
        Ok(details)
    }
}
