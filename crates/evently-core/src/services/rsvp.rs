// RSVP service: admission (capacity + uniqueness gating) and withdrawal

use std::sync::Arc;

use evently_contracts::{CreateRsvpRequest, Rsvp, SuccessResponse};
use uuid::Uuid;

use crate::error::{EventError, Result};
use crate::traits::EventStore;
use crate::validation::{validate_create_rsvp, validate_email};

pub struct RsvpService {
    store: Arc<dyn EventStore>,
}

impl RsvpService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Decide whether to admit an RSVP and persist it.
    ///
    /// The capacity and uniqueness checks here are a fast path for
    /// user-facing errors; the store re-enforces both invariants when it
    /// commits, so a race between two concurrent admissions for the last
    /// slot still resolves to exactly one success.
    pub async fn admit(&self, event_id: Uuid, req: CreateRsvpRequest) -> Result<Rsvp> {
        validate_create_rsvp(&req)?;

        let event = self
            .store
            .get_event(event_id)
            .await?
            .ok_or(EventError::EventNotFound(event_id))?;

        let count = self.store.count_rsvps(event_id).await?;
        if count >= i64::from(event.event.max_attendees) {
            tracing::debug!(%event_id, count, "admission rejected: event full");
            return Err(EventError::CapacityExceeded {
                event_id,
                max_attendees: event.event.max_attendees,
            });
        }

        if self.store.get_rsvp(event_id, &req.user_email).await?.is_some() {
            tracing::debug!(%event_id, email = %req.user_email, "admission rejected: duplicate");
            return Err(EventError::DuplicateRegistration {
                event_id,
                email: req.user_email,
            });
        }

        self.store.create_rsvp(event_id, req).await
    }

    /// Withdraw an RSVP by its `(event_id, email)` key.
    ///
    /// The first call succeeds; repeating it reports `RsvpNotFound`.
    /// The delete outcome is authoritative, so two racing withdrawals
    /// for the same key resolve to exactly one acknowledgement.
    pub async fn withdraw(&self, event_id: Uuid, email: &str) -> Result<SuccessResponse> {
        validate_email(email)?;

        let deleted = self.store.delete_rsvp(event_id, email).await?;
        if !deleted {
            return Err(EventError::RsvpNotFound {
                event_id,
                email: email.to_string(),
            });
        }

        Ok(SuccessResponse::new("RSVP deleted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryEventStore;
    use chrono::Utc;
    use evently_contracts::{Event, UserSummary};

    struct Fixture {
        service: RsvpService,
        event_id: Uuid,
    }

    async fn fixture(max_attendees: i32) -> Fixture {
        let store = InMemoryEventStore::new();
        let creator = UserSummary {
            id: Uuid::now_v7(),
            name: "Admin User".into(),
            email: "admin@eventsystem.com".into(),
        };
        let event = Event {
            id: Uuid::now_v7(),
            title: "Design Workshop".into(),
            description: "Hands-on workshop".into(),
            date: Utc::now(),
            location: "Creative Studio Space".into(),
            max_attendees,
            created_by: creator.id,
            created_at: Utc::now(),
        };
        let event_id = event.id;
        store.add_user(creator).await;
        store.seed_event(event).await;

        Fixture {
            service: RsvpService::new(Arc::new(store)),
            event_id,
        }
    }

    fn rsvp(email: &str, name: &str) -> CreateRsvpRequest {
        CreateRsvpRequest {
            user_email: email.into(),
            user_name: name.into(),
        }
    }

    #[tokio::test]
    async fn admits_until_capacity_then_rejects() {
        let f = fixture(2).await;

        f.service
            .admit(f.event_id, rsvp("alice@x.com", "Alice"))
            .await
            .unwrap();
        f.service
            .admit(f.event_id, rsvp("bob@x.com", "Bob"))
            .await
            .unwrap();

        match f.service.admit(f.event_id, rsvp("carol@x.com", "Carol")).await {
            Err(EventError::CapacityExceeded { max_attendees, .. }) => {
                assert_eq!(max_attendees, 2);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_email_rejected_regardless_of_name() {
        let f = fixture(10).await;

        f.service
            .admit(f.event_id, rsvp("alice@x.com", "Alice"))
            .await
            .unwrap();

        match f
            .service
            .admit(f.event_id, rsvp("alice@x.com", "Alicia"))
            .await
        {
            Err(EventError::DuplicateRegistration { email, .. }) => {
                assert_eq!(email, "alice@x.com");
            }
            other => panic!("expected DuplicateRegistration, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn admitting_to_missing_event_is_not_found() {
        let f = fixture(10).await;
        let missing = Uuid::now_v7();
        assert!(matches!(
            f.service.admit(missing, rsvp("alice@x.com", "Alice")).await,
            Err(EventError::EventNotFound(id)) if id == missing
        ));
    }

    #[tokio::test]
    async fn admission_validates_input_first() {
        let f = fixture(10).await;
        assert!(matches!(
            f.service.admit(f.event_id, rsvp("bad-email", "Alice")).await,
            Err(EventError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn withdraw_then_withdraw_again() {
        let f = fixture(10).await;
        f.service
            .admit(f.event_id, rsvp("alice@x.com", "Alice"))
            .await
            .unwrap();

        let ack = f.service.withdraw(f.event_id, "alice@x.com").await.unwrap();
        assert_eq!(ack.message, "RSVP deleted successfully");

        assert!(matches!(
            f.service.withdraw(f.event_id, "alice@x.com").await,
            Err(EventError::RsvpNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn withdrawing_missing_rsvp_is_not_found() {
        let f = fixture(10).await;
        assert!(matches!(
            f.service.withdraw(f.event_id, "ghost@x.com").await,
            Err(EventError::RsvpNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn concurrent_admissions_for_last_slot_admit_exactly_one() {
        let f = fixture(1).await;
        let service = Arc::new(f.service);

        let mut handles = Vec::new();
        for i in 0..10 {
            let service = service.clone();
            let event_id = f.event_id;
            handles.push(tokio::spawn(async move {
                service
                    .admit(event_id, rsvp(&format!("attendee{i}@x.com"), "Attendee"))
                    .await
            }));
        }

        let mut admitted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => admitted += 1,
                Err(EventError::CapacityExceeded { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(admitted, 1);
    }

    #[tokio::test]
    async fn concurrent_withdrawals_acknowledge_exactly_once() {
        let f = fixture(10).await;
        f.service
            .admit(f.event_id, rsvp("alice@x.com", "Alice"))
            .await
            .unwrap();
        let service = Arc::new(f.service);

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = service.clone();
            let event_id = f.event_id;
            handles.push(tokio::spawn(async move {
                service.withdraw(event_id, "alice@x.com").await
            }));
        }

        let mut acknowledged = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => acknowledged += 1,
                Err(EventError::RsvpNotFound { .. }) => {}
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }
        assert_eq!(acknowledged, 1);
    }

    #[tokio::test]
    async fn freed_slot_can_be_reused_after_withdrawal() {
        let f = fixture(1).await;
        f.service
            .admit(f.event_id, rsvp("alice@x.com", "Alice"))
            .await
            .unwrap();
        f.service.withdraw(f.event_id, "alice@x.com").await.unwrap();
        f.service
            .admit(f.event_id, rsvp("bob@x.com", "Bob"))
            .await
            .unwrap();
    }
}
