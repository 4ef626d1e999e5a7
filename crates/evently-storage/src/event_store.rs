// EventStore implementation backed by Postgres
//
// Admission invariants are enforced here, not only in the service layer:
// `create_rsvp` locks the event row before re-checking capacity, and the
// unique index on (event_id, user_email) backs the duplicate check.

use std::collections::HashMap;

use async_trait::async_trait;
use evently_contracts::{CreateEventRequest, CreateRsvpRequest, EventDetails, Rsvp};
use evently_core::{EventError, EventFilter, EventStore, Result};
use uuid::Uuid;

use crate::models::{EventRow, RsvpRow};
use crate::repositories::Database;

const EVENT_COLUMNS: &str = r#"
    e.id, e.title, e.description, e.date, e.location,
    e.max_attendees, e.created_by, e.created_at,
    u.name AS creator_name, u.email AS creator_email
"#;

fn db_err(err: sqlx::Error) -> EventError {
    EventError::Internal(err.into())
}

impl Database {
    /// Load RSVPs for a set of events, grouped by event id.
    async fn rsvps_for(&self, event_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Rsvp>>> {
        let rows = sqlx::query_as::<_, RsvpRow>(
            r#"
            SELECT id, event_id, user_email, user_name, created_at
            FROM rsvps
            WHERE event_id = ANY($1)
            ORDER BY created_at ASC
            "#,
        )
        .bind(event_ids)
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        let mut grouped: HashMap<Uuid, Vec<Rsvp>> = HashMap::new();
        for row in rows {
            grouped.entry(row.event_id).or_default().push(row.into());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl EventStore for Database {
    async fn list_events(
        &self,
        filter: EventFilter,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<EventDetails>, i64)> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events e
            JOIN users u ON u.id = e.created_by
            WHERE ($1::uuid IS NULL OR e.created_by = $1)
            ORDER BY e.date ASC, e.id ASC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(filter.created_by)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM events e
            WHERE ($1::uuid IS NULL OR e.created_by = $1)
            "#,
        )
        .bind(filter.created_by)
        .fetch_one(self.pool())
        .await
        .map_err(db_err)?;

        let event_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut rsvps = self.rsvps_for(&event_ids).await?;

        let events = rows
            .into_iter()
            .map(|row| {
                let event_rsvps = rsvps.remove(&row.id).unwrap_or_default();
                row.into_details(event_rsvps)
            })
            .collect();

        Ok((events, total))
    }

    async fn get_event(&self, id: Uuid) -> Result<Option<EventDetails>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events e
            JOIN users u ON u.id = e.created_by
            WHERE e.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await
        .map_err(db_err)?;

        match row {
            Some(row) => {
                let rsvps = self
                    .rsvps_for(&[row.id])
                    .await?
                    .remove(&row.id)
                    .unwrap_or_default();
                Ok(Some(row.into_details(rsvps)))
            }
            None => Ok(None),
        }
    }

    async fn create_event(
        &self,
        input: CreateEventRequest,
        creator_id: Uuid,
    ) -> Result<EventDetails> {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO events (id, title, description, date, location, max_attendees, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.date)
        .bind(&input.location)
        .bind(input.max_attendees)
        .bind(creator_id)
        .fetch_one(self.pool())
        .await
        .map_err(db_err)?;

        self.get_event(id)
            .await?
            .ok_or_else(|| EventError::Internal(anyhow::anyhow!("created event {id} not readable")))
    }

    async fn count_rsvps(&self, event_id: Uuid) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rsvps WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(self.pool())
            .await
            .map_err(db_err)
    }

    async fn get_rsvp(&self, event_id: Uuid, email: &str) -> Result<Option<Rsvp>> {
        let row = sqlx::query_as::<_, RsvpRow>(
            r#"
            SELECT id, event_id, user_email, user_name, created_at
            FROM rsvps
            WHERE event_id = $1 AND user_email = $2
            "#,
        )
        .bind(event_id)
        .bind(email)
        .fetch_optional(self.pool())
        .await
        .map_err(db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create_rsvp(&self, event_id: Uuid, input: CreateRsvpRequest) -> Result<Rsvp> {
        let mut tx = self.pool().begin().await.map_err(db_err)?;

        // Lock the event row so concurrent admissions for the last slot
        // serialize on the capacity check
        let max_attendees: Option<i32> =
            sqlx::query_scalar("SELECT max_attendees FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_err)?;
        let max_attendees = max_attendees.ok_or(EventError::EventNotFound(event_id))?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rsvps WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_err)?;
        if count >= i64::from(max_attendees) {
            return Err(EventError::CapacityExceeded {
                event_id,
                max_attendees,
            });
        }

        let row = sqlx::query_as::<_, RsvpRow>(
            r#"
            INSERT INTO rsvps (id, event_id, user_email, user_name, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, event_id, user_email, user_name, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(event_id)
        .bind(&input.user_email)
        .bind(&input.user_name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                EventError::DuplicateRegistration {
                    event_id,
                    email: input.user_email.clone(),
                }
            }
            _ => db_err(err),
        })?;

        tx.commit().await.map_err(db_err)?;
        Ok(row.into())
    }

    async fn delete_rsvp(&self, event_id: Uuid, email: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM rsvps WHERE event_id = $1 AND user_email = $2")
            .bind(event_id)
            .bind(email)
            .execute(self.pool())
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
