// Seeds the database with a demo user, events, and RSVPs.
// Run with: cargo run --bin seed

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use evently_contracts::{CreateEventRequest, CreateRsvpRequest, ListQuery};
use evently_core::{EventService, EventStore, RsvpService};
use evently_storage::{CreateUser, Database};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,evently_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    let user = db
        .create_user(CreateUser {
            email: "admin@eventsystem.com".into(),
            name: "Admin User".into(),
            password: "admin123".into(),
        })
        .await
        .context("Failed to create admin user")?;
    tracing::info!(email = %user.email, "Admin user ready");

    let store: Arc<dyn EventStore> = Arc::new(db);
    let events = EventService::new(store.clone());
    let rsvps = RsvpService::new(store);

    // Idempotence: skip event and RSVP seeding on re-runs
    let existing = events.list_by_creator(user.id, &ListQuery::default()).await?;
    if existing.pagination.total > 0 {
        tracing::info!(
            total = existing.pagination.total,
            "Events already seeded, skipping"
        );
        return Ok(());
    }

    let seed_events = [
        (
            "Tech Conference 2024",
            "Join us for the biggest tech conference of the year featuring keynote speakers, workshops, and networking opportunities.",
            "2024-06-15T09:00:00Z",
            "San Francisco Convention Center",
            500,
        ),
        (
            "Startup Meetup",
            "Monthly meetup for startup founders and entrepreneurs to share ideas and network.",
            "2024-05-20T18:00:00Z",
            "Downtown Innovation Hub",
            100,
        ),
        (
            "Design Workshop",
            "Hands-on workshop on modern design principles and tools for web and mobile applications.",
            "2024-07-10T10:00:00Z",
            "Creative Studio Space",
            50,
        ),
    ];

    let mut created = Vec::new();
    for (title, description, date, location, max_attendees) in seed_events {
        let date: DateTime<Utc> = date.parse().context("Invalid seed date")?;
        let details = events
            .create(
                CreateEventRequest {
                    title: title.into(),
                    description: description.into(),
                    date,
                    location: location.into(),
                    max_attendees,
                },
                user.id,
            )
            .await
            .with_context(|| format!("Failed to create event '{title}'"))?;
        tracing::info!(title = %details.event.title, id = %details.event.id, "Event created");
        created.push(details);
    }

    let seed_rsvps = [
        (0usize, "john.doe@example.com", "John Doe"),
        (0, "jane.smith@example.com", "Jane Smith"),
        (1, "bob.wilson@example.com", "Bob Wilson"),
    ];

    for (event_index, email, name) in seed_rsvps {
        let event_id = created[event_index].event.id;
        rsvps
            .admit(
                event_id,
                CreateRsvpRequest {
                    user_email: email.into(),
                    user_name: name.into(),
                },
            )
            .await
            .with_context(|| format!("Failed to RSVP {email}"))?;
        tracing::info!(%event_id, email, "RSVP created");
    }

    tracing::info!("Database seeding completed");
    Ok(())
}
