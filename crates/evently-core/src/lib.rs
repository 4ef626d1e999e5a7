// Event & RSVP domain core
//
// DB-agnostic business logic for the event-management system:
// - EventService: paginated listing (date asc), retrieval, creation
// - RsvpService: admission (capacity + uniqueness gating) and withdrawal
// - EventStore trait for pluggable persistence backends
// - Explicit boundary validation returning structured field errors
//
// Key design decisions:
// - All state lives in the store; services hold no mutable state and are
//   plain structs over an Arc<dyn EventStore>
// - Service-level capacity/uniqueness checks are a fast path only; the
//   store is the authoritative guard so concurrent admissions for the
//   last slot resolve to exactly one success
// - Error handling distinguishes caller-correctable conditions from
//   internal failures

pub mod error;
pub mod memory;
pub mod pagination;
pub mod services;
pub mod traits;
pub mod validation;

pub use error::{EventError, Result};
pub use memory::InMemoryEventStore;
pub use pagination::PageParams;
pub use services::{EventService, RsvpService};
pub use traits::{EventFilter, EventStore};
pub use validation::FieldError;
