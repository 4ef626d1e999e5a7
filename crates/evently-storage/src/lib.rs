// Postgres storage layer with sqlx
//
// This crate provides the database implementation for core traits:
// - Database: implements evently_core::EventStore for event/RSVP persistence
// plus user persistence with argon2 password hashing.

mod event_store;
pub mod models;
pub mod password;
pub mod repositories;

pub use models::*;
pub use repositories::Database;
