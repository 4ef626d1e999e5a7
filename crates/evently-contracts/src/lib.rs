// Public contracts for the Evently API
// This crate defines the DTOs exchanged between the domain services and
// any presentation layer (HTTP handlers, CLI tools, tests).

pub mod common;
pub mod event;
pub mod rsvp;
pub mod user;

pub use common::*;
pub use event::*;
pub use rsvp::*;
pub use user::*;
