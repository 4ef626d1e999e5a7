// Services layer for business logic
// Services own validation and the admission rules, calling the store directly

pub mod event;
pub mod rsvp;

pub use event::EventService;
pub use rsvp::RsvpService;
