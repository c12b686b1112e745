//! Database models - SQLx-compatible structs for PostgreSQL tables

mod availability;
mod event;
mod member;

pub use availability::AvailabilityModel;
pub use event::EventModel;
pub use member::MemberModel;
