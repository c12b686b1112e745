//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in bandcal-core.
//! Each repository handles database operations for a specific domain entity.

mod availability;
mod error;
mod event;
mod member;

pub use availability::PgAvailabilityRepository;
pub use event::PgEventRepository;
pub use member::PgMemberRepository;
