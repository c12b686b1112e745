//! # bandcal-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! availability consolidation routine.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod consolidation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use consolidation::{classify, classify_many, group_by_event, StatusLookup};
pub use entities::{Availability, ConsolidatedAvailability, Event, Member, NewEvent};
pub use error::DomainError;
pub use traits::{AvailabilityRepository, EventRepository, MemberRepository, RepoResult};
pub use value_objects::{
    AvailabilityId, AvailabilityStatus, EventId, EventRange, EventType, IdParseError, MemberId,
    RehearsalStatus,
};
