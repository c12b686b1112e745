//! Value objects - immutable types that represent domain concepts

mod ids;
mod range;
mod status;

pub use ids::{AvailabilityId, EventId, IdParseError, MemberId};
pub use range::EventRange;
pub use status::{AvailabilityStatus, EventType, RehearsalStatus};
