//! Domain entities - core business objects

mod availability;
mod consolidated;
mod event;
mod member;

pub use availability::Availability;
pub use consolidated::ConsolidatedAvailability;
pub use event::{Event, NewEvent};
pub use member::Member;
