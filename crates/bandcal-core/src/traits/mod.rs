//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{AvailabilityRepository, EventRepository, MemberRepository, RepoResult};
