//! Business logic services
//!
//! - [`ScheduleService`]: repository access that never fails, logging and
//!   substituting a safe default instead
//! - [`ConsolidationService`]: per-event availability views, single and bulk
//! - [`MemberService`], [`EventService`]: HTTP-facing use cases returning DTOs

pub mod consolidation;
pub mod context;
pub mod error;
pub mod event;
pub mod member;
pub mod schedule;

pub use consolidation::ConsolidationService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use member::MemberService;
pub use schedule::ScheduleService;
