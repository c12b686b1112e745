//! # bandcal-service
//!
//! Application layer: the schedule access contract, the availability
//! consolidation engine, and the DTOs served over HTTP.
//!
//! Services borrow a [`ServiceContext`], which owns the repositories:
//!
//! ```rust,ignore
//! use bandcal_service::{ConsolidationService, ServiceContext};
//!
//! let ctx = ServiceContext::from_pool(pool);
//! let view = ConsolidationService::new(&ctx).consolidate(event_id).await;
//! ```

pub mod dto;
pub mod services;

pub use dto::{
    AvailabilityResponse, ConsolidatedAvailabilityResponse, CreateEventsRequest,
    EventRangeQuery, EventResponse, HealthChecks, HealthResponse, MemberResponse,
    MutationResponse, NewEventRequest, ReadinessResponse, UpdateAvailabilityRequest,
    UpdateRehearsalStatusRequest,
};
pub use services::{
    ConsolidationService, EventService, MemberService, ScheduleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
