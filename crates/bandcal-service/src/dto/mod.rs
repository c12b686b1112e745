//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase JSON)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateEventsRequest, EventRangeQuery, NewEventRequest, UpdateAvailabilityRequest,
    UpdateRehearsalStatusRequest,
};

pub use responses::{
    AvailabilityResponse, ConsolidatedAvailabilityResponse, EventResponse,
    HealthChecks, HealthResponse, MemberResponse, MutationResponse, ReadinessResponse,
};
