//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output, with camelCase
//! field names. Ids are plain JSON numbers.

use bandcal_core::value_objects::{
    AvailabilityId, AvailabilityStatus, EventId, EventType, MemberId, RehearsalStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Outcome of a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub rows_affected: u64,
}

impl MutationResponse {
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

// ============================================================================
// Schedule Responses
// ============================================================================

/// Band member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: MemberId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Rehearsal or gig
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: EventId,
    pub date: NaiveDate,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rehearsal_status: Option<RehearsalStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One member's stated availability for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub id: AvailabilityId,
    pub member_id: MemberId,
    pub event_id: EventId,
    pub status: AvailabilityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Every member of the band grouped by their answer for one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedAvailabilityResponse {
    pub event: EventResponse,
    pub available: Vec<MemberResponse>,
    pub unavailable: Vec<MemberResponse>,
    pub unknown: Vec<MemberResponse>,
    pub all_available: bool,
    pub any_unavailable: bool,
    pub all_responded: bool,
    pub member_count: usize,
    pub response_count: usize,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
