//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.

use bandcal_core::entities::NewEvent;
use bandcal_core::value_objects::{AvailabilityStatus, EventRange, EventType, RehearsalStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Event Requests
// ============================================================================

/// Optional inclusive date bounds, `?start=YYYY-MM-DD&end=YYYY-MM-DD`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventRangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl EventRangeQuery {
    /// Convert to a range, rejecting a start after the end
    pub fn into_range(self) -> ServiceResult<EventRange> {
        let range = EventRange::new(self.start, self.end);
        if range.is_inverted() {
            return Err(ServiceError::validation("start must not be after end"));
        }
        Ok(range)
    }
}

/// One event in a bulk create request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_rehearsal_status"))]
pub struct NewEventRequest {
    pub date: NaiveDate,

    pub event_type: EventType,

    /// Rehearsals only; a rehearsal without one starts out unconfirmed
    pub rehearsal_status: Option<RehearsalStatus>,

    #[validate(length(max = 1000, message = "Notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

fn validate_rehearsal_status(request: &NewEventRequest) -> Result<(), ValidationError> {
    if request.rehearsal_status.is_some() && !request.event_type.is_rehearsal() {
        return Err(ValidationError::new("rehearsal_status")
            .with_message("rehearsalStatus is only allowed on rehearsals".into()));
    }
    Ok(())
}

impl From<NewEventRequest> for NewEvent {
    fn from(request: NewEventRequest) -> Self {
        let mut event = match request.event_type {
            EventType::Rehearsal => NewEvent::rehearsal(request.date),
            other => NewEvent::new(request.date, other),
        };
        if request.rehearsal_status.is_some() {
            event.rehearsal_status = request.rehearsal_status;
        }
        event.notes = request.notes;
        event
    }
}

/// Bulk create events request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventsRequest {
    #[validate(
        length(min = 1, max = 500, message = "Must contain between 1 and 500 events"),
        nested
    )]
    pub events: Vec<NewEventRequest>,
}

impl CreateEventsRequest {
    pub fn into_new_events(self) -> Vec<NewEvent> {
        self.events.into_iter().map(NewEvent::from).collect()
    }
}

/// Set rehearsal status request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRehearsalStatusRequest {
    pub status: RehearsalStatus,
}

// ============================================================================
// Availability Requests
// ============================================================================

/// Set availability status request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub status: AvailabilityStatus,
}
