//! Availability handlers
//!
//! Endpoints for reading and updating per-event availability rows.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use bandcal_service::{
    AvailabilityResponse, EventService, MutationResponse, UpdateAvailabilityRequest,
};

use crate::extractors::{EventIdPath, EventMemberPath};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get all availability rows of an event
///
/// GET /events/{event_id}/availability
pub async fn get_event_availability(
    State(state): State<AppState>,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<Vec<AvailabilityResponse>>> {
    let rows = EventService::new(state.service_context())
        .get_event_availability(path.event_id()?)
        .await?;
    Ok(Json(rows))
}

/// Update a member's availability for an event
///
/// PUT /events/{event_id}/availability/{member_id}
pub async fn update_availability(
    State(state): State<AppState>,
    Path(path): Path<EventMemberPath>,
    body: Result<Json<UpdateAvailabilityRequest>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let event_id = path.event_id()?;
    let member_id = path.member_id()?;
    let Json(request) = body.map_err(|e| ApiError::invalid_body(e.body_text()))?;

    let updated = EventService::new(state.service_context())
        .set_availability(event_id, member_id, request)
        .await?;
    Ok(Json(updated))
}
