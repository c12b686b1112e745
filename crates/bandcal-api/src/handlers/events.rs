//! Event handlers
//!
//! Endpoints for listing, creating and updating events.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use bandcal_service::{
    CreateEventsRequest, EventResponse, EventService, MutationResponse,
    UpdateRehearsalStatusRequest,
};

use crate::extractors::{DateRange, EventIdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List events in a date range
///
/// GET /events?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn list_events(
    State(state): State<AppState>,
    DateRange(query): DateRange,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let events = EventService::new(state.service_context())
        .list_events(query)
        .await?;
    Ok(Json(events))
}

/// Create a batch of events
///
/// POST /events
pub async fn create_events(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEventsRequest>,
) -> ApiResult<Created<Json<MutationResponse>>> {
    let created = EventService::new(state.service_context())
        .create_events(request)
        .await?;
    Ok(Created(Json(created)))
}

/// Set the status of a rehearsal
///
/// PUT /events/{event_id}/rehearsal-status
pub async fn update_rehearsal_status(
    State(state): State<AppState>,
    Path(path): Path<EventIdPath>,
    body: Result<Json<UpdateRehearsalStatusRequest>, JsonRejection>,
) -> ApiResult<Json<MutationResponse>> {
    let event_id = path.event_id()?;
    let Json(request) = body.map_err(|e| ApiError::invalid_body(e.body_text()))?;

    let updated = EventService::new(state.service_context())
        .set_rehearsal_status(event_id, request)
        .await?;
    Ok(Json(updated))
}
