//! Consolidated availability handlers
//!
//! Per-event views of who can make it, singly or for a date range.

use axum::{
    extract::{Path, State},
    Json,
};
use bandcal_service::{ConsolidatedAvailabilityResponse, EventService};

use crate::extractors::{DateRange, EventIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Consolidated availability of one event
///
/// GET /events/{event_id}/consolidated
pub async fn get_consolidated(
    State(state): State<AppState>,
    Path(path): Path<EventIdPath>,
) -> ApiResult<Json<ConsolidatedAvailabilityResponse>> {
    let view = EventService::new(state.service_context())
        .get_consolidated(path.event_id()?)
        .await?;
    Ok(Json(view))
}

/// Consolidated availability of every event in a date range, in date order
///
/// GET /consolidated?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn list_consolidated(
    State(state): State<AppState>,
    DateRange(query): DateRange,
) -> ApiResult<Json<Vec<ConsolidatedAvailabilityResponse>>> {
    let views = EventService::new(state.service_context())
        .list_consolidated(query)
        .await?;
    Ok(Json(views))
}
