//! Member handlers
//!
//! Endpoints for listing band members and their availability.

use axum::{
    extract::{Path, State},
    Json,
};
use bandcal_service::{AvailabilityResponse, MemberResponse, MemberService};

use crate::extractors::MemberIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List all members ordered by name
///
/// GET /members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<Vec<MemberResponse>>> {
    let members = MemberService::new(state.service_context())
        .list_members()
        .await?;
    Ok(Json(members))
}

/// Get member by ID
///
/// GET /members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(path): Path<MemberIdPath>,
) -> ApiResult<Json<MemberResponse>> {
    let member = MemberService::new(state.service_context())
        .get_member(path.member_id()?)
        .await?;
    Ok(Json(member))
}

/// Get a member's availability across all events
///
/// GET /members/{member_id}/availability
pub async fn get_member_availability(
    State(state): State<AppState>,
    Path(path): Path<MemberIdPath>,
) -> ApiResult<Json<Vec<AvailabilityResponse>>> {
    let rows = MemberService::new(state.service_context())
        .get_member_availability(path.member_id()?)
        .await?;
    Ok(Json(rows))
}
