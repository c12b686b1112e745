//! Route definitions
//!
//! Health probes at the root, everything else mounted under /api/v1.

use axum::{
    routing::{get, put},
    Router,
};

use crate::handlers::{availability, consolidated, events, health, members};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(event_routes())
        .merge(consolidated_routes())
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:member_id", get(members::get_member))
        .route(
            "/members/:member_id/availability",
            get(members::get_member_availability),
        )
}

/// Event and availability routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_events))
        .route(
            "/events/:event_id/rehearsal-status",
            put(events::update_rehearsal_status),
        )
        .route(
            "/events/:event_id/availability",
            get(availability::get_event_availability),
        )
        .route(
            "/events/:event_id/availability/:member_id",
            put(availability::update_availability),
        )
}

/// Consolidated availability routes
fn consolidated_routes() -> Router<AppState> {
    Router::new()
        .route("/events/:event_id/consolidated", get(consolidated::get_consolidated))
        .route("/consolidated", get(consolidated::list_consolidated))
}
