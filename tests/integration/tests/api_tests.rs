//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_get_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = seed_member(&server.pool, "Rosa").await.unwrap();

    let response = server.get(&format!("/api/v1/members/{id}")).await.unwrap();
    let member: MemberBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(member.id, id);
    assert_eq!(member.name, "Rosa");

    let response = server.get("/api/v1/members").await.unwrap();
    let members: Vec<MemberBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(members.iter().any(|m| m.id == id));
}

#[tokio::test]
async fn test_get_missing_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/members/9223372036854775807").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_member_availability() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let member = seed_member(&server.pool, "Ines").await.unwrap();
    let first = seed_event(&server.pool, day(year, 3, 1), "rehearsal", Some("unconfirmed"))
        .await
        .unwrap();
    let second = seed_event(&server.pool, day(year, 3, 8), "gig-confirmed", None)
        .await
        .unwrap();
    seed_availability(&server.pool, member, first, "available").await.unwrap();
    seed_availability(&server.pool, member, second, "unavailable").await.unwrap();

    let response = server
        .get(&format!("/api/v1/members/{member}/availability"))
        .await
        .unwrap();
    let rows: Vec<AvailabilityBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.member_id == member));
    assert!(rows.iter().any(|r| r.event_id == second && r.status == "unavailable"));
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_events() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();

    let request = json!({
        "events": [
            { "date": day(year, 6, 20), "eventType": "gig-unconfirmed", "notes": "Harbour festival" },
            { "date": day(year, 6, 12), "eventType": "rehearsal" }
        ]
    });
    let response = server.post("/api/v1/events", &request).await.unwrap();
    let created: MutationBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.rows_affected, 2);

    let response = server
        .get(&format!("/api/v1/events?start={}&end={}", day(year, 1, 1), day(year, 12, 31)))
        .await
        .unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].date, day(year, 6, 12));
    assert_eq!(events[0].event_type, "rehearsal");
    assert_eq!(events[0].rehearsal_status.as_deref(), Some("unconfirmed"));
    assert_eq!(events[1].notes.as_deref(), Some("Harbour festival"));
    assert!(events[1].rehearsal_status.is_none());
}

#[tokio::test]
async fn test_create_events_is_all_or_nothing() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();

    let request = json!({
        "events": [
            { "date": day(year, 2, 1), "eventType": "rehearsal" },
            { "date": day(year, 2, 2), "eventType": "gig-confirmed", "rehearsalStatus": "confirmed" }
        ]
    });
    let response = server.post("/api/v1/events", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .get(&format!("/api/v1/events?start={}&end={}", day(year, 1, 1), day(year, 12, 31)))
        .await
        .unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_inverted_range_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/events?start=2026-12-01&end=2026-01-01")
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_rehearsal_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let rehearsal = seed_event(&server.pool, day(year, 4, 4), "rehearsal", Some("unconfirmed"))
        .await
        .unwrap();
    let gig = seed_event(&server.pool, day(year, 4, 5), "gig-available", None)
        .await
        .unwrap();

    let body = json!({ "status": "cancelled" });

    let response = server
        .put(&format!("/api/v1/events/{rehearsal}/rehearsal-status"), &body)
        .await
        .unwrap();
    let result: MutationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.rows_affected, 1);
    assert_eq!(
        event_rehearsal_status(&server.pool, rehearsal).await.unwrap().as_deref(),
        Some("cancelled")
    );

    // Gigs never carry a rehearsal status
    let response = server
        .put(&format!("/api/v1/events/{gig}/rehearsal-status"), &body)
        .await
        .unwrap();
    let result: MutationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.rows_affected, 0);
    assert!(event_rehearsal_status(&server.pool, gig).await.unwrap().is_none());
}

// ============================================================================
// Availability Tests
// ============================================================================

#[tokio::test]
async fn test_update_availability() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let member = seed_member(&server.pool, "Theo").await.unwrap();
    let event = seed_event(&server.pool, day(year, 5, 5), "gig-confirmed", None)
        .await
        .unwrap();
    seed_availability(&server.pool, member, event, "unknown").await.unwrap();

    let path = format!("/api/v1/events/{event}/availability/{member}");
    let response = server.put(&path, &json!({ "status": "available" })).await.unwrap();
    let result: MutationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.rows_affected, 1);

    let response = server
        .get(&format!("/api/v1/events/{event}/availability"))
        .await
        .unwrap();
    let rows: Vec<AvailabilityBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "available");
}

#[tokio::test]
async fn test_update_missing_availability_does_not_insert() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let member = seed_member(&server.pool, "Uma").await.unwrap();
    let event = seed_event(&server.pool, day(year, 5, 6), "gig-confirmed", None)
        .await
        .unwrap();

    let path = format!("/api/v1/events/{event}/availability/{member}");
    let response = server.put(&path, &json!({ "status": "unavailable" })).await.unwrap();
    let result: MutationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(result.rows_affected, 0);

    let response = server
        .get(&format!("/api/v1/events/{event}/availability"))
        .await
        .unwrap();
    let rows: Vec<AvailabilityBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.is_empty());
}

// ============================================================================
// Consolidation Tests
// ============================================================================

#[tokio::test]
async fn test_consolidated_single_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let a = seed_member(&server.pool, "Ada").await.unwrap();
    let b = seed_member(&server.pool, "Ben").await.unwrap();
    let c = seed_member(&server.pool, "Cy").await.unwrap();
    let event = seed_event(&server.pool, day(year, 7, 1), "gig-confirmed", None)
        .await
        .unwrap();
    seed_availability(&server.pool, a, event, "available").await.unwrap();
    seed_availability(&server.pool, b, event, "unavailable").await.unwrap();

    let response = server
        .get(&format!("/api/v1/events/{event}/consolidated"))
        .await
        .unwrap();
    let view: ConsolidatedBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Other tests add members concurrently, so only check our own
    assert_eq!(view.event.id, event);
    assert_eq!(ConsolidatedBody::ids(&view.available), [a]);
    assert_eq!(ConsolidatedBody::ids(&view.unavailable), [b]);
    assert!(ConsolidatedBody::ids(&view.unknown).contains(&c));
    assert!(!view.all_available);
    assert!(view.any_unavailable);
    assert!(!view.all_responded);
    assert_eq!(view.response_count, 2);
    assert_eq!(
        view.member_count,
        view.available.len() + view.unavailable.len() + view.unknown.len()
    );
}

#[tokio::test]
async fn test_consolidated_missing_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/events/9223372036854775807/consolidated")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_consolidated_range_matches_single() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let year = unique_year();
    let a = seed_member(&server.pool, "Dee").await.unwrap();
    let b = seed_member(&server.pool, "Eli").await.unwrap();

    let late = seed_event(&server.pool, day(year, 9, 30), "gig-available", None)
        .await
        .unwrap();
    let early = seed_event(&server.pool, day(year, 9, 1), "rehearsal", Some("confirmed"))
        .await
        .unwrap();
    let empty = seed_event(&server.pool, day(year, 9, 15), "gig-unconfirmed", None)
        .await
        .unwrap();
    seed_availability(&server.pool, a, early, "available").await.unwrap();
    seed_availability(&server.pool, b, early, "unavailable").await.unwrap();
    seed_availability(&server.pool, a, late, "available").await.unwrap();

    let response = server
        .get(&format!(
            "/api/v1/consolidated?start={}&end={}",
            day(year, 1, 1),
            day(year, 12, 31)
        ))
        .await
        .unwrap();
    let views: Vec<ConsolidatedBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<i64> = views.iter().map(|v| v.event.id).collect();
    assert_eq!(ids, [early, empty, late]);
    assert!(views[1].available.is_empty());
    assert!(views[1].unavailable.is_empty());
    assert!(ConsolidatedBody::ids(&views[1].unknown).contains(&a));

    for view in &views {
        let response = server
            .get(&format!("/api/v1/events/{}/consolidated", view.event.id))
            .await
            .unwrap();
        let single: ConsolidatedBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(
            ConsolidatedBody::ids(&single.available),
            ConsolidatedBody::ids(&view.available)
        );
        assert_eq!(
            ConsolidatedBody::ids(&single.unavailable),
            ConsolidatedBody::ids(&view.unavailable)
        );
        assert_eq!(single.any_unavailable, view.any_unavailable);
    }
}
