//! Test fixtures and data generators
//!
//! Seeds rows directly through SQL and mirrors the JSON shapes the API
//! returns. Every test works in its own calendar year so date-range queries
//! never see another test's events.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use bandcal_db::PgPool;
use chrono::NaiveDate;
use serde::Deserialize;

static YEAR_BASE: OnceLock<i32> = OnceLock::new();
static YEAR_COUNTER: AtomicI32 = AtomicI32::new(0);

/// A calendar year no other test in any run is likely to use
///
/// Stays below 10000 so dates keep the plain `YYYY-MM-DD` form.
pub fn unique_year() -> i32 {
    let base = *YEAR_BASE.get_or_init(|| {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or_default();
        3000 + i32::try_from(nanos % 6_000).unwrap_or_default()
    });
    base + YEAR_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Date inside a test year
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub async fn seed_member(pool: &PgPool, name: &str) -> Result<i64> {
    let id = sqlx::query_scalar("INSERT INTO members (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(id)
}

pub async fn seed_event(
    pool: &PgPool,
    date: NaiveDate,
    event_type: &str,
    rehearsal_status: Option<&str>,
) -> Result<i64> {
    let id = sqlx::query_scalar(
        "INSERT INTO events (date, event_type, rehearsal_status) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(date)
    .bind(event_type)
    .bind(rehearsal_status)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn seed_availability(
    pool: &PgPool,
    member_id: i64,
    event_id: i64,
    status: &str,
) -> Result<()> {
    sqlx::query("INSERT INTO availability (member_id, event_id, status) VALUES ($1, $2, $3)")
        .bind(member_id)
        .bind(event_id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn event_rehearsal_status(pool: &PgPool, event_id: i64) -> Result<Option<String>> {
    let status = sqlx::query_scalar("SELECT rehearsal_status FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_one(pool)
        .await?;
    Ok(status)
}

/// Member as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBody {
    pub id: i64,
    pub name: String,
}

/// Event as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub id: i64,
    pub date: NaiveDate,
    pub event_type: String,
    pub rehearsal_status: Option<String>,
    pub notes: Option<String>,
}

/// Availability row as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBody {
    pub member_id: i64,
    pub event_id: i64,
    pub status: String,
}

/// Consolidated view as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedBody {
    pub event: EventBody,
    pub available: Vec<MemberBody>,
    pub unavailable: Vec<MemberBody>,
    pub unknown: Vec<MemberBody>,
    pub all_available: bool,
    pub any_unavailable: bool,
    pub all_responded: bool,
    pub member_count: usize,
    pub response_count: usize,
}

impl ConsolidatedBody {
    /// Ids of the members in a bucket
    pub fn ids(bucket: &[MemberBody]) -> Vec<i64> {
        bucket.iter().map(|m| m.id).collect()
    }
}

/// Write result as returned by the API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationBody {
    pub rows_affected: u64,
}

/// Error envelope as returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
