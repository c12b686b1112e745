//! Availability database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for availability table, unique on (member_id, event_id)
#[derive(Debug, Clone, FromRow)]
pub struct AvailabilityModel {
    pub id: i64,
    pub member_id: i64,
    pub event_id: i64,
    /// 'unknown', 'available' or 'unavailable'
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
