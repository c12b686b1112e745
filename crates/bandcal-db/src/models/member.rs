//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub instrument: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}
