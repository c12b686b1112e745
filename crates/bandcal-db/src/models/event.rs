//! Event database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub date: NaiveDate,
    /// 'rehearsal', 'gig-confirmed', 'gig-unconfirmed' or 'gig-available'
    pub event_type: String,
    /// 'unconfirmed', 'confirmed' or 'cancelled'; rehearsals only
    pub rehearsal_status: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EventModel {
    /// Check if this row is a rehearsal
    #[inline]
    pub fn is_rehearsal(&self) -> bool {
        self.event_type == "rehearsal"
    }
}
