//! Availability entity - one member's answer for one event

use chrono::{DateTime, Utc};

use crate::value_objects::{AvailabilityId, AvailabilityStatus, EventId, MemberId};

/// Availability row, unique per (member_id, event_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub id: AvailabilityId,
    pub member_id: MemberId,
    pub event_id: EventId,
    pub status: AvailabilityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Availability {
    pub fn new(
        id: AvailabilityId,
        member_id: MemberId,
        event_id: EventId,
        status: AvailabilityStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            member_id,
            event_id,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}
