//! Availability entity <-> model mapper

use bandcal_core::entities::Availability;
use bandcal_core::error::DomainError;
use bandcal_core::value_objects::{AvailabilityId, EventId, MemberId};

use crate::models::AvailabilityModel;

/// Convert AvailabilityModel to Availability entity
impl TryFrom<AvailabilityModel> for Availability {
    type Error = DomainError;

    fn try_from(model: AvailabilityModel) -> Result<Self, Self::Error> {
        Ok(Availability {
            id: AvailabilityId::new(model.id),
            member_id: MemberId::new(model.member_id),
            event_id: EventId::new(model.event_id),
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
