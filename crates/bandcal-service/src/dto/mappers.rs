//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use bandcal_core::entities::{Availability, ConsolidatedAvailability, Event, Member};

use super::responses::{
    AvailabilityResponse, ConsolidatedAvailabilityResponse, EventResponse, MemberResponse,
};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            instrument: member.instrument.clone(),
            email: member.email.clone(),
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            instrument: member.instrument,
            email: member.email,
            created_at: member.created_at,
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            date: event.date,
            event_type: event.event_type,
            rehearsal_status: event.rehearsal_status,
            notes: event.notes,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

// ============================================================================
// Availability Mappers
// ============================================================================

impl From<Availability> for AvailabilityResponse {
    fn from(row: Availability) -> Self {
        Self {
            id: row.id,
            member_id: row.member_id,
            event_id: row.event_id,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<ConsolidatedAvailability> for ConsolidatedAvailabilityResponse {
    fn from(view: ConsolidatedAvailability) -> Self {
        let all_available = view.all_available();
        let any_unavailable = view.any_unavailable();
        let all_responded = view.all_responded();
        let member_count = view.member_count();
        let response_count = view.response_count();

        let members = |bucket: Vec<Member>| -> Vec<MemberResponse> {
            bucket.into_iter().map(MemberResponse::from).collect()
        };

        Self {
            event: EventResponse::from(view.event),
            available: members(view.available),
            unavailable: members(view.unavailable),
            unknown: members(view.unknown),
            all_available,
            any_unavailable,
            all_responded,
            member_count,
            response_count,
        }
    }
}
