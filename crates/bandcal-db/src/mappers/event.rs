//! Event entity <-> model mapper

use bandcal_core::entities::{Event, NewEvent};
use bandcal_core::error::DomainError;
use bandcal_core::value_objects::{EventId, RehearsalStatus};
use chrono::NaiveDate;

use crate::models::EventModel;

/// Convert EventModel to Event entity
///
/// A rehearsal status stored on a gig row is dropped; it has no meaning there.
impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let rehearsal_status = if model.is_rehearsal() {
            model.rehearsal_status.as_deref().map(str::parse).transpose()?
        } else {
            None
        };

        Ok(Event {
            id: EventId::new(model.id),
            date: model.date,
            event_type: model.event_type.parse()?,
            rehearsal_status,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Column values for inserting a NewEvent
pub struct EventInsert<'a> {
    pub date: NaiveDate,
    pub event_type: &'static str,
    pub rehearsal_status: Option<&'static str>,
    pub notes: Option<&'a str>,
}

impl<'a> EventInsert<'a> {
    pub fn new(event: &'a NewEvent) -> Self {
        Self {
            date: event.date,
            event_type: event.event_type.as_str(),
            rehearsal_status: event.rehearsal_status.map(RehearsalStatus::as_str),
            notes: event.notes.as_deref(),
        }
    }
}
