//! Event entity - a rehearsal or gig on a given date

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;
use crate::value_objects::{EventId, EventType, RehearsalStatus};

/// Scheduled event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
    pub event_type: EventType,
    /// Only ever set on rehearsals
    pub rehearsal_status: Option<RehearsalStatus>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Create a new Event with no rehearsal status or notes
    pub fn new(id: EventId, date: NaiveDate, event_type: EventType) -> Self {
        Self {
            id,
            date,
            event_type,
            rehearsal_status: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_rehearsal(&self) -> bool {
        self.event_type.is_rehearsal()
    }

    /// Check if this is a rehearsal that has been called off
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.is_rehearsal() && self.rehearsal_status == Some(RehearsalStatus::Cancelled)
    }
}

/// An event that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub date: NaiveDate,
    pub event_type: EventType,
    pub rehearsal_status: Option<RehearsalStatus>,
    pub notes: Option<String>,
}

impl NewEvent {
    pub fn new(date: NaiveDate, event_type: EventType) -> Self {
        Self {
            date,
            event_type,
            rehearsal_status: None,
            notes: None,
        }
    }

    /// New rehearsal, starting out unconfirmed
    pub fn rehearsal(date: NaiveDate) -> Self {
        Self {
            rehearsal_status: Some(RehearsalStatus::Unconfirmed),
            ..Self::new(date, EventType::Rehearsal)
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the rehearsal status
    ///
    /// # Errors
    /// Returns `DomainError::ValidationError` if the event is not a rehearsal.
    pub fn with_rehearsal_status(mut self, status: RehearsalStatus) -> Result<Self, DomainError> {
        self.rehearsal_status = Some(status);
        self.validate()?;
        Ok(self)
    }

    /// Check that a rehearsal status only accompanies a rehearsal
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.rehearsal_status.is_some() && !self.event_type.is_rehearsal() {
            return Err(DomainError::ValidationError(format!(
                "rehearsal status is not allowed on a {} event",
                self.event_type
            )));
        }
        Ok(())
    }
}
