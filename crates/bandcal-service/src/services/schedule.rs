//! Schedule service
//!
//! Read and write access to members, events and availability that never
//! returns an error. Every failure is logged with the operation's keys and
//! replaced by a safe default: an empty list, `None`, or `false`.

use bandcal_core::entities::{Availability, Event, Member, NewEvent};
use bandcal_core::value_objects::{
    AvailabilityStatus, EventId, EventRange, MemberId, RehearsalStatus,
};
use tracing::{error, info, instrument};

use super::context::ServiceContext;

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All members ordered by name, empty on failure
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> Vec<Member> {
        match self.ctx.member_repo().list().await {
            Ok(members) => members,
            Err(e) => {
                error!(error = %e, "Failed to list members");
                Vec::new()
            }
        }
    }

    /// One member, `None` when missing or on failure
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: MemberId) -> Option<Member> {
        match self.ctx.member_repo().find_by_id(member_id).await {
            Ok(member) => member,
            Err(e) => {
                error!(error = %e, member_id = %member_id, "Failed to get member");
                None
            }
        }
    }

    /// Events in the inclusive range ordered by date, empty on failure
    #[instrument(skip(self))]
    pub async fn list_events(&self, range: EventRange) -> Vec<Event> {
        match self.ctx.event_repo().list(range).await {
            Ok(events) => events,
            Err(e) => {
                error!(error = %e, start = ?range.start, end = ?range.end, "Failed to list events");
                Vec::new()
            }
        }
    }

    /// Availability rows of one member, empty on failure
    #[instrument(skip(self))]
    pub async fn availability_for_member(&self, member_id: MemberId) -> Vec<Availability> {
        match self.ctx.availability_repo().find_by_member(member_id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, member_id = %member_id, "Failed to get availability for member");
                Vec::new()
            }
        }
    }

    /// Availability rows of one event, empty on failure
    #[instrument(skip(self))]
    pub async fn availability_for_event(&self, event_id: EventId) -> Vec<Availability> {
        match self.ctx.availability_repo().find_by_event(event_id).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, event_id = %event_id, "Failed to get availability for event");
                Vec::new()
            }
        }
    }

    /// Availability rows of a set of events in one query, empty on failure
    #[instrument(skip(self, event_ids), fields(count = event_ids.len()))]
    pub async fn availability_for_events(&self, event_ids: &[EventId]) -> Vec<Availability> {
        match self.ctx.availability_repo().find_by_events(event_ids).await {
            Ok(rows) => rows,
            Err(e) => {
                error!(error = %e, event_ids = ?event_ids, "Failed to get availability for events");
                Vec::new()
            }
        }
    }

    /// Update an existing availability row
    ///
    /// Returns `true` when the update ran, including when it matched no row.
    /// Rows are never created here.
    #[instrument(skip(self))]
    pub async fn set_availability_status(
        &self,
        member_id: MemberId,
        event_id: EventId,
        status: AvailabilityStatus,
    ) -> bool {
        match self
            .ctx
            .availability_repo()
            .update_status(member_id, event_id, status)
            .await
        {
            Ok(rows) => {
                info!(member_id = %member_id, event_id = %event_id, %status, rows, "Availability updated");
                true
            }
            Err(e) => {
                error!(
                    error = %e,
                    member_id = %member_id,
                    event_id = %event_id,
                    %status,
                    "Failed to set availability status"
                );
                false
            }
        }
    }

    /// Update the status of a rehearsal
    ///
    /// Returns `true` when the update ran. A gig or a missing event is left
    /// untouched and still counts as success.
    #[instrument(skip(self))]
    pub async fn set_rehearsal_status(&self, event_id: EventId, status: RehearsalStatus) -> bool {
        match self
            .ctx
            .event_repo()
            .update_rehearsal_status(event_id, status)
            .await
        {
            Ok(rows) => {
                info!(event_id = %event_id, %status, rows, "Rehearsal status updated");
                true
            }
            Err(e) => {
                error!(error = %e, event_id = %event_id, %status, "Failed to set rehearsal status");
                false
            }
        }
    }

    /// Insert a batch of events, all or nothing
    #[instrument(skip(self, events), fields(count = events.len()))]
    pub async fn create_events(&self, events: &[NewEvent]) -> bool {
        match self.ctx.event_repo().create_many(events).await {
            Ok(created) => {
                info!(created, "Events created");
                true
            }
            Err(e) => {
                error!(error = %e, count = events.len(), "Failed to create events");
                false
            }
        }
    }
}
