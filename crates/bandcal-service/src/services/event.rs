//! Event service
//!
//! Event listing, bulk creation, status updates and consolidated views for
//! the HTTP layer. Repository failures surface as errors here.

use bandcal_core::entities::NewEvent;
use bandcal_core::value_objects::{EventId, MemberId};
use tracing::{info, instrument};

use crate::dto::{
    AvailabilityResponse, ConsolidatedAvailabilityResponse, CreateEventsRequest, EventRangeQuery,
    EventResponse, MutationResponse, UpdateAvailabilityRequest, UpdateRehearsalStatusRequest,
};

use super::consolidation::ConsolidationService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List events in a date range, ordered by date
    #[instrument(skip(self))]
    pub async fn list_events(&self, query: EventRangeQuery) -> ServiceResult<Vec<EventResponse>> {
        let range = query.into_range()?;
        let events = self.ctx.event_repo().list(range).await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Create a batch of events in one transaction
    #[instrument(skip(self, request), fields(count = request.events.len()))]
    pub async fn create_events(
        &self,
        request: CreateEventsRequest,
    ) -> ServiceResult<MutationResponse> {
        let events = request.into_new_events();
        events.iter().try_for_each(NewEvent::validate)?;

        let created = self.ctx.event_repo().create_many(&events).await?;

        info!(created, "Events created");

        Ok(MutationResponse::new(created))
    }

    /// Set the status of a rehearsal
    ///
    /// Gigs and unknown ids are not an error; nothing changes and the
    /// response reports zero rows.
    #[instrument(skip(self))]
    pub async fn set_rehearsal_status(
        &self,
        event_id: EventId,
        request: UpdateRehearsalStatusRequest,
    ) -> ServiceResult<MutationResponse> {
        let rows = self
            .ctx
            .event_repo()
            .update_rehearsal_status(event_id, request.status)
            .await?;

        info!(event_id = %event_id, status = %request.status, rows, "Rehearsal status updated");

        Ok(MutationResponse::new(rows))
    }

    /// Availability rows of an event
    #[instrument(skip(self))]
    pub async fn get_event_availability(
        &self,
        event_id: EventId,
    ) -> ServiceResult<Vec<AvailabilityResponse>> {
        if self.ctx.event_repo().find_by_id(event_id).await?.is_none() {
            return Err(ServiceError::not_found("Event", event_id));
        }

        let rows = self.ctx.availability_repo().find_by_event(event_id).await?;
        Ok(rows.into_iter().map(AvailabilityResponse::from).collect())
    }

    /// Update a member's existing availability row for an event
    ///
    /// Never creates a row; a missing row is reported as zero rows affected.
    #[instrument(skip(self))]
    pub async fn set_availability(
        &self,
        event_id: EventId,
        member_id: MemberId,
        request: UpdateAvailabilityRequest,
    ) -> ServiceResult<MutationResponse> {
        let rows = self
            .ctx
            .availability_repo()
            .update_status(member_id, event_id, request.status)
            .await?;

        info!(
            event_id = %event_id,
            member_id = %member_id,
            status = %request.status,
            rows,
            "Availability updated"
        );

        Ok(MutationResponse::new(rows))
    }

    /// Consolidated availability of one event
    #[instrument(skip(self))]
    pub async fn get_consolidated(
        &self,
        event_id: EventId,
    ) -> ServiceResult<ConsolidatedAvailabilityResponse> {
        ConsolidationService::new(self.ctx)
            .try_consolidate(event_id)
            .await?
            .map(ConsolidatedAvailabilityResponse::from)
            .ok_or_else(|| ServiceError::not_found("Event", event_id))
    }

    /// Consolidated availability of every event in a range, in date order
    #[instrument(skip(self))]
    pub async fn list_consolidated(
        &self,
        query: EventRangeQuery,
    ) -> ServiceResult<Vec<ConsolidatedAvailabilityResponse>> {
        let range = query.into_range()?;
        let events = self.ctx.event_repo().list(range).await?;
        let order: Vec<EventId> = events.iter().map(|event| event.id).collect();

        let mut views = ConsolidationService::new(self.ctx)
            .try_consolidate_bulk(events)
            .await?;

        Ok(order
            .iter()
            .filter_map(|id| views.remove(id))
            .map(ConsolidatedAvailabilityResponse::from)
            .collect())
    }
}
