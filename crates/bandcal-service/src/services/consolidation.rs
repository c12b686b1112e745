//! Consolidation service
//!
//! Fetches the snapshots needed to consolidate availability and hands them
//! to the pure routines in `bandcal_core::consolidation`.
//!
//! The `try_*` methods report repository failures as errors. `consolidate`
//! and `consolidate_bulk` log the failure and return `None` or an empty map,
//! so callers that only care about the view never see an error.

use std::collections::HashMap;

use bandcal_core::consolidation::{classify, classify_many};
use bandcal_core::entities::{ConsolidatedAvailability, Event};
use bandcal_core::value_objects::EventId;
use tracing::{debug, error, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Consolidation service
pub struct ConsolidationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConsolidationService<'a> {
    /// Create a new ConsolidationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Consolidate one event
    ///
    /// Issues three queries: the event, the members, the event's rows.
    /// `Ok(None)` means the event does not exist.
    #[instrument(skip(self))]
    pub async fn try_consolidate(
        &self,
        event_id: EventId,
    ) -> ServiceResult<Option<ConsolidatedAvailability>> {
        let Some(event) = self.ctx.event_repo().find_by_id(event_id).await? else {
            debug!(event_id = %event_id, "Event not found");
            return Ok(None);
        };

        let members = self.ctx.member_repo().list().await?;
        let rows = self.ctx.availability_repo().find_by_event(event_id).await?;

        Ok(Some(classify(event, &members, &rows)))
    }

    /// Consolidate one event, `None` when it is missing or a query failed
    pub async fn consolidate(&self, event_id: EventId) -> Option<ConsolidatedAvailability> {
        match self.try_consolidate(event_id).await {
            Ok(view) => view,
            Err(e) => {
                error!(error = %e, event_id = %event_id, "Failed to consolidate availability");
                None
            }
        }
    }

    /// Consolidate many events with two queries in total
    ///
    /// One query for the members and one for the rows of every event. An empty
    /// input returns an empty map without touching the repositories.
    #[instrument(skip(self, events), fields(count = events.len()))]
    pub async fn try_consolidate_bulk(
        &self,
        events: Vec<Event>,
    ) -> ServiceResult<HashMap<EventId, ConsolidatedAvailability>> {
        if events.is_empty() {
            return Ok(HashMap::new());
        }

        let event_ids: Vec<EventId> = events.iter().map(|event| event.id).collect();

        let members = self.ctx.member_repo().list().await?;
        let rows = self.ctx.availability_repo().find_by_events(&event_ids).await?;

        debug!(members = members.len(), rows = rows.len(), "Fetched consolidation snapshot");

        Ok(classify_many(events, &members, rows))
    }

    /// Consolidate many events, an empty map if a query failed
    ///
    /// Never returns a partial result.
    pub async fn consolidate_bulk(
        &self,
        events: Vec<Event>,
    ) -> HashMap<EventId, ConsolidatedAvailability> {
        let count = events.len();
        match self.try_consolidate_bulk(events).await {
            Ok(views) => views,
            Err(e) => {
                error!(error = %e, count, "Failed to consolidate availability in bulk");
                HashMap::new()
            }
        }
    }
}
