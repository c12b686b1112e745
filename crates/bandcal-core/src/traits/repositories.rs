//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is one round trip to the store.

use async_trait::async_trait;

use crate::entities::{Availability, Event, Member, NewEvent};
use crate::error::DomainError;
use crate::value_objects::{AvailabilityStatus, EventId, EventRange, MemberId, RehearsalStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List every member, ordered by name ascending
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List events inside the (inclusive) range, ordered by date ascending
    async fn list(&self, range: EventRange) -> RepoResult<Vec<Event>>;

    /// Find event by ID
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// Set the rehearsal status of a rehearsal
    ///
    /// Events that are not rehearsals are left untouched. Returns the number
    /// of rows changed, which is zero for a missing or non-rehearsal event.
    async fn update_rehearsal_status(&self, id: EventId, status: RehearsalStatus)
        -> RepoResult<u64>;

    /// Insert a batch of events atomically, returning the number inserted
    async fn create_many(&self, events: &[NewEvent]) -> RepoResult<u64>;
}

// ============================================================================
// Availability Repository
// ============================================================================

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// All availability rows for one member
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Availability>>;

    /// All availability rows for one event
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Vec<Availability>>;

    /// All availability rows whose event is in `event_ids`, in a single query
    async fn find_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<Availability>>;

    /// Update the status of an existing row and bump its `updated_at`
    ///
    /// Never inserts. Returns the number of rows changed.
    async fn update_status(
        &self,
        member_id: MemberId,
        event_id: EventId,
        status: AvailabilityStatus,
    ) -> RepoResult<u64>;
}
