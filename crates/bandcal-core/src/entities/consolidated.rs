//! Consolidated availability - derived per-event view, never persisted

use crate::entities::{Event, Member};
use crate::value_objects::{AvailabilityStatus, MemberId};

/// Every member of the band sorted into exactly one bucket for one event
///
/// The summary flags are computed from the buckets on demand, so they can
/// never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsolidatedAvailability {
    pub event: Event,
    pub available: Vec<Member>,
    pub unavailable: Vec<Member>,
    pub unknown: Vec<Member>,
}

impl ConsolidatedAvailability {
    /// Everyone answered and everyone can make it (needs at least one member)
    #[must_use]
    pub fn all_available(&self) -> bool {
        self.unavailable.is_empty() && self.unknown.is_empty() && !self.available.is_empty()
    }

    #[must_use]
    pub fn any_unavailable(&self) -> bool {
        !self.unavailable.is_empty()
    }

    #[must_use]
    pub fn all_responded(&self) -> bool {
        self.unknown.is_empty()
    }

    /// Total members across the three buckets
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.available.len() + self.unavailable.len() + self.unknown.len()
    }

    /// Members that gave an answer either way
    #[must_use]
    pub fn response_count(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    /// Bucket a member was placed in, if they are part of this view
    #[must_use]
    pub fn status_of(&self, member_id: MemberId) -> Option<AvailabilityStatus> {
        let contains = |bucket: &[Member]| bucket.iter().any(|m| m.id == member_id);

        if contains(&self.available) {
            Some(AvailabilityStatus::Available)
        } else if contains(&self.unavailable) {
            Some(AvailabilityStatus::Unavailable)
        } else if contains(&self.unknown) {
            Some(AvailabilityStatus::Unknown)
        } else {
            None
        }
    }
}
