//! Availability consolidation
//!
//! Joins the member list with the availability rows of an event and sorts
//! every member into exactly one of the available, unavailable and unknown
//! buckets. Both the single-event and the bulk paths go through [`classify`].
//!
//! Everything here is pure: callers fetch the snapshots, this module only
//! works on what it is given.

use std::collections::HashMap;

use crate::entities::{Availability, ConsolidatedAvailability, Event, Member};
use crate::value_objects::{AvailabilityStatus, EventId, MemberId};

/// Member id -> stated status, for a single event
///
/// Total over all member ids: a member without a row is `Unknown`, exactly as
/// if an explicit `unknown` row existed.
#[derive(Debug, Clone, Default)]
pub struct StatusLookup {
    statuses: HashMap<MemberId, AvailabilityStatus>,
}

impl StatusLookup {
    /// Build the lookup from rows of one event
    ///
    /// (member_id, event_id) is unique in the store; if a duplicate slips
    /// through, the later row wins.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Availability>) -> Self {
        let statuses = rows
            .into_iter()
            .map(|row| (row.member_id, row.status))
            .collect();
        Self { statuses }
    }

    /// Stated status of a member, `Unknown` when there is no row
    #[must_use]
    pub fn status_of(&self, member_id: MemberId) -> AvailabilityStatus {
        self.statuses.get(&member_id).copied().unwrap_or_default()
    }

    /// Number of members with a row
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

/// Consolidate one event
///
/// Rows belonging to other events are ignored. Bucket order follows the order
/// of `members`.
pub fn classify(event: Event, members: &[Member], rows: &[Availability]) -> ConsolidatedAvailability {
    let lookup = StatusLookup::from_rows(rows.iter().filter(|row| row.event_id == event.id));

    let mut available = Vec::new();
    let mut unavailable = Vec::new();
    let mut unknown = Vec::new();

    for member in members {
        let bucket = match lookup.status_of(member.id) {
            AvailabilityStatus::Available => &mut available,
            AvailabilityStatus::Unavailable => &mut unavailable,
            AvailabilityStatus::Unknown => &mut unknown,
        };
        bucket.push(member.clone());
    }

    ConsolidatedAvailability {
        event,
        available,
        unavailable,
        unknown,
    }
}

/// Group availability rows by their event
pub fn group_by_event(rows: Vec<Availability>) -> HashMap<EventId, Vec<Availability>> {
    let mut grouped: HashMap<EventId, Vec<Availability>> = HashMap::new();
    for row in rows {
        grouped.entry(row.event_id).or_default().push(row);
    }
    grouped
}

/// Consolidate many events against one member list and one batch of rows
///
/// Produces an entry for every input event, including events without any
/// rows (everyone unknown).
pub fn classify_many(
    events: Vec<Event>,
    members: &[Member],
    rows: Vec<Availability>,
) -> HashMap<EventId, ConsolidatedAvailability> {
    let grouped = group_by_event(rows);

    events
        .into_iter()
        .map(|event| {
            let event_rows = grouped.get(&event.id).map_or(&[][..], Vec::as_slice);
            (event.id, classify(event, members, event_rows))
        })
        .collect()
}
