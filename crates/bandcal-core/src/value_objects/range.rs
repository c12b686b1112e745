//! Inclusive date range filter for event listings

use chrono::NaiveDate;

/// Optional inclusive bounds on an event's date
///
/// Either bound may be absent; an absent bound does not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl EventRange {
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// No bounds at all
    #[must_use]
    pub const fn all() -> Self {
        Self::new(None, None)
    }

    #[must_use]
    pub const fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    #[must_use]
    pub const fn from(start: NaiveDate) -> Self {
        Self::new(Some(start), None)
    }

    #[must_use]
    pub const fn until(end: NaiveDate) -> Self {
        Self::new(None, Some(end))
    }

    /// Check whether a date passes both bounds
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// True when the start bound lies after the end bound, so nothing can match
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }
}
