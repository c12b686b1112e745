//! Closed enumerations stored as text columns
//!
//! Each enum round-trips through `as_str`/`FromStr` using exactly the values
//! stored in the database. Any other stored value is rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A member's stated availability for one event
///
/// A missing availability row means `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl AvailabilityStatus {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    /// Whether the member has actually answered
    #[inline]
    #[must_use]
    pub const fn is_response(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "available" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(DomainError::invalid_value("availability status", other)),
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Rehearsal,
    GigConfirmed,
    GigUnconfirmed,
    /// Gig slot the band could take if enough members are free
    GigAvailable,
}

impl EventType {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rehearsal => "rehearsal",
            Self::GigConfirmed => "gig-confirmed",
            Self::GigUnconfirmed => "gig-unconfirmed",
            Self::GigAvailable => "gig-available",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_rehearsal(self) -> bool {
        matches!(self, Self::Rehearsal)
    }

    #[inline]
    #[must_use]
    pub const fn is_gig(self) -> bool {
        !self.is_rehearsal()
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rehearsal" => Ok(Self::Rehearsal),
            "gig-confirmed" => Ok(Self::GigConfirmed),
            "gig-unconfirmed" => Ok(Self::GigUnconfirmed),
            "gig-available" => Ok(Self::GigAvailable),
            other => Err(DomainError::invalid_value("event type", other)),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary status, only meaningful for rehearsals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RehearsalStatus {
    Unconfirmed,
    Confirmed,
    Cancelled,
}

impl RehearsalStatus {
    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unconfirmed => "unconfirmed",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for RehearsalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unconfirmed" => Ok(Self::Unconfirmed),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::invalid_value("rehearsal status", other)),
        }
    }
}

impl fmt::Display for RehearsalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
