//! Path parameter extractors
//!
//! Path segments arrive as strings and are parsed into typed ids, so a
//! malformed id is a 400 with the usual error body.

use bandcal_core::value_objects::{EventId, MemberId};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with event_id
#[derive(Debug, Deserialize)]
pub struct EventIdPath {
    pub event_id: String,
}

impl EventIdPath {
    /// Parse event_id
    pub fn event_id(&self) -> Result<EventId, ApiError> {
        parse_event_id(&self.event_id)
    }
}

/// Path parameters with member_id
#[derive(Debug, Deserialize)]
pub struct MemberIdPath {
    pub member_id: String,
}

impl MemberIdPath {
    /// Parse member_id
    pub fn member_id(&self) -> Result<MemberId, ApiError> {
        parse_member_id(&self.member_id)
    }
}

/// Path parameters with event_id and member_id
#[derive(Debug, Deserialize)]
pub struct EventMemberPath {
    pub event_id: String,
    pub member_id: String,
}

impl EventMemberPath {
    /// Parse event_id
    pub fn event_id(&self) -> Result<EventId, ApiError> {
        parse_event_id(&self.event_id)
    }

    /// Parse member_id
    pub fn member_id(&self) -> Result<MemberId, ApiError> {
        parse_member_id(&self.member_id)
    }
}

fn parse_event_id(raw: &str) -> Result<EventId, ApiError> {
    EventId::parse(raw).map_err(|_| ApiError::invalid_path("Invalid event_id format"))
}

fn parse_member_id(raw: &str) -> Result<MemberId, ApiError> {
    MemberId::parse(raw).map_err(|_| ApiError::invalid_path("Invalid member_id format"))
}
