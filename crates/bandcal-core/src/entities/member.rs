//! Member entity - a person in the band

use chrono::{DateTime, Utc};

use crate::value_objects::MemberId;

/// Band member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub instrument: Option<String>,
    /// Contact address, if the member shared one
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with only the required fields set
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            instrument: None,
            email: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
