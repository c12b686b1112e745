//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, typed path ids and date ranges.

mod path;
mod query;
mod validated;

pub use path::{EventIdPath, EventMemberPath, MemberIdPath};
pub use query::DateRange;
pub use validated::ValidatedJson;
