//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod availability;
pub mod consolidated;
pub mod events;
pub mod health;
pub mod members;
