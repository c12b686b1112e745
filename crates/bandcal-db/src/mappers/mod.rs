//! Model to entity mappers
//!
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: convert database
//!   rows to domain objects. Text columns holding a closed enumeration go
//!   through `TryFrom` and reject unknown values.
//! - `*Insert` structs: prepare entity data for database writes

mod availability;
mod event;
mod member;

pub use event::EventInsert;
