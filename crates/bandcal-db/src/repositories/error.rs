//! Error handling utilities for repositories

use bandcal_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Convert a batch of rows into entities, failing on the first bad row
pub fn map_rows<M, E>(models: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(E::try_from).collect()
}
