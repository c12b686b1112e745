//! Date range query extractor
//!
//! Parses `?start=YYYY-MM-DD&end=YYYY-MM-DD`, both optional.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use bandcal_service::EventRangeQuery;

use crate::response::ApiError;

/// Optional inclusive date bounds from the query string
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange(pub EventRangeQuery);

#[async_trait]
impl<S> FromRequestParts<S> for DateRange
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<EventRangeQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(DateRange(query))
    }
}
