//! PostgreSQL implementation of AvailabilityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bandcal_core::entities::Availability;
use bandcal_core::traits::{AvailabilityRepository, RepoResult};
use bandcal_core::value_objects::{AvailabilityStatus, EventId, MemberId};

use crate::models::AvailabilityModel;

use super::error::{map_db_error, map_rows};

/// PostgreSQL implementation of AvailabilityRepository
#[derive(Clone)]
pub struct PgAvailabilityRepository {
    pool: PgPool,
}

impl PgAvailabilityRepository {
    /// Create a new PgAvailabilityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: MemberId) -> RepoResult<Vec<Availability>> {
        let models = sqlx::query_as::<_, AvailabilityModel>(
            r#"
            SELECT id, member_id, event_id, status, created_at, updated_at
            FROM availability
            WHERE member_id = $1
            ORDER BY event_id ASC
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(models)
    }

    #[instrument(skip(self))]
    async fn find_by_event(&self, event_id: EventId) -> RepoResult<Vec<Availability>> {
        let models = sqlx::query_as::<_, AvailabilityModel>(
            r#"
            SELECT id, member_id, event_id, status, created_at, updated_at
            FROM availability
            WHERE event_id = $1
            ORDER BY member_id ASC
            "#,
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(models)
    }

    #[instrument(skip(self, event_ids), fields(count = event_ids.len()))]
    async fn find_by_events(&self, event_ids: &[EventId]) -> RepoResult<Vec<Availability>> {
        if event_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = event_ids.iter().copied().map(EventId::into_inner).collect();

        let models = sqlx::query_as::<_, AvailabilityModel>(
            r#"
            SELECT id, member_id, event_id, status, created_at, updated_at
            FROM availability
            WHERE event_id = ANY($1)
            ORDER BY event_id ASC, member_id ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(models)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        member_id: MemberId,
        event_id: EventId,
        status: AvailabilityStatus,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE availability
            SET status = $3, updated_at = NOW()
            WHERE member_id = $1 AND event_id = $2
            "#,
        )
        .bind(member_id.into_inner())
        .bind(event_id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
