//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use bandcal_core::entities::{Event, NewEvent};
use bandcal_core::traits::{EventRepository, RepoResult};
use bandcal_core::value_objects::{EventId, EventRange, RehearsalStatus};

use crate::mappers::EventInsert;
use crate::models::EventModel;

use super::error::{map_db_error, map_rows};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn list(&self, range: EventRange) -> RepoResult<Vec<Event>> {
        let models = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, date, event_type, rehearsal_status, notes, created_at, updated_at
            FROM events
            WHERE ($1::date IS NULL OR date >= $1)
              AND ($2::date IS NULL OR date <= $2)
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        map_rows(models)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, date, event_type, rehearsal_status, notes, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn update_rehearsal_status(
        &self,
        id: EventId,
        status: RehearsalStatus,
    ) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET rehearsal_status = $2, updated_at = NOW()
            WHERE id = $1 AND event_type = 'rehearsal'
            "#,
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self, events), fields(count = events.len()))]
    async fn create_many(&self, events: &[NewEvent]) -> RepoResult<u64> {
        if events.is_empty() {
            return Ok(0);
        }

        for event in events {
            event.validate()?;
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut inserted = 0;

        for event in events {
            let insert = EventInsert::new(event);
            let result = sqlx::query(
                r#"
                INSERT INTO events (date, event_type, rehearsal_status, notes, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                "#,
            )
            .bind(insert.date)
            .bind(insert.event_type)
            .bind(insert.rehearsal_status)
            .bind(insert.notes)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted)
    }
}
