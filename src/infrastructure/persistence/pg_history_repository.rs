//! PostgreSQL implementation of the status history repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::StatusHistoryEntry;
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: i64,
    booking_id: i64,
    old_status: String,
    new_status: String,
    changed_by: Option<i64>,
    changed_at: DateTime<Utc>,
}

impl From<HistoryRow> for StatusHistoryEntry {
    fn from(row: HistoryRow) -> Self {
        StatusHistoryEntry {
            id: row.id,
            booking_id: row.booking_id,
            old_status: row.old_status,
            new_status: row.new_status,
            changed_by: row.changed_by,
            changed_at: row.changed_at,
        }
    }
}

/// PostgreSQL repository for reading the append-only history trail.
pub struct PgHistoryRepository {
    pool: Arc<PgPool>,
}

impl PgHistoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn list(
        &self,
        booking_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StatusHistoryEntry>, AppError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT id, booking_id, old_status, new_status, changed_by, changed_at
            FROM booking_status_history
            WHERE ($1::bigint IS NULL OR booking_id = $1)
            ORDER BY changed_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(booking_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, booking_id: Option<i64>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM booking_status_history
            WHERE ($1::bigint IS NULL OR booking_id = $1)
            "#,
        )
        .bind(booking_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
