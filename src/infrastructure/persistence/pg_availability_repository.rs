//! PostgreSQL implementation of the availability window repository.

use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AvailabilityWindow, NewAvailabilityWindow};
use crate::domain::repositories::AvailabilityRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct WindowRow {
    id: i64,
    professional_id: i64,
    weekday: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl From<WindowRow> for AvailabilityWindow {
    fn from(row: WindowRow) -> Self {
        AvailabilityWindow {
            id: row.id,
            professional_id: row.professional_id,
            weekday: row.weekday,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

/// PostgreSQL repository for weekly availability windows.
pub struct PgAvailabilityRepository {
    pool: Arc<PgPool>,
}

impl PgAvailabilityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    async fn list_for_professional(
        &self,
        professional_id: i64,
    ) -> Result<Vec<AvailabilityWindow>, AppError> {
        let rows = sqlx::query_as::<_, WindowRow>(
            r#"
            SELECT id, professional_id, weekday, start_time, end_time
            FROM availability_windows
            WHERE professional_id = $1
            ORDER BY weekday, start_time
            "#,
        )
        .bind(professional_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_for_weekday(
        &self,
        professional_id: i64,
        weekday: i16,
    ) -> Result<Vec<AvailabilityWindow>, AppError> {
        let rows = sqlx::query_as::<_, WindowRow>(
            r#"
            SELECT id, professional_id, weekday, start_time, end_time
            FROM availability_windows
            WHERE professional_id = $1 AND weekday = $2
            ORDER BY start_time
            "#,
        )
        .bind(professional_id)
        .bind(weekday)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(
        &self,
        new_window: NewAvailabilityWindow,
    ) -> Result<AvailabilityWindow, AppError> {
        let row = sqlx::query_as::<_, WindowRow>(
            r#"
            INSERT INTO availability_windows (professional_id, weekday, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, professional_id, weekday, start_time, end_time
            "#,
        )
        .bind(new_window.professional_id)
        .bind(new_window.weekday)
        .bind(new_window.start_time)
        .bind(new_window.end_time)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM availability_windows WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
