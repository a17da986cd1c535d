//! PostgreSQL implementation of the status catalog repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{BookingStatus, NewBookingStatus};
use crate::domain::repositories::StatusRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct StatusRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<StatusRow> for BookingStatus {
    fn from(row: StatusRow) -> Self {
        BookingStatus {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// PostgreSQL repository for the booking status catalog.
///
/// Deleting a status that bookings still reference trips the foreign key
/// RESTRICT; `map_sqlx_error` turns that into a Conflict.
pub struct PgStatusRepository {
    pool: Arc<PgPool>,
}

impl PgStatusRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for PgStatusRepository {
    async fn list(&self) -> Result<Vec<BookingStatus>, AppError> {
        let rows = sqlx::query_as::<_, StatusRow>(
            "SELECT id, name, description FROM booking_statuses ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookingStatus>, AppError> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT id, name, description FROM booking_statuses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<BookingStatus>, AppError> {
        let row = sqlx::query_as::<_, StatusRow>(
            "SELECT id, name, description FROM booking_statuses WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, new_status: NewBookingStatus) -> Result<BookingStatus, AppError> {
        let row = sqlx::query_as::<_, StatusRow>(
            r#"
            INSERT INTO booking_statuses (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(new_status.name)
        .bind(new_status.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM booking_statuses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
