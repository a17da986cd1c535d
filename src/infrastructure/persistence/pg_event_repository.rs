//! PostgreSQL implementation of the booking event audit feed.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::booking_event::BookingEvent;
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

/// PostgreSQL sink for booking events written by the notify worker.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn append(&self, event: &BookingEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO booking_events (booking_id, kind, detail)
            VALUES ($1, $2, $3::jsonb)
            "#,
        )
        .bind(event.booking_id)
        .bind(event.kind.as_str())
        .bind(event.detail().to_string())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
