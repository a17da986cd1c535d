//! PostgreSQL implementation of read-only profile/catalog lookups.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Customer, Professional, ServiceOffering};
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ProfessionalRow {
    id: i64,
    user_id: i64,
    display_name: String,
    active: bool,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    user_id: i64,
    display_name: String,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct ServiceRow {
    id: i64,
    name: String,
    duration_minutes: i32,
    created_at: DateTime<Utc>,
}

/// PostgreSQL repository for profile and catalog lookups.
pub struct PgProfileRepository {
    pool: Arc<PgPool>,
}

impl PgProfileRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn find_professional(&self, id: i64) -> Result<Option<Professional>, AppError> {
        let row = sqlx::query_as::<_, ProfessionalRow>(
            "SELECT id, user_id, display_name, active, created_at FROM professionals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Professional {
            id: r.id,
            user_id: r.user_id,
            display_name: r.display_name,
            active: r.active,
            created_at: r.created_at,
        }))
    }

    async fn find_customer_by_user(&self, user_id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, user_id, display_name, created_at FROM customers WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Customer {
            id: r.id,
            user_id: r.user_id,
            display_name: r.display_name,
            created_at: r.created_at,
        }))
    }

    async fn find_service(&self, id: i64) -> Result<Option<ServiceOffering>, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, duration_minutes, created_at FROM services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| ServiceOffering {
            id: r.id,
            name: r.name,
            duration_minutes: r.duration_minutes,
            created_at: r.created_at,
        }))
    }
}
