//! PostgreSQL implementation of the booking repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Booking, CANCELLED_STATUS, NewBooking, StatusHistoryEntry};
use crate::domain::repositories::BookingRepository;
use crate::error::AppError;

/// Row shape shared by all booking queries: the booking columns plus the
/// joined status name.
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    customer_id: i64,
    professional_id: i64,
    service_id: i64,
    booked_date: NaiveDate,
    start_time: NaiveTime,
    duration_minutes: i32,
    status_id: i64,
    status_name: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            customer_id: row.customer_id,
            professional_id: row.professional_id,
            service_id: row.service_id,
            booked_date: row.booked_date,
            start_time: row.start_time,
            duration_minutes: row.duration_minutes,
            status_id: row.status_id,
            status_name: row.status_name,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

const SELECT_BOOKING: &str = r#"
    SELECT b.id, b.customer_id, b.professional_id, b.service_id,
           b.booked_date, b.start_time, b.duration_minutes,
           b.status_id, s.name AS status_name, b.notes, b.created_at
    FROM bookings b
    JOIN booking_statuses s ON s.id = b.status_id
"#;

/// PostgreSQL repository for bookings.
///
/// The non-overlap invariant is enforced here, not only in the service
/// layer: `create` re-runs the conflict check and the insert inside one
/// SERIALIZABLE transaction, so two concurrent requests for the same slot
/// cannot both commit. The loser surfaces as a Conflict (either from the
/// recheck or from SQLSTATE 40001 via `map_sqlx_error`).
pub struct PgBookingRepository {
    pool: Arc<PgPool>,
}

impl PgBookingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, new_booking: NewBooking) -> Result<Booking, AppError> {
        let requested_end = u32::try_from(new_booking.duration_minutes)
            .ok()
            .and_then(|d| crate::utils::time_grid::add_minutes(new_booking.start_time, d))
            .ok_or_else(|| {
                AppError::bad_request(
                    "Duration must be positive and the booking must end before midnight",
                    json!({ "duration_minutes": new_booking.duration_minutes }),
                )
            })?;

        let mut tx = self.pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        // Authoritative overlap recheck, half-open on both sides.
        let conflicts: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM bookings b
            JOIN booking_statuses s ON s.id = b.status_id
            WHERE b.professional_id = $1
              AND b.booked_date = $2
              AND s.name <> $3
              AND b.start_time < $4
              AND $5 < b.start_time + (b.duration_minutes * interval '1 minute')
            "#,
        )
        .bind(new_booking.professional_id)
        .bind(new_booking.booked_date)
        .bind(CANCELLED_STATUS)
        .bind(requested_end)
        .bind(new_booking.start_time)
        .fetch_one(&mut *tx)
        .await?;

        if conflicts > 0 {
            return Err(AppError::conflict(
                "Requested slot is not available",
                json!({
                    "professional_id": new_booking.professional_id,
                    "date": new_booking.booked_date.to_string(),
                }),
            ));
        }

        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            WITH inserted AS (
                INSERT INTO bookings
                    (customer_id, professional_id, service_id, booked_date,
                     start_time, duration_minutes, status_id, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
            )
            SELECT i.id, i.customer_id, i.professional_id, i.service_id,
                   i.booked_date, i.start_time, i.duration_minutes,
                   i.status_id, s.name AS status_name, i.notes, i.created_at
            FROM inserted i
            JOIN booking_statuses s ON s.id = i.status_id
            "#,
        )
        .bind(new_booking.customer_id)
        .bind(new_booking.professional_id)
        .bind(new_booking.service_id)
        .bind(new_booking.booked_date)
        .bind(new_booking.start_time)
        .bind(new_booking.duration_minutes)
        .bind(new_booking.status_id)
        .bind(new_booking.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn list_for_professional_on(
        &self,
        professional_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKING} WHERE b.professional_id = $1 AND b.booked_date = $2 ORDER BY b.start_time"
        ))
        .bind(professional_id)
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list(
        &self,
        professional_id: Option<i64>,
        date: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            r#"{SELECT_BOOKING}
            WHERE ($1::bigint IS NULL OR b.professional_id = $1)
              AND ($2::date IS NULL OR b.booked_date = $2)
            ORDER BY b.created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(professional_id)
        .bind(date)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(
        &self,
        professional_id: Option<i64>,
        date: Option<NaiveDate>,
    ) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings b
            WHERE ($1::bigint IS NULL OR b.professional_id = $1)
              AND ($2::date IS NULL OR b.booked_date = $2)
            "#,
        )
        .bind(professional_id)
        .bind(date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn transition_status(
        &self,
        booking_id: i64,
        new_status_id: i64,
        changed_by: Option<i64>,
    ) -> Result<(Booking, StatusHistoryEntry), AppError> {
        let mut tx = self.pool.begin().await?;

        // Lock the booking row and capture the status name it holds now.
        let old_status: Option<String> = sqlx::query_scalar(
            r#"
            SELECT s.name FROM bookings b
            JOIN booking_statuses s ON s.id = b.status_id
            WHERE b.id = $1
            FOR UPDATE OF b
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(old_status) = old_status else {
            return Err(AppError::not_found(
                "Booking not found",
                json!({ "booking_id": booking_id }),
            ));
        };

        let new_status: Option<String> =
            sqlx::query_scalar("SELECT name FROM booking_statuses WHERE id = $1")
                .bind(new_status_id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(new_status) = new_status else {
            return Err(AppError::not_found(
                "Booking status not found",
                json!({ "status_id": new_status_id }),
            ));
        };

        sqlx::query("UPDATE bookings SET status_id = $1 WHERE id = $2")
            .bind(new_status_id)
            .bind(booking_id)
            .execute(&mut *tx)
            .await?;

        let (entry_id, changed_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO booking_status_history (booking_id, old_status, new_status, changed_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, changed_at
            "#,
        )
        .bind(booking_id)
        .bind(&old_status)
        .bind(&new_status)
        .bind(changed_by)
        .fetch_one(&mut *tx)
        .await?;

        let row =
            sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE b.id = $1"))
                .bind(booking_id)
                .fetch_one(&mut *tx)
                .await?;

        tx.commit().await?;

        let entry = StatusHistoryEntry {
            id: entry_id,
            booking_id,
            old_status,
            new_status,
            changed_by,
            changed_at,
        };

        Ok((row.into(), entry))
    }
}
