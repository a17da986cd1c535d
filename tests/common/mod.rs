#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use slotbook::domain::booking_event::BookingEvent;
use slotbook::state::AppState;

pub async fn create_test_professional(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO professionals (user_id, display_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_inactive_professional(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO professionals (user_id, display_name, active) VALUES ($1, $2, FALSE) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_customer(pool: &PgPool, user_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO customers (user_id, display_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_id)
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_service(pool: &PgPool, name: &str, duration_minutes: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO services (name, duration_minutes) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(duration_minutes)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Adds a weekly availability window. Weekday is 0 = Sunday .. 6 = Saturday.
pub async fn create_test_window(
    pool: &PgPool,
    professional_id: i64,
    weekday: i16,
    start: &str,
    end: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO availability_windows (professional_id, weekday, start_time, end_time)
         VALUES ($1, $2, $3::time, $4::time) RETURNING id",
    )
    .bind(professional_id)
    .bind(weekday)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn status_id(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT id FROM booking_statuses WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Inserts a booking directly, bypassing the service-layer conflict check.
pub async fn create_test_booking(
    pool: &PgPool,
    customer_id: i64,
    professional_id: i64,
    service_id: i64,
    date: &str,
    start: &str,
    duration_minutes: i32,
    status: &str,
) -> i64 {
    let status_id = status_id(pool, status).await;

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO bookings
             (customer_id, professional_id, service_id, booked_date, start_time,
              duration_minutes, status_id)
         VALUES ($1, $2, $3, $4::date, $5::time, $6, $7)
         RETURNING id",
    )
    .bind(customer_id)
    .bind(professional_id)
    .bind(service_id)
    .bind(date)
    .bind(start)
    .bind(duration_minutes)
    .bind(status_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<BookingEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(pool, tx, 30);

    (state, rx)
}
