mod common;

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use std::sync::Arc;

use slotbook::domain::entities::NewBooking;
use slotbook::domain::repositories::BookingRepository;
use slotbook::error::AppError;
use slotbook::infrastructure::persistence::PgBookingRepository;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

async fn seed(pool: &PgPool) -> (i64, i64, i64, i64) {
    let professional_id = common::create_test_professional(pool, 100, "Dana").await;
    let customer_id = common::create_test_customer(pool, 200, "Alex").await;
    let service_id = common::create_test_service(pool, "Consultation", 60).await;
    let pending_id = common::status_id(pool, "pending").await;
    (professional_id, customer_id, service_id, pending_id)
}

#[sqlx::test]
async fn test_create_booking(pool: PgPool) {
    let (professional_id, customer_id, service_id, pending_id) = seed(&pool).await;
    let repo = PgBookingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBooking {
            customer_id,
            professional_id,
            service_id,
            booked_date: date("2025-06-30"),
            start_time: time("10:00"),
            duration_minutes: 60,
            status_id: pending_id,
            notes: Some("first visit".to_string()),
        })
        .await;

    let booking = result.unwrap();
    assert_eq!(booking.professional_id, professional_id);
    assert_eq!(booking.start_time, time("10:00"));
    assert_eq!(booking.status_name, "pending");
    assert_eq!(booking.notes.as_deref(), Some("first visit"));
}

#[sqlx::test]
async fn test_create_rejects_overlapping_booking(pool: PgPool) {
    let (professional_id, customer_id, service_id, pending_id) = seed(&pool).await;

    common::create_test_booking(
        &pool,
        customer_id,
        professional_id,
        service_id,
        "2025-06-30",
        "10:00",
        60,
        "confirmed",
    )
    .await;

    let repo = PgBookingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBooking {
            customer_id,
            professional_id,
            service_id,
            booked_date: date("2025-06-30"),
            start_time: time("10:30"),
            duration_minutes: 60,
            status_id: pending_id,
            notes: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_create_allows_overlap_with_cancelled(pool: PgPool) {
    let (professional_id, customer_id, service_id, pending_id) = seed(&pool).await;

    common::create_test_booking(
        &pool,
        customer_id,
        professional_id,
        service_id,
        "2025-06-30",
        "10:00",
        60,
        "cancelled",
    )
    .await;

    let repo = PgBookingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBooking {
            customer_id,
            professional_id,
            service_id,
            booked_date: date("2025-06-30"),
            start_time: time("10:00"),
            duration_minutes: 60,
            status_id: pending_id,
            notes: None,
        })
        .await;

    assert!(result.is_ok());
}

#[sqlx::test]
async fn test_create_allows_same_time_for_other_professional(pool: PgPool) {
    let (professional_id, customer_id, service_id, pending_id) = seed(&pool).await;
    let other_professional = common::create_test_professional(&pool, 101, "Kim").await;

    common::create_test_booking(
        &pool,
        customer_id,
        professional_id,
        service_id,
        "2025-06-30",
        "10:00",
        60,
        "confirmed",
    )
    .await;

    let repo = PgBookingRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBooking {
            customer_id,
            professional_id: other_professional,
            service_id,
            booked_date: date("2025-06-30"),
            start_time: time("10:00"),
            duration_minutes: 60,
            status_id: pending_id,
            notes: None,
        })
        .await;

    assert!(result.is_ok());
}

#[sqlx::test]
async fn test_list_for_professional_on_orders_by_start(pool: PgPool) {
    let (professional_id, customer_id, service_id, _pending_id) = seed(&pool).await;

    for start in ["14:00", "09:00", "11:00"] {
        common::create_test_booking(
            &pool,
            customer_id,
            professional_id,
            service_id,
            "2025-06-30",
            start,
            60,
            "confirmed",
        )
        .await;
    }

    let repo = PgBookingRepository::new(Arc::new(pool));

    let bookings = repo
        .list_for_professional_on(professional_id, date("2025-06-30"))
        .await
        .unwrap();

    let starts: Vec<NaiveTime> = bookings.iter().map(|b| b.start_time).collect();
    assert_eq!(starts, vec![time("09:00"), time("11:00"), time("14:00")]);
}

#[sqlx::test]
async fn test_transition_status_appends_history(pool: PgPool) {
    let (professional_id, customer_id, service_id, _pending_id) = seed(&pool).await;
    let confirmed_id = common::status_id(&pool, "confirmed").await;

    let booking_id = common::create_test_booking(
        &pool,
        customer_id,
        professional_id,
        service_id,
        "2025-06-30",
        "10:00",
        60,
        "pending",
    )
    .await;

    let repo = PgBookingRepository::new(Arc::new(pool.clone()));

    let (booking, entry) = repo
        .transition_status(booking_id, confirmed_id, Some(7))
        .await
        .unwrap();

    assert_eq!(booking.status_name, "confirmed");
    assert_eq!(entry.booking_id, booking_id);
    assert_eq!(entry.old_status, "pending");
    assert_eq!(entry.new_status, "confirmed");
    assert_eq!(entry.changed_by, Some(7));

    let rows: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM booking_status_history WHERE booking_id = $1")
            .bind(booking_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test]
async fn test_transition_status_unknown_booking(pool: PgPool) {
    let confirmed_id = common::status_id(&pool, "confirmed").await;
    let repo = PgBookingRepository::new(Arc::new(pool));

    let result = repo.transition_status(9999, confirmed_id, None).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_count_with_filters(pool: PgPool) {
    let (professional_id, customer_id, service_id, _pending_id) = seed(&pool).await;

    for (start, d) in [("09:00", "2025-06-30"), ("10:00", "2025-06-30"), ("09:00", "2025-07-01")] {
        common::create_test_booking(
            &pool,
            customer_id,
            professional_id,
            service_id,
            d,
            start,
            60,
            "pending",
        )
        .await;
    }

    let repo = PgBookingRepository::new(Arc::new(pool));

    assert_eq!(repo.count(None, None).await.unwrap(), 3);
    assert_eq!(
        repo.count(Some(professional_id), Some(date("2025-06-30")))
            .await
            .unwrap(),
        2
    );
    assert_eq!(repo.count(Some(9999), None).await.unwrap(), 0);
}
