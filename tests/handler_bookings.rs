mod common;

use axum::{
    Router, middleware,
    routing::get,
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use slotbook::api::handlers::{booking_list_handler, create_booking_handler, get_booking_handler};
use slotbook::api::middleware::auth;

fn bookings_app(state: slotbook::state::AppState) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(booking_list_handler).post(create_booking_handler),
        )
        .route("/api/bookings/{id}", get(get_booking_handler))
        .route_layer(middleware::from_fn(auth::layer))
        .with_state(state)
}

async fn seed_schedule(pool: &PgPool) -> (i64, i64, i64) {
    let professional_id = common::create_test_professional(pool, 100, "Dana").await;
    let customer_id = common::create_test_customer(pool, 200, "Alex").await;
    let service_id = common::create_test_service(pool, "Consultation", 60).await;
    // Monday 09:00-17:00; 2025-06-30 is a Monday.
    common::create_test_window(pool, professional_id, 1, "09:00", "17:00").await;
    (professional_id, customer_id, service_id)
}

#[sqlx::test]
async fn test_create_booking_success(pool: PgPool) {
    let (professional_id, _customer_id, service_id) = seed_schedule(&pool).await;

    let (state, mut rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:00",
            "duration_minutes": 60,
            "notes": "first visit"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["professional_id"], professional_id);
    assert_eq!(body["date"], "2025-06-30");
    assert_eq!(body["start_time"], "10:00");
    assert_eq!(body["duration_minutes"], 60);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["notes"], "first visit");

    // A creation event is queued for the background worker.
    let event = rx.recv().await.unwrap();
    assert_eq!(event.booking_id, body["id"].as_i64().unwrap());
}

#[sqlx::test]
async fn test_create_booking_defaults_duration_to_service_estimate(pool: PgPool) {
    let (professional_id, _customer_id, service_id) = seed_schedule(&pool).await;

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "09:00"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["duration_minutes"], 60);
}

#[sqlx::test]
async fn test_create_booking_overlap_conflict(pool: PgPool) {
    let (professional_id, customer_id, service_id) = seed_schedule(&pool).await;

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

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    // 10:30 starts inside the existing 10:00-11:00 booking.
    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:30",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("not available")
    );
}

#[sqlx::test]
async fn test_create_booking_adjacent_intervals_allowed(pool: PgPool) {
    let (professional_id, customer_id, service_id) = seed_schedule(&pool).await;

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

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    // Back-to-back with the existing booking; boundaries do not overlap.
    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "11:00",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[sqlx::test]
async fn test_create_booking_over_cancelled_slot(pool: PgPool) {
    let (professional_id, customer_id, service_id) = seed_schedule(&pool).await;

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

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:00",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[sqlx::test]
async fn test_create_booking_without_customer_profile(pool: PgPool) {
    let (professional_id, _customer_id, service_id) = seed_schedule(&pool).await;

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    // User 999 has no customer profile.
    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "999")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:00",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_create_booking_inactive_professional(pool: PgPool) {
    let professional_id = common::create_inactive_professional(&pool, 100, "Dana").await;
    common::create_test_customer(&pool, 200, "Alex").await;
    let service_id = common::create_test_service(&pool, "Consultation", 60).await;

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .post("/api/bookings")
        .add_header("x-user-id", "200")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:00",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_create_booking_requires_identity_header(pool: PgPool) {
    let (professional_id, _customer_id, service_id) = seed_schedule(&pool).await;

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .post("/api/bookings")
        .json(&json!({
            "professional_id": professional_id,
            "service_id": service_id,
            "date": "2025-06-30",
            "time": "10:00",
            "duration_minutes": 60
        }))
        .await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_get_booking(pool: PgPool) {
    let (professional_id, customer_id, service_id) = seed_schedule(&pool).await;

    let booking_id = common::create_test_booking(
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

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .get(&format!("/api/bookings/{booking_id}"))
        .add_header("x-user-id", "200")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], booking_id);
    assert_eq!(body["status"], "confirmed");
}

#[sqlx::test]
async fn test_get_booking_not_found(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .get("/api/bookings/9999")
        .add_header("x-user-id", "200")
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_booking_list_filters_and_pagination(pool: PgPool) {
    let (professional_id, customer_id, service_id) = seed_schedule(&pool).await;
    let other_professional = common::create_test_professional(&pool, 101, "Kim").await;

    for (start, date, professional) in [
        ("09:00", "2025-06-30", professional_id),
        ("10:00", "2025-06-30", professional_id),
        ("11:00", "2025-07-01", professional_id),
        ("09:00", "2025-06-30", other_professional),
    ] {
        common::create_test_booking(
            &pool,
            customer_id,
            professional,
            service_id,
            date,
            start,
            60,
            "pending",
        )
        .await;
    }

    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(bookings_app(state)).unwrap();

    let response = server
        .get("/api/bookings")
        .add_header("x-user-id", "200")
        .add_query_param("professional_id", professional_id.to_string())
        .add_query_param("date", "2025-06-30")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    // Page size 1 still reports the full total.
    let response = server
        .get("/api/bookings")
        .add_header("x-user-id", "200")
        .add_query_param("page", "1")
        .add_query_param("page_size", "1")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 4);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}
