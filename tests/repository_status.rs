mod common;

use sqlx::PgPool;
use std::sync::Arc;

use slotbook::domain::entities::NewBookingStatus;
use slotbook::domain::repositories::StatusRepository;
use slotbook::error::AppError;
use slotbook::infrastructure::persistence::PgStatusRepository;

#[sqlx::test]
async fn test_seeded_catalog(pool: PgPool) {
    let repo = PgStatusRepository::new(Arc::new(pool));

    let statuses = repo.list().await.unwrap();
    let names: Vec<&str> = statuses.iter().map(|s| s.name.as_str()).collect();

    for seeded in ["pending", "confirmed", "completed", "cancelled"] {
        assert!(names.contains(&seeded), "{seeded} missing");
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgStatusRepository::new(Arc::new(pool));

    let status = repo
        .create(NewBookingStatus {
            name: "no_show".to_string(),
            description: Some("Customer did not arrive".to_string()),
        })
        .await
        .unwrap();

    let by_id = repo.find_by_id(status.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "no_show");

    let by_name = repo.find_by_name("no_show").await.unwrap().unwrap();
    assert_eq!(by_name.id, status.id);

    assert!(repo.find_by_name("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_create_duplicate_name_conflicts(pool: PgPool) {
    let repo = PgStatusRepository::new(Arc::new(pool));

    let result = repo
        .create(NewBookingStatus {
            name: "pending".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = PgStatusRepository::new(Arc::new(pool));

    let status = repo
        .create(NewBookingStatus {
            name: "rescheduled".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert!(repo.delete(status.id).await.unwrap());
    assert!(!repo.delete(status.id).await.unwrap());
}

#[sqlx::test]
async fn test_delete_referenced_status_conflicts(pool: PgPool) {
    let professional_id = common::create_test_professional(&pool, 100, "Dana").await;
    let customer_id = common::create_test_customer(&pool, 200, "Alex").await;
    let service_id = common::create_test_service(&pool, "Consultation", 60).await;

    common::create_test_booking(
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

    let pending_id = common::status_id(&pool, "pending").await;
    let repo = PgStatusRepository::new(Arc::new(pool));

    let result = repo.delete(pending_id).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}
