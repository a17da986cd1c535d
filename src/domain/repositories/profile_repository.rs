//! Repository trait for read-only profile and catalog lookups.

use crate::domain::entities::{Customer, Professional, ServiceOffering};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only lookups against the profile/catalog records owned by the
/// identity side of the platform. Booking operations only verify that
/// references exist; they never mutate these rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_professional(&self, id: i64) -> Result<Option<Professional>, AppError>;

    /// Maps an authenticated user id to their customer profile.
    async fn find_customer_by_user(&self, user_id: i64) -> Result<Option<Customer>, AppError>;

    async fn find_service(&self, id: i64) -> Result<Option<ServiceOffering>, AppError>;
}
