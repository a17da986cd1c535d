//! Read-only profile and catalog records.
//!
//! Profiles are owned by the identity/catalog side of the platform; booking
//! operations only look them up by id to validate references.

use chrono::{DateTime, Utc};

/// A professional who offers services and defines availability windows.
#[derive(Debug, Clone)]
pub struct Professional {
    pub id: i64,
    pub user_id: i64,
    pub display_name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// A customer profile mapped from an authenticated user id.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub user_id: i64,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

/// A bookable service with its duration estimate.
#[derive(Debug, Clone)]
pub struct ServiceOffering {
    pub id: i64,
    pub name: String,
    pub duration_minutes: i32,
    pub created_at: DateTime<Utc>,
}
