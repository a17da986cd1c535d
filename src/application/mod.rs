//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::availability_service::AvailabilityService`] - Slot derivation and window management
//! - [`services::booking_service::BookingService`] - Booking creation under the non-overlap invariant
//! - [`services::status_service::StatusService`] - Status transitions, history, and the status catalog

pub mod services;
