//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`BookingRepository`] - Booking inserts, reads, status transitions
//! - [`AvailabilityRepository`] - Weekly availability windows
//! - [`StatusRepository`] - Status catalog management
//! - [`HistoryRepository`] - Status history reads
//! - [`ProfileRepository`] - Read-only profile/catalog lookups
//! - [`EventRepository`] - Booking event audit feed
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod availability_repository;
pub mod booking_repository;
pub mod event_repository;
pub mod history_repository;
pub mod profile_repository;
pub mod status_repository;

pub use availability_repository::AvailabilityRepository;
pub use booking_repository::BookingRepository;
pub use event_repository::EventRepository;
pub use history_repository::HistoryRepository;
pub use profile_repository::ProfileRepository;
pub use status_repository::StatusRepository;

#[cfg(test)]
pub use availability_repository::MockAvailabilityRepository;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
#[cfg(test)]
pub use status_repository::MockStatusRepository;
