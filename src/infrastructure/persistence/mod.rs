//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements bound at runtime.
//!
//! # Repositories
//!
//! - [`PgBookingRepository`] - Bookings, including the serializable
//!   check-and-insert and the transactional status transition
//! - [`PgAvailabilityRepository`] - Weekly availability windows
//! - [`PgStatusRepository`] - Status catalog
//! - [`PgHistoryRepository`] - Status history reads
//! - [`PgProfileRepository`] - Profile/catalog lookups
//! - [`PgEventRepository`] - Booking event audit feed

pub mod pg_availability_repository;
pub mod pg_booking_repository;
pub mod pg_event_repository;
pub mod pg_history_repository;
pub mod pg_profile_repository;
pub mod pg_status_repository;

pub use pg_availability_repository::PgAvailabilityRepository;
pub use pg_booking_repository::PgBookingRepository;
pub use pg_event_repository::PgEventRepository;
pub use pg_history_repository::PgHistoryRepository;
pub use pg_profile_repository::PgProfileRepository;
pub use pg_status_repository::PgStatusRepository;
