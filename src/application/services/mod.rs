//! Business logic services for the application layer.

pub mod availability_service;
pub mod booking_service;
pub mod status_service;

pub use availability_service::AvailabilityService;
pub use booking_service::{BookingRequest, BookingService};
pub use status_service::StatusService;
