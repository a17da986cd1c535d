//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the booking platform. Entities are plain data structures
//! without business logic beyond small interval helpers.
//!
//! # Entity Types
//!
//! - [`Booking`] - A reserved time interval with a professional
//! - [`AvailabilityWindow`] - A recurring weekly availability window
//! - [`Slot`] - A derived candidate interval, marked available or not
//! - [`BookingStatus`] - A named status code in the data-driven catalog
//! - [`StatusHistoryEntry`] - One immutable status transition record
//! - [`Professional`], [`Customer`], [`ServiceOffering`] - read-only
//!   profile/catalog records owned by the identity side of the platform
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewBooking`, `NewAvailabilityWindow`, `NewBookingStatus`.

pub mod availability;
pub mod booking;
pub mod history;
pub mod profile;
pub mod status;

pub use availability::{AvailabilityWindow, NewAvailabilityWindow, Slot, weekday_of};
pub use booking::{Booking, CANCELLED_STATUS, NewBooking, PENDING_STATUS};
pub use history::StatusHistoryEntry;
pub use profile::{Customer, Professional, ServiceOffering};
pub use status::{BookingStatus, NewBookingStatus};
