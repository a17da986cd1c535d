//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities, repository interfaces, and the booking
//! event model independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`booking_event`] - Notification/audit event model
//! - [`notify_worker`] - Asynchronous event persistence worker
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Event Processing Flow
//!
//! 1. A service completes a booking create or status transition
//! 2. A [`booking_event::BookingEvent`] is sent to the bounded channel
//! 3. [`notify_worker::run_notify_worker`] processes events with retry logic
//! 4. Events are persisted via [`repositories::EventRepository`]

pub mod booking_event;
pub mod entities;
pub mod notify_worker;
pub mod repositories;
