//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod availability;
pub mod bookings;
pub mod health;
pub mod history;
pub mod slots;
pub mod statuses;

pub use availability::{create_window_handler, delete_window_handler, window_list_handler};
pub use bookings::{booking_list_handler, create_booking_handler, get_booking_handler};
pub use health::health_handler;
pub use history::history_list_handler;
pub use slots::slots_handler;
pub use statuses::{
    create_status_handler, delete_status_handler, status_list_handler,
    update_booking_status_handler,
};
