//! Booking event model for the asynchronous notification/audit feed.

use serde_json::{Value, json};

/// What happened to a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEventKind {
    Created,
    StatusChanged { old: String, new: String },
}

impl BookingEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingEventKind::Created => "created",
            BookingEventKind::StatusChanged { .. } => "status_changed",
        }
    }
}

/// An in-memory booking event handed from HTTP handlers to the background
/// worker via a bounded channel.
///
/// This decouples the HTTP response from the audit write: a full queue or a
/// failing sink drops the event with a warning and never fails the booking
/// operation that produced it.
///
/// # Usage Flow
///
/// 1. Emitted by a service after a successful create or status transition
/// 2. Sent to the channel with `try_send` (non-blocking)
/// 3. Persisted by [`crate::domain::notify_worker::run_notify_worker`]
#[derive(Debug, Clone)]
pub struct BookingEvent {
    pub booking_id: i64,
    pub kind: BookingEventKind,
}

impl BookingEvent {
    pub fn created(booking_id: i64) -> Self {
        Self {
            booking_id,
            kind: BookingEventKind::Created,
        }
    }

    pub fn status_changed(booking_id: i64, old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            booking_id,
            kind: BookingEventKind::StatusChanged {
                old: old.into(),
                new: new.into(),
            },
        }
    }

    /// JSON detail payload stored alongside the event kind.
    pub fn detail(&self) -> Value {
        match &self.kind {
            BookingEventKind::Created => json!({}),
            BookingEventKind::StatusChanged { old, new } => {
                json!({ "old_status": old, "new_status": new })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_event() {
        let event = BookingEvent::created(42);
        assert_eq!(event.booking_id, 42);
        assert_eq!(event.kind.as_str(), "created");
        assert_eq!(event.detail(), json!({}));
    }

    #[test]
    fn test_status_changed_event_detail() {
        let event = BookingEvent::status_changed(7, "pending", "confirmed");
        assert_eq!(event.kind.as_str(), "status_changed");
        assert_eq!(event.detail()["old_status"], "pending");
        assert_eq!(event.detail()["new_status"], "confirmed");
    }
}
