//! Repository trait for the booking event audit feed.

use crate::domain::booking_event::BookingEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only sink for booking events.
///
/// Written exclusively by the background notify worker; a failed append is
/// retried there and never affects the booking operation that emitted the
/// event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn append(&self, event: &BookingEvent) -> Result<(), AppError>;
}
