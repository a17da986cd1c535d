//! Background worker persisting booking events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::booking_event::BookingEvent;
use crate::domain::repositories::EventRepository;

/// Consumes booking events from the channel and appends them to the audit
/// feed, retrying transient failures with backoff.
///
/// An event that still fails after the retries is dropped with a warning;
/// the booking operation that emitted it has long since completed and must
/// not be affected.
pub async fn run_notify_worker<E>(mut rx: mpsc::Receiver<BookingEvent>, events: Arc<E>)
where
    E: EventRepository + ?Sized,
{
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(100)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(3);

        let result = Retry::spawn(strategy, || events.append(&event)).await;

        if let Err(e) = result {
            tracing::warn!(
                booking_id = event.booking_id,
                kind = event.kind.as_str(),
                error = %e,
                "dropping booking event after retries"
            );
        }
    }

    tracing::info!("notify worker stopped: channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::event_repository::MockEventRepository;

    #[tokio::test]
    async fn test_worker_appends_received_events() {
        let mut mock = MockEventRepository::new();
        mock.expect_append()
            .withf(|event| event.booking_id == 5)
            .times(1)
            .returning(|_| Ok(()));

        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_notify_worker(rx, Arc::new(mock)));

        tx.send(BookingEvent::created(5)).await.unwrap();
        drop(tx);

        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_survives_persistent_failure() {
        let mut mock = MockEventRepository::new();
        mock.expect_append().returning(|_| {
            Err(crate::error::AppError::internal(
                "down",
                serde_json::json!({}),
            ))
        });

        let (tx, rx) = mpsc::channel(8);
        let handle = tokio::spawn(run_notify_worker(rx, Arc::new(mock)));

        tx.send(BookingEvent::created(1)).await.unwrap();
        tx.send(BookingEvent::status_changed(1, "pending", "confirmed"))
            .await
            .unwrap();
        drop(tx);

        // Worker drains both events and exits without panicking.
        handle.await.unwrap();
    }
}
