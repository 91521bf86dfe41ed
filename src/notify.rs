//! Rendezvous notification channels between the poller and its consumer.
//!
//! A send only completes once the receiving side has taken the value, so the
//! producer never runs more than one notification ahead of the consumer.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, oneshot};

use crate::github_client::PullRequestSummary;
use crate::types::PollerError;

struct Envelope<T> {
    value: T,
    taken: oneshot::Sender<()>,
}

pub struct RendezvousSender<T> {
    tx: mpsc::Sender<Envelope<T>>,
}

pub struct RendezvousReceiver<T> {
    rx: mpsc::Receiver<Envelope<T>>,
}

pub fn rendezvous<T>() -> (RendezvousSender<T>, RendezvousReceiver<T>) {
    let (tx, rx) = mpsc::channel(1);
    (RendezvousSender { tx }, RendezvousReceiver { rx })
}

impl<T> RendezvousSender<T> {
    /// Hand `value` over and wait until the receiver has taken it.
    pub async fn send(&self, value: T) -> Result<(), PollerError> {
        let (taken, handed_over) = oneshot::channel();
        self.tx
            .send(Envelope { value, taken })
            .await
            .map_err(|_| PollerError::ChannelClosed)?;
        handed_over.await.map_err(|_| PollerError::ChannelClosed)
    }
}

impl<T> RendezvousReceiver<T> {
    /// `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<T> {
        let envelope = self.rx.recv().await?;
        let _ = envelope.taken.send(());
        Some(envelope.value)
    }
}

/// Both collections as they stood at the end of one tick's update.
#[derive(Debug, Clone)]
pub struct PullRequestSnapshot {
    pub assigned: Arc<[PullRequestSummary]>,
    pub created: Arc<[PullRequestSummary]>,
}

/// Producer half handed to [`crate::poller::Poller::poll`].
pub struct PollerNotificationChannels {
    /// Fires after every successful fetch, changed or not.
    pub latest_poll_timestamp: RendezvousSender<DateTime<Local>>,
    /// Fires only when at least one collection changed.
    pub new_data_available: RendezvousSender<PullRequestSnapshot>,
}

/// Consumer half handed to the coordinator.
pub struct PollerNotificationReceivers {
    pub latest_poll_timestamp: RendezvousReceiver<DateTime<Local>>,
    pub new_data_available: RendezvousReceiver<PullRequestSnapshot>,
}

pub fn notification_channels() -> (PollerNotificationChannels, PollerNotificationReceivers) {
    let (timestamp_tx, timestamp_rx) = rendezvous();
    let (data_tx, data_rx) = rendezvous();
    (
        PollerNotificationChannels {
            latest_poll_timestamp: timestamp_tx,
            new_data_available: data_tx,
        },
        PollerNotificationReceivers {
            latest_poll_timestamp: timestamp_rx,
            new_data_available: data_rx,
        },
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn send_waits_for_receiver() {
        let (tx, mut rx) = rendezvous::<u32>();
        let send = tokio::spawn(async move { tx.send(7).await });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!send.is_finished());

        assert_eq!(rx.recv().await, Some(7));
        send.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn send_fails_when_receiver_dropped() {
        let (tx, rx) = rendezvous::<u32>();
        drop(rx);
        assert!(matches!(tx.send(1).await, Err(PollerError::ChannelClosed)));
    }

    #[tokio::test]
    async fn recv_ends_when_sender_dropped() {
        let (tx, mut rx) = rendezvous::<u32>();
        drop(tx);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn values_arrive_in_order() {
        let (tx, mut rx) = rendezvous::<u32>();
        let producer = tokio::spawn(async move {
            for value in 0..5 {
                tx.send(value).await.unwrap();
            }
        });

        let mut seen = Vec::new();
        while let Some(value) = rx.recv().await {
            seen.push(value);
        }
        producer.await.unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
