//! Periodic GitHub polling with change detection.
//!
//! The [`Poller`] fetches both pull request listings every interval, records
//! the attempt on the timestamp channel and, when either collection's version
//! keys moved, hands a snapshot of both to the consumer.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::change_checker::KeyCheckerKind;
use crate::collection::PullRequestCollection;
use crate::config::Config;
use crate::github_client::{GithubClient, IssueFilter, PullRequestSource, PullRequestSummary};
use crate::notify::{PollerNotificationChannels, PullRequestSnapshot, RendezvousSender};
use crate::types::PollerError;

/// Both collections, guarded together so they are always updated and read as
/// a pair.
struct PollerState {
    assigned: PullRequestCollection,
    created: PullRequestCollection,
    last_polled: DateTime<Local>,
}

impl PollerState {
    fn snapshot(&self) -> PullRequestSnapshot {
        PullRequestSnapshot {
            assigned: self.assigned.items(),
            created: self.created.items(),
        }
    }
}

enum TickOutcome {
    Completed,
    Stopped,
}

pub struct Poller {
    source: Box<dyn PullRequestSource>,
    cancel: CancellationToken,
    interval: Duration,
    max_consecutive_failures: u32,
    username: String,
    state: Mutex<PollerState>,
}

impl Poller {
    /// Authenticate against GitHub and perform the initial fetch. The returned
    /// poller is fully populated but idle until [`Poller::poll`] is called.
    pub async fn connect(
        token: &str,
        interval: Duration,
        cancel: CancellationToken,
        config: &Config,
    ) -> Result<Self, PollerError> {
        let client = GithubClient::new(config, token)?;
        let poller = Self::with_source(Box::new(client), interval, cancel).await?;
        Ok(poller.with_max_consecutive_failures(config.max_consecutive_failures))
    }

    /// Same as [`Poller::connect`] for any pull request source.
    pub async fn with_source(
        source: Box<dyn PullRequestSource>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Result<Self, PollerError> {
        Self::with_source_and_checker(source, interval, cancel, None).await
    }

    pub async fn with_source_and_checker(
        source: Box<dyn PullRequestSource>,
        interval: Duration,
        cancel: CancellationToken,
        checker: Option<KeyCheckerKind>,
    ) -> Result<Self, PollerError> {
        let username = source.current_user().await?;
        let (assigned, created) = fetch_both(source.as_ref()).await?;

        info!(
            user = %username,
            assigned = assigned.len(),
            created = created.len(),
            "Initial pull request fetch complete"
        );

        Ok(Self {
            source,
            cancel,
            interval,
            max_consecutive_failures: 1,
            username,
            state: Mutex::new(PollerState {
                assigned: PullRequestCollection::with_checker(assigned, checker),
                created: PullRequestCollection::with_checker(created, checker),
                last_polled: Local::now(),
            }),
        })
    }

    /// Number of failed ticks in a row tolerated before [`Poller::poll`]
    /// gives up and returns the error. Zero behaves like one.
    pub fn with_max_consecutive_failures(mut self, limit: u32) -> Self {
        self.max_consecutive_failures = limit.max(1);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub async fn last_polled(&self) -> DateTime<Local> {
        self.state.lock().await.last_polled
    }

    /// Consistent view of both collections.
    pub async fn snapshot(&self) -> PullRequestSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Poll every interval until the cancellation token fires or the consumer
    /// drops its receivers. Returns an error only after too many consecutive
    /// failed ticks.
    pub async fn poll(&self, channels: PollerNotificationChannels) -> Result<(), PollerError> {
        let mut failures = 0u32;

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    info!("Polling cancelled");
                    return Ok(());
                }
                _ = tokio::time::sleep(self.interval) => {}
            }

            match self.tick(&channels).await {
                Ok(TickOutcome::Completed) => failures = 0,
                Ok(TickOutcome::Stopped) => return Ok(()),
                Err(err) => {
                    failures += 1;
                    if failures >= self.max_consecutive_failures {
                        error!(error = ?err, failures, "Giving up on polling GitHub");
                        return Err(err);
                    }
                    warn!(error = ?err, failures, "Poll failed, retrying next interval");
                }
            }
        }
    }

    async fn tick(&self, channels: &PollerNotificationChannels) -> Result<TickOutcome, PollerError> {
        // The fetch itself is not raced against cancellation.
        let (assigned, created) = fetch_both(self.source.as_ref()).await?;

        let polled_at = Local::now();
        if !self
            .notify(&channels.latest_poll_timestamp, polled_at)
            .await
        {
            return Ok(TickOutcome::Stopped);
        }

        let changed = {
            let mut state = self.state.lock().await;
            state.last_polled = polled_at;
            let assigned_changed = state.assigned.update(assigned);
            let created_changed = state.created.update(created);
            debug!(assigned_changed, created_changed, "Poll complete");
            (assigned_changed || created_changed).then(|| state.snapshot())
        };

        if let Some(snapshot) = changed {
            info!(
                assigned = snapshot.assigned.len(),
                created = snapshot.created.len(),
                "Pull requests changed"
            );
            if !self.notify(&channels.new_data_available, snapshot).await {
                return Ok(TickOutcome::Stopped);
            }
        }

        Ok(TickOutcome::Completed)
    }

    /// `false` when polling should stop: cancelled, or nobody is listening.
    async fn notify<T>(&self, tx: &RendezvousSender<T>, value: T) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            result = tx.send(value) => match result {
                Ok(()) => true,
                Err(err) => {
                    debug!(error = ?err, "Notification consumer gone, stopping poller");
                    false
                }
            },
        }
    }
}

async fn fetch_both(
    source: &dyn PullRequestSource,
) -> Result<(Vec<PullRequestSummary>, Vec<PullRequestSummary>), PollerError> {
    tokio::try_join!(
        source.fetch(IssueFilter::Assigned),
        source.fetch(IssueFilter::Created)
    )
}
