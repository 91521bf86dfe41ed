//! Glue between the poller's notifications and the render surface.

use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::github_client::PullRequestSummary;
use crate::notify::{PollerNotificationReceivers, PullRequestSnapshot};
use crate::ui::{Dashboard, RenderSurface};

/// Partial dashboard update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub assigned: Option<Arc<[PullRequestSummary]>>,
    pub created: Option<Arc<[PullRequestSummary]>>,
    pub last_sync: Option<DateTime<Local>>,
}

impl RenderState {
    pub fn synced_at(last_sync: DateTime<Local>) -> Self {
        Self {
            last_sync: Some(last_sync),
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: PullRequestSnapshot) -> Self {
        Self {
            assigned: Some(snapshot.assigned),
            created: Some(snapshot.created),
            last_sync: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_none() && self.created.is_none() && self.last_sync.is_none()
    }

    pub fn apply(self, dashboard: &mut Dashboard) {
        if let Some(assigned) = self.assigned {
            dashboard.assigned.update(assigned);
        }
        if let Some(created) = self.created {
            dashboard.created.update(created);
        }
        if let Some(last_sync) = self.last_sync {
            dashboard.status_bar.update(last_sync);
        }
    }
}

pub struct Coordinator {
    surface: Arc<dyn RenderSurface>,
}

impl Coordinator {
    pub fn new(surface: Arc<dyn RenderSurface>) -> Self {
        Self { surface }
    }

    /// Queue `state` on the surface as a single update, hence a single redraw.
    pub fn apply(&self, state: RenderState) {
        if state.is_empty() {
            return;
        }
        self.surface
            .queue_update(Box::new(move |dashboard| state.apply(dashboard)));
    }

    /// Dispatch notifications until cancelled or until both channels close.
    pub async fn run(self, mut receivers: PollerNotificationReceivers, cancel: CancellationToken) {
        let mut timestamps_open = true;
        let mut data_open = true;

        while timestamps_open || data_open {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                polled_at = receivers.latest_poll_timestamp.recv(), if timestamps_open => {
                    match polled_at {
                        Some(polled_at) => self.apply(RenderState::synced_at(polled_at)),
                        None => timestamps_open = false,
                    }
                }
                snapshot = receivers.new_data_available.recv(), if data_open => {
                    match snapshot {
                        Some(snapshot) => self.apply(RenderState::from_snapshot(snapshot)),
                        None => data_open = false,
                    }
                }
            }
        }

        debug!("Coordinator stopped");
    }
}
