use std::io::Write;

use chrono::Utc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::{Dashboard, RenderFn, RenderSurface};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Render surface that owns the dashboard on its own task and redraws it as
/// plain text after every queued update.
pub struct ConsoleSurface {
    updates: mpsc::UnboundedSender<RenderFn>,
    stopped: CancellationToken,
}

impl ConsoleSurface {
    /// Start the render loop. The join handle yields the final dashboard.
    pub fn spawn<W>(dashboard: Dashboard, out: W, clear_screen: bool) -> (Self, JoinHandle<Dashboard>)
    where
        W: Write + Send + 'static,
    {
        let (updates, rx) = mpsc::unbounded_channel();
        let stopped = CancellationToken::new();
        let handle = tokio::spawn(render_loop(dashboard, rx, stopped.clone(), out, clear_screen));
        (Self { updates, stopped }, handle)
    }
}

impl RenderSurface for ConsoleSurface {
    fn queue_update(&self, update: RenderFn) {
        if self.updates.send(update).is_err() {
            debug!("Render loop already stopped, dropping update");
        }
    }

    fn stop(&self) {
        self.stopped.cancel();
    }
}

async fn render_loop<W: Write>(
    mut dashboard: Dashboard,
    mut rx: mpsc::UnboundedReceiver<RenderFn>,
    stopped: CancellationToken,
    mut out: W,
    clear_screen: bool,
) -> Dashboard {
    draw(&dashboard, &mut out, clear_screen);

    loop {
        tokio::select! {
            biased;
            _ = stopped.cancelled() => break,
            update = rx.recv() => match update {
                Some(update) => {
                    update(&mut dashboard);
                    draw(&dashboard, &mut out, clear_screen);
                }
                None => break,
            },
        }
    }

    dashboard
}

fn draw<W: Write>(dashboard: &Dashboard, out: &mut W, clear_screen: bool) {
    let prefix = if clear_screen { CLEAR_SCREEN } else { "" };
    let frame = dashboard.render(Utc::now());
    if let Err(err) = write!(out, "{prefix}{frame}").and_then(|_| out.flush()) {
        warn!(error = ?err, "Failed to draw dashboard");
    }
}
