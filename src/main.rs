use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use prlist::config::Config;
use prlist::coordinator::Coordinator;
use prlist::github_client::resolve_token;
use prlist::logging::init_logging;
use prlist::notify::notification_channels;
use prlist::poller::Poller;
use prlist::types::PollerError;
use prlist::ui::{
    spawn_stdin_reader, ConsoleSurface, Dashboard, InputHandler, RenderSurface, StatusBar,
    SystemBrowser,
};

#[tokio::main]
async fn main() -> Result<(), PollerError> {
    init_logging();

    let config = Config::load().await;
    let token = resolve_token(&config)?;
    let cancel = CancellationToken::new();

    let poller = Arc::new(
        Poller::connect(&token, config.poll_interval(), cancel.clone(), &config).await?,
    );

    let status_bar = StatusBar::new(
        poller.username(),
        config.poll_interval_display_minutes(),
        poller.last_polled().await,
    );
    let dashboard = Dashboard::new(poller.snapshot().await, status_bar);
    let (surface, render_task) = ConsoleSurface::spawn(dashboard, std::io::stdout(), true);
    let surface: Arc<dyn RenderSurface> = Arc::new(surface);

    let input = tokio::spawn(
        InputHandler::new(surface.clone(), Arc::new(SystemBrowser))
            .run(spawn_stdin_reader()?, cancel.clone()),
    );

    let (channels, receivers) = notification_channels();
    let coordinator = tokio::spawn(Coordinator::new(surface.clone()).run(receivers, cancel.clone()));
    let mut polling = {
        let poller = Arc::clone(&poller);
        tokio::spawn(async move { poller.poll(channels).await })
    };

    let outcome = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            signal.map_err(PollerError::Io)
        }
        joined = &mut polling => joined.unwrap_or_else(|err| Err(PollerError::Task(err))),
    };

    cancel.cancel();
    surface.stop();
    let _ = coordinator.await;
    let _ = input.await;
    let _ = render_task.await;
    if !polling.is_finished() {
        let _ = polling.await;
    }

    outcome
}
