//! Line based keyboard input for the console dashboard.
//!
//! `a <row>` and `c <row>` select a row (one based) in the assigned or created
//! table, `o` opens the selected pull request in a browser.

use std::io::BufRead;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::{RenderSurface, TableFocus};
use crate::types::PollerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero based row in `table`.
    Select { table: TableFocus, row: usize },
    Open,
}

/// Parse one input line. Unknown input and row zero yield `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let table = match words.next()? {
        "o" => return words.next().is_none().then_some(Command::Open),
        "a" => TableFocus::Assigned,
        "c" => TableFocus::Created,
        _ => return None,
    };
    let row = words.next()?.parse::<usize>().ok()?.checked_sub(1)?;
    words
        .next()
        .is_none()
        .then_some(Command::Select { table, row })
}

#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), PollerError>;
}

/// Hands URLs to the platform's default browser launcher.
pub struct SystemBrowser;

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(url: &str) -> tokio::process::Command {
    let mut command = tokio::process::Command::new("xdg-open");
    command.arg(url);
    command
}

#[async_trait]
impl UrlOpener for SystemBrowser {
    async fn open(&self, url: &str) -> Result<(), PollerError> {
        let status = launcher(url)
            .stdin(std::process::Stdio::null())
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .await?;

        if !status.success() {
            return Err(PollerError::Browser(format!(
                "browser launcher exited with {status} for {url}"
            )));
        }
        Ok(())
    }
}

/// Read stdin on a plain thread so a pending read never holds up runtime
/// shutdown. The channel closes at end of input.
pub fn spawn_stdin_reader() -> Result<mpsc::UnboundedReceiver<String>, PollerError> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("prlist-stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Turns input lines into dashboard selections and browser launches.
pub struct InputHandler {
    surface: Arc<dyn RenderSurface>,
    opener: Arc<dyn UrlOpener>,
}

impl InputHandler {
    pub fn new(surface: Arc<dyn RenderSurface>, opener: Arc<dyn UrlOpener>) -> Self {
        Self { surface, opener }
    }

    pub async fn run(self, mut lines: mpsc::UnboundedReceiver<String>, cancel: CancellationToken) {
        loop {
            let line = tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                line = lines.recv() => match line {
                    Some(line) => line,
                    None => break,
                },
            };

            match parse_command(&line) {
                Some(command) => {
                    if !self.handle(command).await {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => debug!(input = %line, "Ignoring unrecognised input"),
            }
        }
        debug!("Input handler stopped");
    }

    /// Returns false once the render surface has gone away.
    async fn handle(&self, command: Command) -> bool {
        match command {
            Command::Select { table, row } => {
                self.surface.queue_update(Box::new(move |dashboard| {
                    dashboard.select(table, row);
                }));
                true
            }
            Command::Open => {
                let (tx, rx) = oneshot::channel();
                self.surface.queue_update(Box::new(move |dashboard| {
                    let _ = tx.send(dashboard.selected_url().map(str::to_owned));
                }));

                match rx.await {
                    Ok(Some(url)) => {
                        info!(url = %url, "Opening pull request in browser");
                        if let Err(err) = self.opener.open(&url).await {
                            warn!(error = %err, "Failed to open browser");
                        }
                        true
                    }
                    Ok(None) => {
                        debug!("Nothing selected to open");
                        true
                    }
                    Err(_) => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_selection_as_zero_based_row() {
        assert_eq!(
            parse_command("a 1"),
            Some(Command::Select {
                table: TableFocus::Assigned,
                row: 0
            })
        );
        assert_eq!(
            parse_command("  c   3 "),
            Some(Command::Select {
                table: TableFocus::Created,
                row: 2
            })
        );
    }

    #[test]
    fn parses_open() {
        assert_eq!(parse_command("o"), Some(Command::Open));
        assert_eq!(parse_command(" o "), Some(Command::Open));
    }

    #[test]
    fn rejects_malformed_input() {
        for line in ["", "a", "a 0", "a -1", "a two", "c 1 2", "o now", "x 1"] {
            assert_eq!(parse_command(line), None, "{line:?}");
        }
    }
}
