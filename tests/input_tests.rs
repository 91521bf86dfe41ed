//! Keyboard input driving selection and "open in browser".

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use common::{pr, RecordingSurface};
use prlist::github_client::PullRequestStatus;
use prlist::types::PollerError;
use prlist::ui::{InputHandler, TableFocus, UrlOpener};

const PATIENCE: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingOpener {
    opened: Mutex<Vec<String>>,
}

#[async_trait]
impl UrlOpener for RecordingOpener {
    async fn open(&self, url: &str) -> Result<(), PollerError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

fn surface_with_rows() -> Arc<RecordingSurface> {
    let surface = Arc::new(RecordingSurface::new());
    {
        let mut dashboard = surface.dashboard.lock().unwrap();
        dashboard.assigned.update(
            vec![
                pr("upstream", "1", PullRequestStatus::Open),
                pr("upstream", "2", PullRequestStatus::Open),
            ]
            .into(),
        );
        dashboard
            .created
            .update(vec![pr("mine", "7", PullRequestStatus::Open)].into());
    }
    surface
}

async fn drive(surface: Arc<RecordingSurface>, opener: Arc<RecordingOpener>, lines: &[&str]) {
    let (tx, rx) = mpsc::unbounded_channel();
    for line in lines {
        tx.send(line.to_string()).unwrap();
    }
    drop(tx);

    let handler = InputHandler::new(surface, opener);
    tokio::time::timeout(PATIENCE, handler.run(rx, CancellationToken::new()))
        .await
        .unwrap();
}

#[tokio::test]
async fn open_launches_the_selected_pull_request() {
    let surface = surface_with_rows();
    let opener = Arc::new(RecordingOpener::default());

    drive(surface.clone(), opener.clone(), &["a 2", "o", "c 1", "o"]).await;

    assert_eq!(
        *opener.opened.lock().unwrap(),
        vec![
            "https://github.com/octo-org/upstream/pull/2".to_string(),
            "https://github.com/octo-org/mine/pull/7".to_string(),
        ]
    );
    assert_eq!(surface.dashboard.lock().unwrap().focus(), TableFocus::Created);
}

#[tokio::test]
async fn open_without_selection_does_nothing() {
    let surface = surface_with_rows();
    let opener = Arc::new(RecordingOpener::default());

    drive(surface, opener.clone(), &["o", "a 9", "o", "nonsense"]).await;

    assert!(opener.opened.lock().unwrap().is_empty());
}

#[tokio::test]
async fn cancellation_stops_the_handler() {
    let surface = surface_with_rows();
    let (_tx, rx) = mpsc::unbounded_channel::<String>();
    let cancel = CancellationToken::new();
    let handler = InputHandler::new(surface, Arc::new(RecordingOpener::default()));
    let task = tokio::spawn(handler.run(rx, cancel.clone()));

    cancel.cancel();
    tokio::time::timeout(PATIENCE, task).await.unwrap().unwrap();
}
