#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Local, TimeZone, Utc};

use prlist::github_client::{IssueFilter, PullRequestSource, PullRequestStatus, PullRequestSummary};
use prlist::notify::PullRequestSnapshot;
use prlist::types::PollerError;
use prlist::ui::{Dashboard, RenderFn, RenderSurface, StatusBar};

pub type Response = Result<Vec<PullRequestSummary>, String>;

pub fn pr(repo: &str, id: &str, status: PullRequestStatus) -> PullRequestSummary {
    PullRequestSummary {
        draft: false,
        author: "octocat".to_string(),
        title: format!("{repo} #{id}"),
        repository: repo.to_string(),
        id: id.to_string(),
        reviewer_count: 0,
        status,
        opened_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        url: format!("https://github.com/octo-org/{repo}/pull/{id}"),
    }
}

/// Source replaying a fixed script per filter; once a script runs out the
/// last successful response is repeated.
pub struct ScriptedSource {
    scripts: Mutex<HashMap<IssueFilter, VecDeque<Response>>>,
    last_ok: Mutex<HashMap<IssueFilter, Vec<PullRequestSummary>>>,
    fetches: Arc<Mutex<usize>>,
}

impl ScriptedSource {
    pub fn new(assigned: Vec<Response>, created: Vec<Response>) -> Self {
        Self {
            scripts: Mutex::new(HashMap::from([
                (IssueFilter::Assigned, VecDeque::from(assigned)),
                (IssueFilter::Created, VecDeque::from(created)),
            ])),
            last_ok: Mutex::new(HashMap::new()),
            fetches: Arc::new(Mutex::new(0)),
        }
    }

    pub fn fetch_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.fetches)
    }
}

#[async_trait]
impl PullRequestSource for ScriptedSource {
    async fn current_user(&self) -> Result<String, PollerError> {
        Ok("octocat".to_string())
    }

    async fn fetch(&self, filter: IssueFilter) -> Result<Vec<PullRequestSummary>, PollerError> {
        *self.fetches.lock().unwrap() += 1;
        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&filter)
            .and_then(|script| script.pop_front());

        match next {
            Some(Ok(items)) => {
                self.last_ok.lock().unwrap().insert(filter, items.clone());
                Ok(items)
            }
            Some(Err(message)) => Err(PollerError::GitHub(message)),
            None => Ok(self
                .last_ok
                .lock()
                .unwrap()
                .get(&filter)
                .cloned()
                .unwrap_or_default()),
        }
    }
}

/// Surface applying updates synchronously to an in-memory dashboard.
pub struct RecordingSurface {
    pub dashboard: Mutex<Dashboard>,
    pub updates: Mutex<usize>,
    pub stopped: Mutex<bool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            dashboard: Mutex::new(Dashboard::new(
                PullRequestSnapshot {
                    assigned: Vec::new().into(),
                    created: Vec::new().into(),
                },
                StatusBar::new(
                    "octocat",
                    5,
                    Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
                ),
            )),
            updates: Mutex::new(0),
            stopped: Mutex::new(false),
        }
    }

    pub fn update_count(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

impl RenderSurface for RecordingSurface {
    fn queue_update(&self, update: RenderFn) {
        *self.updates.lock().unwrap() += 1;
        let mut dashboard = self.dashboard.lock().unwrap();
        update(&mut *dashboard);
    }

    fn stop(&self) {
        *self.stopped.lock().unwrap() = true;
    }
}
