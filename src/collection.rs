use std::sync::Arc;

use crate::change_checker::{ChangeChecker, KeyCheckerKind};
use crate::github_client::PullRequestSummary;

/// Current pull request snapshot plus the detector tracking it.
#[derive(Debug)]
pub struct PullRequestCollection {
    items: Arc<[PullRequestSummary]>,
    checker: ChangeChecker,
}

impl PullRequestCollection {
    /// Uses the order-insensitive policy.
    pub fn new(items: Vec<PullRequestSummary>) -> Self {
        Self::with_checker(items, None)
    }

    pub fn with_checker(items: Vec<PullRequestSummary>, kind: Option<KeyCheckerKind>) -> Self {
        let items: Arc<[PullRequestSummary]> = items.into();
        let checker = ChangeChecker::new(version_keys(&items), kind);
        Self { items, checker }
    }

    pub fn version_keys(&self) -> Vec<String> {
        version_keys(&self.items)
    }

    /// Replace the held pull requests wholesale and report whether their
    /// version keys differ from the last recorded baseline.
    pub fn update(&mut self, latest: Vec<PullRequestSummary>) -> bool {
        self.items = latest.into();
        let keys = self.version_keys();
        self.checker.has_changed(keys)
    }

    pub fn items(&self) -> Arc<[PullRequestSummary]> {
        Arc::clone(&self.items)
    }
}

fn version_keys(items: &[PullRequestSummary]) -> Vec<String> {
    items.iter().map(PullRequestSummary::version_key).collect()
}
