use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github_client::api::{ApiIssue, ApiPullRequest};

/// Lifecycle state of a pull request as reported by GitHub.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestStatus {
    Open,
    Closed,
    Merged,
    Other(String),
}

impl PullRequestStatus {
    pub fn from_state(state: &str, merged: bool) -> Self {
        if merged {
            return PullRequestStatus::Merged;
        }
        match state.to_ascii_lowercase().as_str() {
            "open" => PullRequestStatus::Open,
            "closed" => PullRequestStatus::Closed,
            "merged" => PullRequestStatus::Merged,
            _ => PullRequestStatus::Other(state.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PullRequestStatus::Open => "open",
            PullRequestStatus::Closed => "closed",
            PullRequestStatus::Merged => "merged",
            PullRequestStatus::Other(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subset of a GitHub pull request that the dashboard cares about.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub draft: bool,
    pub author: String,
    pub title: String,
    /// Full `owner/name` of the repository; the bare name is not unique.
    pub repository: String,
    pub id: String,
    pub reviewer_count: u32,
    pub status: PullRequestStatus,
    pub opened_at: DateTime<Utc>,
    pub url: String,
}

impl PullRequestSummary {
    /// Builds a summary from an issue listing entry and its pull request
    /// details; the listing alone lacks the draft flag and the HTML URL.
    pub fn from_api(issue: &ApiIssue, pr: &ApiPullRequest) -> Self {
        Self {
            draft: pr.draft,
            author: issue
                .user
                .as_ref()
                .map(|user| user.login.clone())
                .unwrap_or_default(),
            title: issue.title.clone(),
            repository: issue
                .repository
                .as_ref()
                .map(|repo| format!("{}/{}", repo.owner.login, repo.name))
                .unwrap_or_default(),
            id: issue.number.to_string(),
            reviewer_count: u32::try_from(pr.requested_reviewers.len()).unwrap_or(u32::MAX),
            status: PullRequestStatus::from_state(&issue.state, pr.merged),
            opened_at: issue.created_at,
            url: pr.html_url.clone(),
        }
    }

    /// Identity plus observable state: `repository:id:status:draft`.
    ///
    /// Title, author, reviewer count and timestamps are left out so that churn
    /// in those fields never counts as a change.
    pub fn version_key(&self) -> String {
        let draft = if self.draft { "Y" } else { "N" };
        format!("{}:{}:{}:{}", self.repository, self.id, self.status, draft)
    }
}
