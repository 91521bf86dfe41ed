use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiUser {
    pub login: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiRepository {
    pub name: String,
    pub owner: ApiUser,
}

/// Entry from the issues listing. Pull requests are issues carrying a
/// `pull_request` object.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiIssue {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub user: Option<ApiUser>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub repository: Option<ApiRepository>,
    #[serde(default)]
    pub pull_request: Option<Value>,
}

impl ApiIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiPullRequest {
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub merged: bool,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub requested_reviewers: Vec<ApiUser>,
}
