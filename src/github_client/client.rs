use async_trait::async_trait;

use crate::config::Config;
use crate::types::PollerError;

use super::api::ApiUser;
use super::core::{HttpClient, PullRequestAggregator};
use super::models::PullRequestSummary;
use super::source::{IssueFilter, PullRequestSource};

#[derive(Clone)]
pub struct GithubClient {
    http: HttpClient,
}

impl GithubClient {
    /// Prepare an authenticated client against the configured API root.
    pub fn new(config: &Config, token: &str) -> Result<Self, PollerError> {
        let http = HttpClient::new(&config.github_api_url, token, config.request_timeout())?;
        Ok(Self { http })
    }
}

#[async_trait]
impl PullRequestSource for GithubClient {
    async fn current_user(&self) -> Result<String, PollerError> {
        let user: ApiUser = self.http.get_json("/user").await?;
        Ok(user.login)
    }

    async fn fetch(&self, filter: IssueFilter) -> Result<Vec<PullRequestSummary>, PollerError> {
        PullRequestAggregator::new(&self.http)
            .pull_requests(filter)
            .await
    }
}
