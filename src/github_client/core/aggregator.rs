use tracing::{debug, warn};

use crate::types::PollerError;

use super::super::api::{ApiIssue, ApiPullRequest, IssueListQuery};
use super::super::helpers::ISSUES_PER_PAGE;
use super::super::models::PullRequestSummary;
use super::super::source::IssueFilter;
use super::http::HttpClient;

/// Joins the issue listing with per-PR detail requests into summaries.
pub struct PullRequestAggregator<'a> {
    http: &'a HttpClient,
}

impl<'a> PullRequestAggregator<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Lists open issues for the filter and resolves each pull request.
    /// A failed listing fails the whole call; a failed detail lookup only
    /// drops that pull request.
    pub async fn pull_requests(
        &self,
        filter: IssueFilter,
    ) -> Result<Vec<PullRequestSummary>, PollerError> {
        let query = IssueListQuery {
            filter: filter.as_query(),
            state: "open",
            per_page: ISSUES_PER_PAGE,
        };
        let issues: Vec<ApiIssue> = self.http.get_json_with_query("/issues", &query).await?;

        let mut summaries = Vec::new();
        for issue in issues.iter().filter(|issue| issue.is_pull_request()) {
            let Some(repository) = issue.repository.as_ref() else {
                continue;
            };

            match self
                .pull_request(&repository.owner.login, &repository.name, issue.number)
                .await
            {
                Ok(details) => summaries.push(PullRequestSummary::from_api(issue, &details)),
                Err(err) => {
                    warn!(
                        repository = %repository.name,
                        number = issue.number,
                        error = ?err,
                        "Failed to fetch pull request details"
                    );
                }
            }
        }

        debug!(
            filter = filter.as_query(),
            count = summaries.len(),
            "Fetched pull requests"
        );
        Ok(summaries)
    }

    async fn pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<ApiPullRequest, PollerError> {
        self.http
            .get_json(&format!("/repos/{owner}/{repo}/pulls/{number}"))
            .await
    }
}
