use async_trait::async_trait;

use crate::types::PollerError;

use super::models::PullRequestSummary;

/// Which slice of the user's pull requests to fetch.
///
/// GitHub's `created` filter is not a subset of `all`: the two listings are
/// fetched independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueFilter {
    Assigned,
    Created,
}

impl IssueFilter {
    pub fn as_query(&self) -> &'static str {
        match self {
            IssueFilter::Assigned => "all",
            IssueFilter::Created => "created",
        }
    }
}

/// Remote collaborator the poller pulls pull requests from.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Login of the authenticated user.
    async fn current_user(&self) -> Result<String, PollerError>;

    async fn fetch(&self, filter: IssueFilter) -> Result<Vec<PullRequestSummary>, PollerError>;
}
