mod queries;
mod types;

pub use queries::IssueListQuery;
pub use types::{ApiIssue, ApiPullRequest, ApiUser};
