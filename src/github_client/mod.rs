mod api;
mod client;
mod core;
mod helpers;
mod models;
mod source;

pub use client::GithubClient;
pub use helpers::{format_age, resolve_token};
pub use models::{PullRequestStatus, PullRequestSummary};
pub use source::{IssueFilter, PullRequestSource};
