mod aggregator;
mod http;

pub use aggregator::PullRequestAggregator;
pub use http::HttpClient;
