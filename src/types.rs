use thiserror::Error;

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("github error: {0}")]
    GitHub(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no GitHub token available (set GH_TOKEN or github_token in config.json)")]
    MissingToken,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("notification channel closed")]
    ChannelClosed,
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
