use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("scheduler task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Other(String),
}
