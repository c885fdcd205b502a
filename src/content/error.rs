use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Error building HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("Error sending content query")]
    Transport(#[from] reqwest::Error),

    #[error("Content API responded with status {0}")]
    Status(StatusCode),

    #[error("Error decoding content API response")]
    Decode(#[from] serde_json::Error),

    #[error("Content source unavailable: {0}")]
    Unavailable(String),

    #[error("Content query task failed")]
    Task(#[from] tokio::task::JoinError),
}
