use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Could not read response: {0}")]
    Decode(String),
}
