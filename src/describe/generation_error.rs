use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Response had no choices")]
    EmptyResponse,
}
