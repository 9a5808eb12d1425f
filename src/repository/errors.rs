use thiserror::Error;

/// Failure of a call against the remote collection resource.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
