use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod contact;
pub mod sales;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Draft-to-payload conversion failed.
    #[error("Form error: {0}")]
    Form(String),

    /// A call against the remote collection failed. Component state is left
    /// exactly as it was before the call.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result of a submit attempt that completed without a remote failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the submit protocol ran to completion.
    Accepted,
    /// Validation failed; field errors were refreshed and no remote call
    /// was issued.
    Rejected,
}
