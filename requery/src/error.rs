use std::error::Error as StdError;

use thiserror::Error;

/// Failure produced by a fetch operation.
///
/// Wraps whatever the fetch service reported: a human-readable message plus
/// an optional underlying cause. The machine never raises this
/// synchronously; failures are captured into
/// [`QueryState::Rejected`](requery_core::QueryState) for the consumer to
/// surface, typically by handing it to an error-boundary collaborator at
/// render time.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
    #[source]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl FetchError {
    /// Creates a failure with the given message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        FetchError {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failure wrapping an underlying cause.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        FetchError {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
