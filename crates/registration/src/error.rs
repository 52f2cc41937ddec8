//! Sign-up submission errors.

use thiserror::Error;

/// Why a sign-up submission failed. Carries only a message fit to show
/// the user; the underlying transport error is logged, not kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The users service answered with an error response.
    #[error("{0}")]
    Rejected(String),

    /// No usable response (connection failure, undecodable reply).
    #[error("{0}")]
    Failed(String),
}

impl SubmissionError {
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::Rejected(message) | SubmissionError::Failed(message) => message,
        }
    }
}
