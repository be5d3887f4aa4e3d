//! Submission error types.

use thiserror::Error;

/// Errors that can occur while submitting a registration.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status. The message is the
    /// server's own text and is shown to the user verbatim, so the Display
    /// form carries nothing but the message itself.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request could not be completed at the transport level.
    #[error("request error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// True when resubmitting the same data could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Convenience alias for submission results.
pub type SubmitResult<T> = std::result::Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_the_server_message_verbatim() {
        let err = SubmitError::Rejected {
            status: 422,
            message: "Username is taken".to_string(),
        };
        assert_eq!(err.to_string(), "Username is taken");
    }

    #[test]
    fn test_rejection_is_not_transient() {
        let err = SubmitError::Rejected {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_transient());
    }
}
