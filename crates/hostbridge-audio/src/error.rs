//! Error types for the audio module.

use thiserror::Error;

/// Errors that can occur during audio operations.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The OS audio service could not be reached.
    #[error("Audio service unavailable")]
    ServiceUnavailable,

    /// The OS audio service refused the change.
    #[error("Audio service rejected request: {0}")]
    Rejected(String),
}
