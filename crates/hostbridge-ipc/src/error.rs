//! Error types for the method channel.

use thiserror::Error;

/// Errors that can occur while talking over the method channel.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The bridge side of the channel is gone.
    #[error("Method channel disconnected")]
    Disconnected,

    /// The bridge dropped the call without replying.
    #[error("No reply for method: {0}")]
    NoReply(String),
}
