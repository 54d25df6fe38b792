//! Replies returned to the UI.

use serde::{Deserialize, Serialize};

/// Result of a single dispatched command.
///
/// Every call produces exactly one of these. Failures of the underlying
/// services are folded into the value, so nothing here is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    /// Reply to `getInitialLink`. `None` means no link was pending.
    InitialLink(Option<String>),

    /// Reply to `setCallMode` / `setDefaultMode`.
    AudioRoute {
        /// False when the audio service could not apply the route.
        applied: bool,
    },

    /// The method name is not one the bridge implements.
    NotImplemented,
}

impl CommandResult {
    /// Returns true for the "not implemented" reply.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Returns the value carried back to the UI.
    ///
    /// `NotImplemented` has no value and yields `None`; an absent link is
    /// a successful `Some(Value::Null)`.
    pub fn to_value(&self) -> Option<serde_json::Value> {
        match self {
            Self::InitialLink(Some(uri)) => Some(serde_json::Value::String(uri.clone())),
            Self::InitialLink(None) => Some(serde_json::Value::Null),
            Self::AudioRoute { applied } => Some(serde_json::Value::Bool(*applied)),
            Self::NotImplemented => None,
        }
    }
}
