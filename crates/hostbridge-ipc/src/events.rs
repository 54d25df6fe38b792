//! Events pushed from the bridge to the UI.

use serde::{Deserialize, Serialize};

/// Events that the bridge can push to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A link arrived while the UI was already running.
    DeepLink {
        /// The link, exactly as the OS delivered it.
        uri: String,
    },
}

impl BridgeEvent {
    /// Returns the method name the UI listens on.
    pub fn method(&self) -> &'static str {
        match self {
            Self::DeepLink { .. } => "onDeepLink",
        }
    }

    /// Returns the event payload as a wire value.
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Self::DeepLink { uri } => serde_json::Value::String(uri.clone()),
        }
    }
}
