//! Commands sent from the UI to the host bridge.

use serde::{Deserialize, Serialize};

/// Commands that the UI can send to the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeCommand {
    /// Fetch (and consume) the link the process was launched with.
    GetInitialLink,

    /// Route audio for a voice call.
    SetCallMode,

    /// Restore normal audio routing.
    SetDefaultMode,
}

impl BridgeCommand {
    /// All commands the bridge understands.
    pub const ALL: [BridgeCommand; 3] = [
        Self::GetInitialLink,
        Self::SetCallMode,
        Self::SetDefaultMode,
    ];

    /// Resolves a method name received on the channel.
    ///
    /// Returns `None` for names the bridge does not implement.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "getInitialLink" => Some(Self::GetInitialLink),
            "setCallMode" => Some(Self::SetCallMode),
            "setDefaultMode" => Some(Self::SetDefaultMode),
            _ => None,
        }
    }

    /// Returns the method name used on the wire.
    pub fn method(self) -> &'static str {
        match self {
            Self::GetInitialLink => "getInitialLink",
            Self::SetCallMode => "setCallMode",
            Self::SetDefaultMode => "setDefaultMode",
        }
    }
}

/// A raw method invocation as it arrives from the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name, e.g. `getInitialLink`.
    pub method: String,

    /// Optional arguments. None of the current commands read them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl MethodCall {
    /// Create a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Create a call carrying arguments.
    pub fn with_arguments(method: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            arguments: Some(arguments),
        }
    }
}
