//! Audio route state.

use serde::{Deserialize, Serialize};

/// The two audio routes the UI can select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioRouteState {
    /// Normal routing with the speakerphone enabled.
    #[default]
    DefaultMode,

    /// In-communication routing with the speakerphone disabled.
    CallMode,
}

impl AudioRouteState {
    /// Whether the speakerphone output is enabled in this route.
    pub fn speakerphone(self) -> bool {
        match self {
            Self::DefaultMode => true,
            Self::CallMode => false,
        }
    }

    /// Returns a simple string representation of the state.
    pub fn name(self) -> &'static str {
        match self {
            Self::DefaultMode => "DefaultMode",
            Self::CallMode => "CallMode",
        }
    }
}
