//! The OS audio capability.

use serde::{Deserialize, Serialize};

use crate::AudioResult;

/// Audio routing modes reported by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioMode {
    /// Regular media playback.
    #[default]
    Normal,

    /// A ringtone is playing.
    Ringtone,

    /// A telephony call is active.
    InCall,

    /// A VoIP or other voice session is active.
    InCommunication,
}

impl AudioMode {
    /// Returns the display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Ringtone => "ringtone",
            Self::InCall => "in-call",
            Self::InCommunication => "in-communication",
        }
    }
}

/// Access to the OS audio subsystem.
///
/// Implementations may block inside the OS call; callers do not add their
/// own timeout.
pub trait AudioService: Send + Sync {
    /// Current routing mode.
    fn mode(&self) -> AudioResult<AudioMode>;

    /// Change the routing mode.
    fn set_mode(&self, mode: AudioMode) -> AudioResult<()>;

    /// Whether the speakerphone output is enabled.
    fn is_speakerphone_on(&self) -> AudioResult<bool>;

    /// Enable or disable the speakerphone output.
    fn set_speakerphone_on(&self, on: bool) -> AudioResult<()>;
}
