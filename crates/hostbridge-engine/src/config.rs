//! Bridge configuration.

use serde::{Deserialize, Serialize};

use hostbridge_ipc::DEEPLINK_CHANNEL;

/// Configuration for a bridge instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Name of the channel the UI binds to.
    pub channel_name: String,

    /// Keep links that arrive before the UI has started so it can fetch
    /// them with `getInitialLink`. When false they are dropped.
    pub buffer_links_before_ready: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEEPLINK_CHANNEL.to_string(),
            buffer_links_before_ready: true,
        }
    }
}

impl BridgeConfig {
    /// Use a different channel name.
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }
}
