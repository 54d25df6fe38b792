//! Command dispatcher for the host bridge.
//!
//! This crate ties the link store and the audio route controller to the
//! UI-facing method channel, and owns the bridge lifecycle.

mod bridge;
mod config;
mod host;

pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use host::{HostPlatform, UriCallback};

use std::sync::Arc;

use crossbeam_channel::Sender;

use hostbridge_audio::AudioService;
use hostbridge_ipc::BridgeEvent;

/// Create a bridge and install it on a host.
pub fn create_bridge(
    config: BridgeConfig,
    host: &dyn HostPlatform,
    audio: Arc<dyn AudioService>,
    event_tx: Sender<BridgeEvent>,
) -> Arc<Bridge> {
    let bridge = Arc::new(Bridge::new(config, audio, event_tx));
    bridge.install(host);
    bridge
}
