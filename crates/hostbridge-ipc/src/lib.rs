//! Typed UI<->host messages for the deep-link and audio bridge.
//!
//! This crate defines the message types exchanged between the UI engine
//! and the native host bridge, plus the channels that carry them.

mod channel;
mod commands;
mod error;
mod events;
mod state;
mod types;

pub use channel::{MethodChannelClient, PendingCall};
pub use commands::{BridgeCommand, MethodCall};
pub use error::IpcError;
pub use events::BridgeEvent;
pub use state::AudioRouteState;
pub use types::CommandResult;

use crossbeam_channel::{Receiver, Sender};

/// Name of the channel the UI binds to.
pub const DEEPLINK_CHANNEL: &str = "maya.ravan.ai/deeplink";

/// Channel capacity for method calls (UI → bridge).
pub const METHOD_CHANNEL_CAPACITY: usize = 64;

/// Channel capacity for events (bridge → UI).
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Result type for method channel operations.
pub type IpcResult<T> = Result<T, IpcError>;

/// Creates a bounded method-call channel.
pub fn method_channel() -> (Sender<PendingCall>, Receiver<PendingCall>) {
    crossbeam_channel::bounded(METHOD_CHANNEL_CAPACITY)
}

/// Creates a bounded event channel.
pub fn event_channel() -> (Sender<BridgeEvent>, Receiver<BridgeEvent>) {
    crossbeam_channel::bounded(EVENT_CHANNEL_CAPACITY)
}
