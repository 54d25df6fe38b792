//! The bridge between OS events and the UI.

use std::sync::{Arc, Weak};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use hostbridge_audio::{AudioRouteController, AudioService};
use hostbridge_ipc::{AudioRouteState, BridgeCommand, BridgeEvent, CommandResult, PendingCall};
use hostbridge_link::{LinkCaptureStore, LinkSummary};

use crate::config::BridgeConfig;
use crate::host::HostPlatform;

/// The UI side as seen by the bridge.
#[derive(Debug)]
struct Listener {
    /// Where pushed events go. `None` after teardown.
    event_tx: Option<Sender<BridgeEvent>>,

    /// Set once the UI has fetched its initial link.
    ui_started: bool,
}

/// Routes UI commands to the link store and the audio controller, and
/// pushes links that arrive while the UI is running.
///
/// Every method takes `&self` and may be called from any thread. The
/// listener lock is held across every pull-or-push decision, so a link
/// is either in the slot before the UI takes it or pushed afterwards.
pub struct Bridge {
    config: BridgeConfig,
    links: LinkCaptureStore,
    audio: AudioRouteController,
    listener: Mutex<Listener>,
}

impl Bridge {
    /// Create a bridge pushing events to `event_tx`.
    pub fn new(
        config: BridgeConfig,
        audio: Arc<dyn AudioService>,
        event_tx: Sender<BridgeEvent>,
    ) -> Self {
        Self {
            config,
            links: LinkCaptureStore::new(),
            audio: AudioRouteController::new(audio),
            listener: Mutex::new(Listener {
                event_tx: Some(event_tx),
                ui_started: false,
            }),
        }
    }

    /// Capture the launch link and subscribe to later ones.
    ///
    /// The host keeps only a weak reference, so dropping the last `Arc`
    /// stops delivery.
    #[instrument(name = "install_bridge", skip_all, fields(channel = %self.config.channel_name))]
    pub fn install(self: &Arc<Self>, host: &dyn HostPlatform) {
        if let Some(uri) = host.current_launch_uri() {
            info!(link = %LinkSummary::of(&uri), "Launched with link");
            self.capture(uri);
        }

        let bridge: Weak<Bridge> = Arc::downgrade(self);
        host.on_new_uri(Box::new(move |uri| match bridge.upgrade() {
            Some(bridge) => bridge.handle_new_uri(uri),
            None => debug!("Bridge dropped, ignoring link"),
        }));
    }

    /// Name of the channel this bridge serves.
    pub fn channel_name(&self) -> &str {
        &self.config.channel_name
    }

    /// Route a link the OS delivered after launch.
    ///
    /// Once the UI is running the link is pushed as `onDeepLink`.
    /// Before that, or if the listener has gone away, it is kept for
    /// `getInitialLink`.
    pub fn handle_new_uri(&self, uri: String) {
        let listener = self.listener.lock();

        let uri = match (listener.ui_started, listener.event_tx.as_ref()) {
            (true, Some(event_tx)) => match push_link(event_tx, uri) {
                Ok(()) => return,
                Err(TrySendError::Full(event)) => {
                    warn!(event = event.method(), "Event channel full, dropping link");
                    return;
                }
                Err(TrySendError::Disconnected(BridgeEvent::DeepLink { uri })) => {
                    debug!("UI listener gone, keeping link");
                    uri
                }
            },
            _ => uri,
        };

        if self.config.buffer_links_before_ready {
            self.capture(uri);
        } else {
            debug!(link = %LinkSummary::of(&uri), "UI not started, dropping link");
        }
    }

    /// Store a link for the next `getInitialLink`.
    pub fn capture(&self, uri: impl Into<String>) {
        self.links.capture(uri);
    }

    /// Take the pending link, if any.
    pub fn take_initial_link(&self) -> Option<String> {
        self.links.take_initial_link()
    }

    /// Push a link to the UI without touching the pending slot.
    ///
    /// Returns false if no listener is attached or the event could not
    /// be queued. The link is not retried.
    pub fn emit_if_running(&self, uri: impl Into<String>) -> bool {
        let uri = uri.into();
        let listener = self.listener.lock();

        let Some(event_tx) = listener.event_tx.as_ref() else {
            debug!(link = %LinkSummary::of(&uri), "No UI listener attached, dropping link");
            return false;
        };

        match push_link(event_tx, uri) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send event: {}", e);
                false
            }
        }
    }

    /// Mark the UI as started without it fetching the initial link.
    pub fn mark_ui_ready(&self) {
        self.listener.lock().ui_started = true;
    }

    /// Returns true once the UI has started and a listener is attached.
    pub fn is_ui_running(&self) -> bool {
        let listener = self.listener.lock();
        listener.ui_started && listener.event_tx.is_some()
    }

    /// Current audio route, or `None` if the audio service is unavailable.
    pub fn audio_route(&self) -> Option<AudioRouteState> {
        self.audio.current_state().ok()
    }

    /// Handle a named method call from the UI.
    ///
    /// Unknown names yield [`CommandResult::NotImplemented`].
    pub fn dispatch(&self, method: &str, payload: Option<&serde_json::Value>) -> CommandResult {
        match BridgeCommand::from_method(method) {
            Some(command) => {
                debug!(method, has_payload = payload.is_some(), "Handling method call");
                self.dispatch_command(command)
            }
            None => {
                debug!(method, "Method not implemented");
                CommandResult::NotImplemented
            }
        }
    }

    /// Handle a resolved command.
    pub fn dispatch_command(&self, command: BridgeCommand) -> CommandResult {
        match command {
            BridgeCommand::GetInitialLink => {
                let mut listener = self.listener.lock();
                let link = self.take_initial_link();
                listener.ui_started = true;
                CommandResult::InitialLink(link)
            }
            BridgeCommand::SetCallMode => CommandResult::AudioRoute {
                applied: self.audio.set_call_mode(),
            },
            BridgeCommand::SetDefaultMode => CommandResult::AudioRoute {
                applied: self.audio.set_default_mode(),
            },
        }
    }

    /// Answer method calls until every sender is dropped (blocking).
    #[instrument(name = "bridge_serve", skip_all, fields(channel = %self.config.channel_name))]
    pub fn serve(&self, calls: Receiver<PendingCall>) {
        info!("Method channel open");

        for pending in calls.iter() {
            let result = self.dispatch(&pending.call.method, pending.call.arguments.as_ref());
            if pending.reply.send(result).is_err() {
                debug!(method = %pending.call.method, "Caller went away before reply");
            }
        }

        info!("Method channel disconnected");
    }

    /// Detach the UI listener. Links arriving afterwards are captured
    /// for the next UI instance.
    pub fn teardown(&self) {
        let mut listener = self.listener.lock();
        listener.event_tx = None;
        listener.ui_started = false;
        info!("UI listener detached");
    }

    /// Attach the listener of a new UI instance.
    pub fn attach(&self, event_tx: Sender<BridgeEvent>) {
        let mut listener = self.listener.lock();
        listener.event_tx = Some(event_tx);
        listener.ui_started = false;
        info!("UI listener attached");
    }
}

fn push_link(event_tx: &Sender<BridgeEvent>, uri: String) -> Result<(), TrySendError<BridgeEvent>> {
    let summary = LinkSummary::of(&uri);
    event_tx.try_send(BridgeEvent::DeepLink { uri })?;
    debug!(link = %summary, "Emitted onDeepLink");
    Ok(())
}
