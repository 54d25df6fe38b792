//! Serialized audio route switching.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use hostbridge_ipc::AudioRouteState;

use crate::service::{AudioMode, AudioService};
use crate::AudioResult;

/// Switches the OS audio route between [`AudioRouteState::CallMode`] and
/// [`AudioRouteState::DefaultMode`].
///
/// The route itself lives in the OS; the controller reads it back on every
/// request. All changes go through one lock, so two requests never touch
/// the OS service at the same time.
pub struct AudioRouteController {
    service: Arc<dyn AudioService>,
    route_lock: Mutex<()>,
}

impl AudioRouteController {
    /// Create a controller over the given service.
    pub fn new(service: Arc<dyn AudioService>) -> Self {
        Self {
            service,
            route_lock: Mutex::new(()),
        }
    }

    /// Route state derived from the current OS mode.
    pub fn current_state(&self) -> AudioResult<AudioRouteState> {
        let _guard = self.route_lock.lock();
        Ok(state_for_mode(self.service.mode()?))
    }

    /// Switch to the call route.
    pub fn set_call_mode(&self) -> bool {
        self.apply(AudioRouteState::CallMode)
    }

    /// Switch to the default route.
    pub fn set_default_mode(&self) -> bool {
        self.apply(AudioRouteState::DefaultMode)
    }

    /// Apply a route. Returns false if the OS service failed, in which
    /// case the route is left as it was.
    #[instrument(name = "apply_audio_route", skip_all, fields(target = target.name()))]
    pub fn apply(&self, target: AudioRouteState) -> bool {
        let _guard = self.route_lock.lock();

        match self.try_apply(target) {
            Ok(true) => {
                info!("Audio route switched");
                true
            }
            Ok(false) => {
                debug!("Audio route already applied");
                true
            }
            Err(e) => {
                warn!("Audio route change failed: {}", e);
                false
            }
        }
    }

    /// Returns whether the OS state was changed.
    fn try_apply(&self, target: AudioRouteState) -> AudioResult<bool> {
        let previous_mode = self.service.mode()?;
        let speakerphone = self.service.is_speakerphone_on()?;

        let target_mode = mode_for_state(target);
        if previous_mode == target_mode && speakerphone == target.speakerphone() {
            return Ok(false);
        }

        debug!(
            from = previous_mode.name(),
            to = target_mode.name(),
            speakerphone = target.speakerphone(),
            "Setting audio mode"
        );
        self.service.set_mode(target_mode)?;

        if let Err(e) = self.service.set_speakerphone_on(target.speakerphone()) {
            if let Err(rollback) = self.service.set_mode(previous_mode) {
                warn!("Failed to restore audio mode {}: {}", previous_mode.name(), rollback);
            }
            return Err(e);
        }

        Ok(true)
    }
}

/// OS mode a route requires.
fn mode_for_state(state: AudioRouteState) -> AudioMode {
    match state {
        AudioRouteState::CallMode => AudioMode::InCommunication,
        AudioRouteState::DefaultMode => AudioMode::Normal,
    }
}

fn state_for_mode(mode: AudioMode) -> AudioRouteState {
    match mode {
        AudioMode::InCommunication => AudioRouteState::CallMode,
        AudioMode::Normal | AudioMode::Ringtone | AudioMode::InCall => {
            AudioRouteState::DefaultMode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockAudioService;
    use std::thread;

    fn controller_with(service: &Arc<MockAudioService>) -> AudioRouteController {
        AudioRouteController::new(Arc::clone(service) as Arc<dyn AudioService>)
    }

    #[test]
    fn test_initial_state_is_default() {
        let service = Arc::new(MockAudioService::new());
        let controller = controller_with(&service);
        assert_eq!(
            controller.current_state().unwrap(),
            AudioRouteState::DefaultMode
        );
    }

    #[test]
    fn test_call_mode_sets_communication_and_disables_speaker() {
        let service = Arc::new(MockAudioService::new());
        let controller = controller_with(&service);

        assert!(controller.set_call_mode());
        assert_eq!(service.current_mode(), AudioMode::InCommunication);
        assert!(!service.speakerphone());
        assert_eq!(controller.current_state().unwrap(), AudioRouteState::CallMode);
    }

    #[test]
    fn test_default_mode_restores_normal_and_enables_speaker() {
        let service = Arc::new(MockAudioService::new());
        let controller = controller_with(&service);

        assert!(controller.set_call_mode());
        assert!(controller.set_default_mode());
        assert_eq!(service.current_mode(), AudioMode::Normal);
        assert!(service.speakerphone());
    }

    #[test]
    fn test_repeated_call_mode_is_noop_success() {
        let service = Arc::new(MockAudioService::new());
        let controller = controller_with(&service);

        assert!(controller.set_call_mode());
        let mutations = service.mutation_count();

        assert!(controller.set_call_mode());
        assert_eq!(service.mutation_count(), mutations);
        assert_eq!(controller.current_state().unwrap(), AudioRouteState::CallMode);
    }

    #[test]
    fn test_unavailable_service_reports_false() {
        let service = Arc::new(MockAudioService::unavailable());
        let controller = controller_with(&service);

        assert!(!controller.set_call_mode());
        assert!(!controller.set_default_mode());
        assert!(controller.current_state().is_err());
    }

    #[test]
    fn test_speaker_failure_rolls_back_mode() {
        let service = Arc::new(MockAudioService::new());
        service.fail_speakerphone(true);
        let controller = controller_with(&service);

        assert!(!controller.set_call_mode());
        assert_eq!(service.current_mode(), AudioMode::Normal);
        assert!(service.speakerphone());
    }

    #[test]
    fn test_recovers_after_service_returns() {
        let service = Arc::new(MockAudioService::unavailable());
        let controller = controller_with(&service);

        assert!(!controller.set_call_mode());
        service.set_available(true);
        assert!(controller.set_call_mode());
    }

    #[test]
    fn test_mismatched_speaker_is_corrected() {
        let service = Arc::new(MockAudioService::with_state(AudioMode::Normal, false));
        let controller = controller_with(&service);

        assert!(controller.set_default_mode());
        assert!(service.speakerphone());
    }

    #[test]
    fn test_concurrent_requests_leave_consistent_route() {
        let service = Arc::new(MockAudioService::new());
        let controller = Arc::new(controller_with(&service));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let controller = Arc::clone(&controller);
                thread::spawn(move || {
                    if i % 2 == 0 {
                        controller.set_call_mode()
                    } else {
                        controller.set_default_mode()
                    }
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }

        // Mode and speaker always move together.
        let call = service.current_mode() == AudioMode::InCommunication;
        assert_eq!(service.speakerphone(), !call);
    }
}
