//! In-memory audio service.
//!
//! Stands in for the OS service in tests and in hosts without one. Lets
//! callers simulate an unavailable service or a failing speaker switch.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::service::{AudioMode, AudioService};
use crate::{AudioError, AudioResult};

/// Fake audio service backed by plain fields.
#[derive(Debug)]
pub struct MockAudioService {
    mode: Mutex<AudioMode>,
    speakerphone: AtomicBool,
    available: AtomicBool,
    fail_speakerphone: AtomicBool,
    mutations: AtomicU64,
}

impl MockAudioService {
    /// Create an available service in normal mode with the speaker on.
    pub fn new() -> Self {
        Self {
            mode: Mutex::new(AudioMode::Normal),
            speakerphone: AtomicBool::new(true),
            available: AtomicBool::new(true),
            fail_speakerphone: AtomicBool::new(false),
            mutations: AtomicU64::new(0),
        }
    }

    /// Create a service that fails every call.
    pub fn unavailable() -> Self {
        let service = Self::new();
        service.set_available(false);
        service
    }

    /// Create a service starting from the given OS state.
    pub fn with_state(mode: AudioMode, speakerphone: bool) -> Self {
        let service = Self::new();
        *service.mode.lock() = mode;
        service.speakerphone.store(speakerphone, Ordering::SeqCst);
        service
    }

    /// Make the service reachable or unreachable.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make speakerphone changes fail while mode changes still succeed.
    pub fn fail_speakerphone(&self, fail: bool) {
        self.fail_speakerphone.store(fail, Ordering::SeqCst);
    }

    /// Current mode, bypassing availability.
    pub fn current_mode(&self) -> AudioMode {
        *self.mode.lock()
    }

    /// Current speaker state, bypassing availability.
    pub fn speakerphone(&self) -> bool {
        self.speakerphone.load(Ordering::SeqCst)
    }

    /// Number of successful set calls.
    pub fn mutation_count(&self) -> u64 {
        self.mutations.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> AudioResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AudioError::ServiceUnavailable)
        }
    }
}

impl Default for MockAudioService {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioService for MockAudioService {
    fn mode(&self) -> AudioResult<AudioMode> {
        self.check_available()?;
        Ok(*self.mode.lock())
    }

    fn set_mode(&self, mode: AudioMode) -> AudioResult<()> {
        self.check_available()?;
        *self.mode.lock() = mode;
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn is_speakerphone_on(&self) -> AudioResult<bool> {
        self.check_available()?;
        Ok(self.speakerphone.load(Ordering::SeqCst))
    }

    fn set_speakerphone_on(&self, on: bool) -> AudioResult<()> {
        self.check_available()?;
        if self.fail_speakerphone.load(Ordering::SeqCst) {
            return Err(AudioError::Rejected("speakerphone switch refused".into()));
        }
        self.speakerphone.store(on, Ordering::SeqCst);
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
