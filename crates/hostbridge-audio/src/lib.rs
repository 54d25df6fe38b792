//! Audio route control.
//!
//! This crate switches the OS audio subsystem between the call route and
//! the default route. The OS service is injected through [`AudioService`]
//! so hosts and tests can supply their own.

mod controller;
mod error;
mod mock;
mod service;

pub use controller::AudioRouteController;
pub use error::AudioError;
pub use mock::MockAudioService;
pub use service::{AudioMode, AudioService};

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;
