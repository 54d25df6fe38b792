//! Pending deep-link capture.
//!
//! Holds at most one link delivered at launch and hands it out exactly
//! once to whoever asks first.

mod store;
mod summary;

pub use store::LinkCaptureStore;
pub use summary::LinkSummary;
