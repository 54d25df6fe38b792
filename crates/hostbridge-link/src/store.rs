//! The single pending-link slot.

use parking_lot::Mutex;
use tracing::{debug, instrument};

use crate::summary::LinkSummary;

/// Holds the link the process was launched or resumed with until the UI
/// takes it.
///
/// Only one link is tracked. A second capture before the first is taken
/// replaces it.
#[derive(Debug, Default)]
pub struct LinkCaptureStore {
    pending: Mutex<Option<String>>,
}

impl LinkCaptureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a link, replacing any that has not been taken yet.
    #[instrument(name = "capture_link", skip_all)]
    pub fn capture(&self, uri: impl Into<String>) {
        let uri = uri.into();
        let summary = LinkSummary::of(&uri);

        let replaced = self.pending.lock().replace(uri);
        if replaced.is_some() {
            debug!(link = %summary, "Replaced unconsumed pending link");
        } else {
            debug!(link = %summary, "Captured pending link");
        }
    }

    /// Return the pending link and clear the slot.
    ///
    /// Later calls return `None` until the next capture.
    pub fn take_initial_link(&self) -> Option<String> {
        let taken = self.pending.lock().take();
        debug!(found = taken.is_some(), "Initial link requested");
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_take_is_exactly_once() {
        let store = LinkCaptureStore::new();
        store.capture("https://maya.ravan.ai/x");

        assert_eq!(
            store.take_initial_link().as_deref(),
            Some("https://maya.ravan.ai/x")
        );
        assert_eq!(store.take_initial_link(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let store = LinkCaptureStore::new();
        store.capture("https://maya.ravan.ai/a");
        store.capture("https://maya.ravan.ai/b");

        assert_eq!(
            store.take_initial_link().as_deref(),
            Some("https://maya.ravan.ai/b")
        );
        assert_eq!(store.take_initial_link(), None);
    }

    #[test]
    fn test_take_before_capture_is_none() {
        let store = LinkCaptureStore::new();
        assert_eq!(store.take_initial_link(), None);

        // No retroactive delivery: the capture is only seen by later takes.
        store.capture("https://maya.ravan.ai/late");
        assert_eq!(
            store.take_initial_link().as_deref(),
            Some("https://maya.ravan.ai/late")
        );
    }

    #[test]
    fn test_unparsable_link_is_still_stored() {
        let store = LinkCaptureStore::new();
        store.capture("not a link");
        assert_eq!(store.take_initial_link().as_deref(), Some("not a link"));
    }

    #[test]
    fn test_concurrent_takers_get_one_link() {
        let store = Arc::new(LinkCaptureStore::new());
        store.capture("https://maya.ravan.ai/x");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.take_initial_link())
            })
            .collect();

        let delivered = handles
            .into_iter()
            .filter_map(|handle| handle.join().unwrap())
            .count();
        assert_eq!(delivered, 1);
    }
}
