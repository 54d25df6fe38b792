//! Desktop host: launch link from argv, later links from stdin.

use parking_lot::Mutex;
use tracing::debug;

use hostbridge_engine::{HostPlatform, UriCallback};

/// Host backed by process arguments.
///
/// URL handlers on desktop start the process with the link as its first
/// argument. Links for an already running process are fed in by
/// [`CliHost::deliver`].
pub struct CliHost {
    launch_uri: Option<String>,
    callback: Mutex<Option<UriCallback>>,
}

impl CliHost {
    /// Build from the process arguments (program name already skipped).
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        Self {
            launch_uri: args.next().filter(|arg| !arg.is_empty()),
            callback: Mutex::new(None),
        }
    }

    /// Hand a link to whoever subscribed through [`HostPlatform::on_new_uri`].
    pub fn deliver(&self, uri: String) {
        match self.callback.lock().as_ref() {
            Some(callback) => callback(uri),
            None => debug!("No subscriber for new link"),
        }
    }
}

impl HostPlatform for CliHost {
    fn current_launch_uri(&self) -> Option<String> {
        self.launch_uri.clone()
    }

    fn on_new_uri(&self, callback: UriCallback) {
        *self.callback.lock() = Some(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_argument_is_launch_link() {
        let host = CliHost::from_args(vec!["https://maya.ravan.ai/x".to_string()].into_iter());
        assert_eq!(
            host.current_launch_uri().as_deref(),
            Some("https://maya.ravan.ai/x")
        );
    }

    #[test]
    fn test_no_arguments_means_no_link() {
        let host = CliHost::from_args(std::iter::empty());
        assert_eq!(host.current_launch_uri(), None);
    }

    #[test]
    fn test_deliver_reaches_subscriber() {
        let host = CliHost::from_args(std::iter::empty());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        host.on_new_uri(Box::new(move |uri| sink.lock().push(uri)));
        host.deliver("maya://a".to_string());

        assert_eq!(*seen.lock(), vec!["maya://a".to_string()]);
    }
}
