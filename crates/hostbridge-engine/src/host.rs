//! OS integration points the bridge depends on.

/// Callback invoked with each link the OS delivers while running.
pub type UriCallback = Box<dyn Fn(String) + Send + Sync>;

/// Host-side OS integration.
pub trait HostPlatform {
    /// The link the process was launched with, if any.
    fn current_launch_uri(&self) -> Option<String>;

    /// Register for links delivered after launch. The callback may be
    /// called from any thread.
    fn on_new_uri(&self, callback: UriCallback);
}
