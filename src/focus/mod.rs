use std::sync::Arc;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
pub use self::windows::WindowsFocus;

mod unsupported;
pub use self::unsupported::UnsupportedFocus;

/// Platform capability behind the panel's focus handling.
///
/// `is_foreground` answers "does a window of this process currently hold OS
/// foreground status" and is sampled fresh on every call. `activate_once`
/// runs a single pass of the platform's raise-to-foreground sequence; the
/// retry policy lives in [`crate::activator::ForegroundActivator`].
pub trait FocusAdapter: Send + Sync + 'static {
    fn is_foreground(&self) -> bool;

    fn activate_once(&self);

    /// `false` when the platform forbids focus control by design (e.g.
    /// Wayland). Callers treat that as a documented limitation, not an error.
    fn supported(&self) -> bool {
        true
    }
}

/// Select the focus backend for the running platform.
#[cfg(target_os = "windows")]
pub fn platform_adapter() -> Arc<dyn FocusAdapter> {
    Arc::new(WindowsFocus::new())
}

#[cfg(not(target_os = "windows"))]
pub fn platform_adapter() -> Arc<dyn FocusAdapter> {
    Arc::new(UnsupportedFocus)
}
