use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::focus::FocusAdapter;

/// Upper bound on raise-to-foreground attempts per activation.
pub const MAX_ATTEMPTS: u32 = 5;
/// Pause between attempts.
pub const RETRY_DELAY: Duration = Duration::from_millis(20);

/// Drives the platform activation sequence with a bounded retry loop.
///
/// Activation is strictly best effort: exhausting the retry budget leaves
/// the panel shown but unfocused, which is accepted silently toward the
/// caller. The foreground lock timeout restore is handled inside the
/// adapter's per-attempt sequence and holds on every exit path.
pub struct ForegroundActivator {
    adapter: Arc<dyn FocusAdapter>,
}

impl ForegroundActivator {
    pub fn new(adapter: Arc<dyn FocusAdapter>) -> Self {
        Self { adapter }
    }

    /// Run up to [`MAX_ATTEMPTS`] activation passes, re-sampling foreground
    /// status after each. Never fails and never panics.
    pub fn activate(&self) {
        if !self.adapter.supported() {
            tracing::debug!("foreground activation unavailable on this platform");
            return;
        }

        for attempt in 1..=MAX_ATTEMPTS {
            self.adapter.activate_once();
            if self.adapter.is_foreground() {
                tracing::debug!(attempt, "foreground acquired");
                return;
            }
            if attempt < MAX_ATTEMPTS {
                thread::sleep(RETRY_DELAY);
            }
        }

        // Not an error: the user can still click the panel to focus it.
        tracing::debug!(
            attempts = MAX_ATTEMPTS,
            "gave up acquiring foreground status"
        );
    }
}
