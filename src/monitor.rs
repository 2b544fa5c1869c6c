use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::focus::FocusAdapter;

/// Default sampling interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Background sampler that fires a callback on the first focused ->
/// unfocused transition it observes.
///
/// `start` and `stop` are idempotent and safe to call concurrently from the
/// hotkey path and the focus-lost callback path. Each session gets a fresh
/// stop token, so a stop/start/stop sequence can never cancel a later
/// session with a stale token. The monitor never stops itself on a callback;
/// the owner decides (in practice `PanelController::hide` stops it first).
pub struct FocusMonitor {
    adapter: Arc<dyn FocusAdapter>,
    on_focus_lost: Arc<dyn Fn() + Send + Sync>,
    interval: Duration,
    // Stop token of the running session, if any.
    session: Mutex<Option<Arc<AtomicBool>>>,
}

impl FocusMonitor {
    pub fn new<F>(adapter: Arc<dyn FocusAdapter>, on_focus_lost: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_interval(adapter, on_focus_lost, POLL_INTERVAL)
    }

    /// Same as [`FocusMonitor::new`] with a custom sampling interval.
    pub fn with_interval<F>(
        adapter: Arc<dyn FocusAdapter>,
        on_focus_lost: F,
        interval: Duration,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            adapter,
            on_focus_lost: Arc::new(on_focus_lost),
            interval,
            session: Mutex::new(None),
        }
    }

    /// Begin sampling. A no-op while already running: restarting would
    /// discard the "had focus" baseline and could miss or duplicate an edge.
    pub fn start(&self) {
        if !self.adapter.supported() {
            tracing::debug!("focus monitoring unavailable on this platform");
            return;
        }

        let mut session = self.session.lock().unwrap();
        if session.is_some() {
            return;
        }

        let stop = Arc::new(AtomicBool::new(false));
        *session = Some(Arc::clone(&stop));

        let adapter = Arc::clone(&self.adapter);
        let on_focus_lost = Arc::clone(&self.on_focus_lost);
        let interval = self.interval;
        thread::spawn(move || {
            tracing::debug!("focus monitor session started");
            let mut had_focus = false;
            loop {
                thread::sleep(interval);
                if stop.load(Ordering::SeqCst) {
                    break;
                }
                let has_focus = adapter.is_foreground();
                if had_focus && !has_focus {
                    tracing::debug!("focus lost");
                    on_focus_lost();
                }
                had_focus = has_focus;
            }
            tracing::debug!("focus monitor session ended");
        });
    }

    /// Terminate the current sampling session. A no-op when not running.
    pub fn stop(&self) {
        let mut session = self.session.lock().unwrap();
        if let Some(stop) = session.take() {
            stop.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_running(&self) -> bool {
        self.session.lock().unwrap().is_some()
    }
}
