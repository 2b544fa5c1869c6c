use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::thread;
use std::time::Duration;

use crate::activator::ForegroundActivator;
use crate::focus::FocusAdapter;
use crate::monitor::FocusMonitor;
use crate::settings::Settings;

/// Emitted after the panel became visible and activation was attempted.
pub const EVENT_PANEL_SHOW: &str = "panel:show";
/// Emitted when the panel is hidden.
pub const EVENT_PANEL_HIDE: &str = "panel:hide";
/// Emitted instead of [`EVENT_PANEL_SHOW`] when a caller requested a
/// specific view; the payload carries the view identifier.
pub const EVENT_PANEL_SHOW_VIEW: &str = "panel:show:view";

/// Wait after the window-show request before touching the foreground, so the
/// window manager finishes mapping the window first.
pub const SETTLE_DELAY: Duration = Duration::from_millis(50);
/// Additional wait before starting the focus monitor. Sampling before the
/// window actually holds focus would see an immediate false focus-lost edge
/// and re-hide the panel the instant it opens.
pub const MONITOR_START_DELAY: Duration = Duration::from_millis(100);

/// Best-effort window operations provided by the embedding shell.
pub trait PanelWindow: Send + Sync + 'static {
    fn show_window(&self);
    fn hide_window(&self);
    fn set_position(&self, x: i32, y: i32);
    fn set_size(&self, width: i32, height: i32);
    fn set_always_on_top(&self, on: bool);
}

/// Fire-and-forget notifications toward the presentation layer.
pub trait EventSink: Send + Sync + 'static {
    fn emit(&self, event: &str, payload: Option<&str>);
}

/// Where and how large the panel appears when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPlacement {
    pub pos: (i32, i32),
    pub size: (i32, i32),
}

impl From<&Settings> for PanelPlacement {
    fn from(settings: &Settings) -> Self {
        Self {
            pos: settings.panel_pos,
            size: settings.panel_size,
        }
    }
}

impl Default for PanelPlacement {
    fn default() -> Self {
        PanelPlacement::from(&Settings::default())
    }
}

/// The visibility state machine.
///
/// Owns the single authoritative visibility flag, the focus monitor and the
/// foreground activator, and sequences the show choreography: reveal the
/// window synchronously, then activate and start focus monitoring on a
/// delayed continuation. A generation counter makes stale continuations
/// harmless: hiding the panel during the settle window bumps nothing, but
/// the next show does, and every continuation re-checks both the generation
/// and the visibility flag before acting.
pub struct PanelController<W: PanelWindow, E: EventSink> {
    weak_self: Weak<Self>,
    window: W,
    events: E,
    activator: ForegroundActivator,
    monitor: FocusMonitor,
    placement: PanelPlacement,
    hide_on_focus_loss: bool,
    visible: AtomicBool,
    show_generation: AtomicU64,
}

impl<W: PanelWindow, E: EventSink> PanelController<W, E> {
    pub fn new(window: W, events: E, adapter: Arc<dyn FocusAdapter>) -> Arc<Self> {
        Self::with_placement(window, events, adapter, PanelPlacement::default(), true)
    }

    pub fn with_placement(
        window: W,
        events: E,
        adapter: Arc<dyn FocusAdapter>,
        placement: PanelPlacement,
        hide_on_focus_loss: bool,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let monitor_ref = weak.clone();
            // Guard: a stale sample must not re-hide a panel the user
            // already dismissed through another path.
            let monitor = FocusMonitor::new(adapter.clone(), move || {
                if let Some(panel) = monitor_ref.upgrade() {
                    if panel.is_visible() {
                        panel.hide();
                    }
                }
            });
            Self {
                weak_self: weak.clone(),
                window,
                events,
                activator: ForegroundActivator::new(adapter),
                monitor,
                placement,
                hide_on_focus_loss,
                visible: AtomicBool::new(false),
                show_generation: AtomicU64::new(0),
            }
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_running()
    }

    pub fn toggle(&self) {
        if self.is_visible() {
            self.hide();
        } else {
            self.show();
        }
    }

    /// Reveal the panel and emit [`EVENT_PANEL_SHOW`] once it has settled.
    pub fn show(&self) {
        self.show_inner(None);
    }

    /// Reveal the panel and emit [`EVENT_PANEL_SHOW_VIEW`] with the given
    /// view identifier, for external triggers that want the panel to open on
    /// a specific screen.
    pub fn show_with_view(&self, view: &str) {
        self.show_inner(Some(view.to_string()));
    }

    fn show_inner(&self, view: Option<String>) {
        self.visible.store(true, Ordering::SeqCst);
        let generation = self.show_generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(generation, view = view.as_deref(), "showing panel");

        self.window.set_position(self.placement.pos.0, self.placement.pos.1);
        self.window.set_size(self.placement.size.0, self.placement.size.1);
        self.window.show_window();
        self.window.set_always_on_top(true);

        // With the controller mid-teardown there is nobody left to notify.
        let Some(panel) = self.weak_self.upgrade() else {
            return;
        };
        thread::spawn(move || {
            thread::sleep(SETTLE_DELAY);
            if !panel.session_current(generation) {
                tracing::debug!(generation, "show superseded before activation");
                return;
            }

            panel.activator.activate();
            match view.as_deref() {
                Some(view) => panel.events.emit(EVENT_PANEL_SHOW_VIEW, Some(view)),
                None => panel.events.emit(EVENT_PANEL_SHOW, None),
            }

            // Activation always precedes monitor start within one show.
            thread::sleep(MONITOR_START_DELAY);
            if !panel.session_current(generation) {
                tracing::debug!(generation, "show superseded before monitor start");
                return;
            }
            if panel.hide_on_focus_loss {
                panel.monitor.start();
            }
        });
    }

    /// Hide the panel. Stops the focus monitor before flipping state so a
    /// sample already in flight cannot call back into `hide` again.
    pub fn hide(&self) {
        self.monitor.stop();
        self.visible.store(false, Ordering::SeqCst);
        tracing::debug!("hiding panel");
        self.events.emit(EVENT_PANEL_HIDE, None);
        self.window.hide_window();
    }

    fn session_current(&self, generation: u64) -> bool {
        self.is_visible() && self.show_generation.load(Ordering::SeqCst) == generation
    }
}
