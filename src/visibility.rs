use std::sync::Arc;

use crate::hotkey::HotkeyTrigger;
use crate::panel::{EventSink, PanelController, PanelWindow};

/// Toggle the panel when the given hotkey trigger has fired.
pub fn handle_hotkey_trigger<W: PanelWindow, E: EventSink>(
    trigger: &HotkeyTrigger,
    panel: &Arc<PanelController<W, E>>,
) {
    if trigger.take() {
        tracing::debug!(visible = panel.is_visible(), "hotkey toggle");
        panel.toggle();
    }
}
