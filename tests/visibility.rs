use std::sync::Arc;

use quick_panel::focus::UnsupportedFocus;
use quick_panel::hotkey::HotkeyTrigger;
use quick_panel::panel::{PanelController, PanelPlacement};
use quick_panel::visibility::handle_hotkey_trigger;

use mock_window::{MockWindow, RecordingSink};

#[test]
fn trigger_toggles_the_panel_once_per_press() {
    let trigger = HotkeyTrigger::new();
    let panel = PanelController::with_placement(
        MockWindow::default(),
        RecordingSink::default(),
        Arc::new(UnsupportedFocus),
        PanelPlacement::default(),
        true,
    );

    // Latch unset: nothing happens.
    handle_hotkey_trigger(&trigger, &panel);
    assert!(!panel.is_visible());

    trigger.set();
    handle_hotkey_trigger(&trigger, &panel);
    assert!(panel.is_visible());

    // Latch was consumed.
    handle_hotkey_trigger(&trigger, &panel);
    assert!(panel.is_visible());

    trigger.set();
    handle_hotkey_trigger(&trigger, &panel);
    assert!(!panel.is_visible());
}
