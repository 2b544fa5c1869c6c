use eframe::egui;

use quick_panel::focus::platform_adapter;
use quick_panel::gui::{ChannelEventSink, EguiPanelWindow, PanelEvent, PanelShell};
use quick_panel::hotkey::HotkeyListener;
use quick_panel::logging;
use quick_panel::panel::{PanelController, PanelPlacement};
use quick_panel::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::default_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "settings.json".to_string());
    let settings = Settings::load(&settings_path);
    logging::init(settings.debug_logging);

    let mut listener = HotkeyListener::start(settings.hotkey());
    let trigger = listener.trigger();

    let placement = PanelPlacement::from(&settings);
    let hide_on_focus_loss = settings.hide_on_focus_loss;
    let size = settings.panel_size;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size.0 as f32, size.1 as f32])
            .with_decorations(false)
            .with_always_on_top()
            .with_visible(false),
        ..Default::default()
    };

    let result = eframe::run_native(
        "QuickPanel",
        native_options,
        Box::new(move |cc| {
            let (tx, rx) = std::sync::mpsc::channel::<PanelEvent>();
            let window = EguiPanelWindow::new(cc.egui_ctx.clone());
            let panel = PanelController::with_placement(
                window,
                ChannelEventSink::new(tx),
                platform_adapter(),
                placement,
                hide_on_focus_loss,
            );
            Box::new(PanelShell::new(panel, trigger, rx))
        }),
    );
    if let Err(err) = result {
        tracing::error!("gui error: {err}");
    }

    listener.shutdown();
    if let Err(err) = settings.save(&settings_path) {
        tracing::warn!("failed to save settings: {err}");
    }
    Ok(())
}
