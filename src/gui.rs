use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::hotkey::HotkeyTrigger;
use crate::panel::{EventSink, PanelController, PanelWindow, EVENT_PANEL_SHOW_VIEW};
use crate::visibility::handle_hotkey_trigger;

/// Viewport seam so panel window logic can be exercised against a recorded
/// context in tests.
pub trait ViewportCtx: Send + Sync + 'static {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// [`PanelWindow`] over an egui viewport.
pub struct EguiPanelWindow<C: ViewportCtx> {
    ctx: C,
}

impl<C: ViewportCtx> EguiPanelWindow<C> {
    pub fn new(ctx: C) -> Self {
        Self { ctx }
    }
}

impl<C: ViewportCtx> PanelWindow for EguiPanelWindow<C> {
    fn show_window(&self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Visible(true));
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Minimized(false));
        self.ctx.request_repaint();
    }

    fn hide_window(&self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Visible(false));
    }

    fn set_position(&self, x: i32, y: i32) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::OuterPosition(egui::pos2(
                x as f32, y as f32,
            )));
    }

    fn set_size(&self, width: i32, height: i32) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
                width as f32,
                height as f32,
            )));
    }

    fn set_always_on_top(&self, on: bool) {
        let level = if on {
            egui::viewport::WindowLevel::AlwaysOnTop
        } else {
            egui::viewport::WindowLevel::Normal
        };
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
    }
}

/// An emitted panel notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEvent {
    pub name: String,
    pub payload: Option<String>,
}

/// [`EventSink`] that forwards notifications into the UI loop.
pub struct ChannelEventSink {
    tx: Sender<PanelEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: Sender<PanelEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: &str, payload: Option<&str>) {
        tracing::debug!(event, payload, "emitting panel event");
        // Fire and forget: a closed UI loop just drops the event.
        let _ = self.tx.send(PanelEvent {
            name: event.to_string(),
            payload: payload.map(str::to_string),
        });
    }
}

/// Minimal shell around the controller: polls the hotkey latch each frame
/// and routes navigate events to the active view.
pub struct PanelShell {
    panel: Arc<PanelController<EguiPanelWindow<egui::Context>, ChannelEventSink>>,
    trigger: Arc<HotkeyTrigger>,
    events: Receiver<PanelEvent>,
    view: String,
}

impl PanelShell {
    pub fn new(
        panel: Arc<PanelController<EguiPanelWindow<egui::Context>, ChannelEventSink>>,
        trigger: Arc<HotkeyTrigger>,
        events: Receiver<PanelEvent>,
    ) -> Self {
        Self {
            panel,
            trigger,
            events,
            view: "launcher".to_string(),
        }
    }
}

impl eframe::App for PanelShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        handle_hotkey_trigger(&self.trigger, &self.panel);

        while let Ok(event) = self.events.try_recv() {
            if event.name == EVENT_PANEL_SHOW_VIEW {
                if let Some(view) = event.payload {
                    self.view = view;
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(&self.view);
        });

        // Keep polling the latch while the window is hidden.
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}
