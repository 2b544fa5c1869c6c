use eframe::egui;
use quick_panel::gui::EguiPanelWindow;
use quick_panel::panel::PanelWindow;

use mock_ctx::MockCtx;

#[test]
fn show_makes_the_viewport_visible_and_unminimized() {
    let ctx = MockCtx::default();
    let window = EguiPanelWindow::new(ctx.clone());
    window.show_window();

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 2);
    match cmds[0] {
        egui::ViewportCommand::Visible(v) => assert!(v),
        _ => panic!("unexpected command"),
    }
    match cmds[1] {
        egui::ViewportCommand::Minimized(m) => assert!(!m),
        _ => panic!("unexpected command"),
    }
}

#[test]
fn hide_makes_the_viewport_invisible() {
    let ctx = MockCtx::default();
    let window = EguiPanelWindow::new(ctx.clone());
    window.hide_window();

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 1);
    match cmds[0] {
        egui::ViewportCommand::Visible(v) => assert!(!v),
        _ => panic!("unexpected command"),
    }
}

#[test]
fn position_and_size_map_to_viewport_commands() {
    let ctx = MockCtx::default();
    let window = EguiPanelWindow::new(ctx.clone());
    window.set_position(0, 50);
    window.set_size(280, 500);

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 2);
    match cmds[0] {
        egui::ViewportCommand::OuterPosition(pos) => assert_eq!(pos, egui::pos2(0.0, 50.0)),
        _ => panic!("unexpected command"),
    }
    match cmds[1] {
        egui::ViewportCommand::InnerSize(size) => assert_eq!(size, egui::vec2(280.0, 500.0)),
        _ => panic!("unexpected command"),
    }
}

#[test]
fn always_on_top_toggles_the_window_level() {
    let ctx = MockCtx::default();
    let window = EguiPanelWindow::new(ctx.clone());
    window.set_always_on_top(true);
    window.set_always_on_top(false);

    let cmds = ctx.commands.lock().unwrap();
    assert_eq!(cmds.len(), 2);
    match cmds[0] {
        egui::ViewportCommand::WindowLevel(level) => {
            assert_eq!(level, egui::viewport::WindowLevel::AlwaysOnTop)
        }
        _ => panic!("unexpected command"),
    }
    match cmds[1] {
        egui::ViewportCommand::WindowLevel(level) => {
            assert_eq!(level, egui::viewport::WindowLevel::Normal)
        }
        _ => panic!("unexpected command"),
    }
}
