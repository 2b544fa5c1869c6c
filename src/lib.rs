pub mod activator;
pub mod focus;
pub mod gui;
pub mod hotkey;
pub mod logging;
pub mod monitor;
pub mod panel;
pub mod settings;
pub mod visibility;
pub mod win_util;
