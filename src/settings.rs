use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::hotkey::{parse_hotkey, Hotkey};

fn default_panel_pos() -> (i32, i32) {
    // Left edge, small offset from the top.
    (0, 50)
}

fn default_panel_size() -> (i32, i32) {
    (280, 500)
}

fn default_hide_on_focus_loss() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Global hotkey string, e.g. "Ctrl+Space". Falls back to the default
    /// when missing or invalid.
    pub hotkey: Option<String>,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Screen position of the panel when shown.
    #[serde(default = "default_panel_pos")]
    pub panel_pos: (i32, i32),
    /// Panel size in logical pixels.
    #[serde(default = "default_panel_size")]
    pub panel_size: (i32, i32),
    /// Hide the panel automatically when it loses OS focus.
    #[serde(default = "default_hide_on_focus_loss")]
    pub hide_on_focus_loss: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hotkey: None,
            debug_logging: false,
            panel_pos: default_panel_pos(),
            panel_size: default_panel_size(),
            hide_on_focus_loss: default_hide_on_focus_loss(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. Missing, empty or malformed files all
    /// yield defaults; loading never fails, so a corrupted settings file
    /// cannot keep the application from starting.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!("settings file '{path}' is malformed ({err}); using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Settings file location under the user config directory. `None` when
    /// the platform exposes no config directory.
    pub fn default_path() -> Option<PathBuf> {
        let dir = dirs_next::config_dir()?.join("quick_panel");
        Some(dir.join("settings.json"))
    }

    /// The configured hotkey, falling back to Ctrl+Space when the string is
    /// missing or cannot be parsed.
    pub fn hotkey(&self) -> Hotkey {
        if let Some(hotkey) = &self.hotkey {
            match parse_hotkey(hotkey) {
                Some(k) => return k,
                None => {
                    tracing::warn!(
                        "provided hotkey string '{}' is invalid; using default",
                        hotkey
                    );
                }
            }
        }
        Hotkey::default()
    }
}
