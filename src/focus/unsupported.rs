use super::FocusAdapter;

/// Backend for platforms without programmatic focus control.
///
/// Wayland compositors block focus stealing as a security feature and offer
/// no override, and foreground polling for other processes' windows is
/// equally unavailable. The panel still shows and hides normally; the user
/// has to click it to focus it. This is a platform limitation to preserve,
/// not a gap to work around.
pub struct UnsupportedFocus;

impl FocusAdapter for UnsupportedFocus {
    fn is_foreground(&self) -> bool {
        false
    }

    fn activate_once(&self) {}

    fn supported(&self) -> bool {
        false
    }
}
