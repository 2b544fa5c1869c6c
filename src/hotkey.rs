use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::win_util::virtual_key_from_string;

/// A global modifier+key combination, e.g. `Ctrl+Space`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotkey {
    /// Canonical upper-case key name, valid per
    /// [`virtual_key_from_string`].
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub win: bool,
}

impl Default for Hotkey {
    fn default() -> Self {
        Self {
            key: "SPACE".to_string(),
            ctrl: true,
            shift: false,
            alt: false,
            win: false,
        }
    }
}

impl std::fmt::Display for Hotkey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.win {
            write!(f, "Win+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parse a hotkey string like "Ctrl+Shift+Space" into a [`Hotkey`].
/// Returns `None` when the key name is unknown or missing.
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut win = false;
    let mut key: Option<String> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "WIN" | "SUPER" => win = true,
            "" => {}
            _ => {
                virtual_key_from_string(&upper)?;
                key = Some(upper);
            }
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        shift,
        alt,
        win,
    })
}

/// Latch set by the hotkey thread and drained by the controller side.
#[derive(Default)]
pub struct HotkeyTrigger {
    fired: AtomicBool,
}

impl HotkeyTrigger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set(&self) {
        self.fired.store(true, Ordering::SeqCst);
    }

    /// Consume the latch, returning whether it was set.
    pub fn take(&self) -> bool {
        self.fired.swap(false, Ordering::SeqCst)
    }
}

/// Registers one global hotkey and waits for its key-down events on a
/// dedicated thread for the process lifetime. `RegisterHotKey` delivers
/// `WM_HOTKEY` only to the message queue of the registering thread, so
/// registration and the blocking wait loop must share that thread.
pub struct HotkeyListener {
    trigger: Arc<HotkeyTrigger>,
    #[cfg(target_os = "windows")]
    thread: Option<backend::ListenerThread>,
}

impl HotkeyListener {
    /// Register `hotkey` globally and start listening. Registration failure
    /// is logged and leaves the trigger permanently unset; the application
    /// keeps running without hotkey support.
    pub fn start(hotkey: Hotkey) -> Self {
        let trigger = HotkeyTrigger::new();
        tracing::info!(hotkey = %hotkey, "starting global hotkey listener");

        #[cfg(target_os = "windows")]
        {
            let thread = backend::spawn(hotkey, Arc::clone(&trigger));
            Self { trigger, thread }
        }

        #[cfg(not(target_os = "windows"))]
        {
            let _ = hotkey;
            tracing::debug!("global hotkeys not supported on this platform");
            Self { trigger }
        }
    }

    pub fn trigger(&self) -> Arc<HotkeyTrigger> {
        Arc::clone(&self.trigger)
    }

    /// Unregister the hotkey and stop the listener thread. Failure to
    /// unregister is logged, not fatal; process exit releases it anyway.
    pub fn shutdown(&mut self) {
        #[cfg(target_os = "windows")]
        if let Some(thread) = self.thread.take() {
            thread.stop();
        }
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(target_os = "windows")]
mod backend {
    use std::sync::Arc;
    use std::thread::JoinHandle;
    use std::time::Duration;

    use windows::Win32::Foundation::{LPARAM, WPARAM};
    use windows::Win32::System::Threading::GetCurrentThreadId;
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_SHIFT,
        MOD_WIN,
    };
    use windows::Win32::UI::WindowsAndMessaging::{
        GetMessageW, PeekMessageW, PostThreadMessageW, MSG, PM_NOREMOVE, WM_HOTKEY, WM_QUIT,
    };

    use super::{Hotkey, HotkeyTrigger};
    use crate::win_util::virtual_key_from_string;

    const HOTKEY_ID: i32 = 1;

    pub struct ListenerThread {
        thread_id: u32,
        join: JoinHandle<()>,
    }

    impl ListenerThread {
        pub fn stop(self) {
            unsafe {
                let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
            }
            let _ = self.join.join();
        }
    }

    fn modifiers(hotkey: &Hotkey) -> HOT_KEY_MODIFIERS {
        let mut mods = HOT_KEY_MODIFIERS(0);
        if hotkey.ctrl {
            mods |= MOD_CONTROL;
        }
        if hotkey.shift {
            mods |= MOD_SHIFT;
        }
        if hotkey.alt {
            mods |= MOD_ALT;
        }
        if hotkey.win {
            mods |= MOD_WIN;
        }
        mods
    }

    pub fn spawn(hotkey: Hotkey, trigger: Arc<HotkeyTrigger>) -> Option<ListenerThread> {
        let Some(vk) = virtual_key_from_string(&hotkey.key) else {
            tracing::error!(hotkey = %hotkey, "no virtual key code for hotkey");
            return None;
        };
        let mods = modifiers(&hotkey);

        let (ready_tx, ready_rx) = std::sync::mpsc::sync_channel::<Option<u32>>(1);

        let join = std::thread::spawn(move || {
            let mut msg = MSG::default();
            // Force creation of this thread's message queue before anyone
            // can post to it.
            unsafe {
                let _ = PeekMessageW(&mut msg, None, 0, 0, PM_NOREMOVE);
            }
            let thread_id = unsafe { GetCurrentThreadId() };

            if unsafe { RegisterHotKey(None, HOTKEY_ID, mods, vk) }.is_err() {
                tracing::error!(hotkey = %hotkey, "failed to register global hotkey");
                let _ = ready_tx.send(None);
                return;
            }
            tracing::info!(hotkey = %hotkey, "registered global hotkey");
            let _ = ready_tx.send(Some(thread_id));

            loop {
                let r = unsafe { GetMessageW(&mut msg, None, 0, 0) };
                if r.0 <= 0 {
                    break;
                }
                if msg.message == WM_HOTKEY && msg.wParam.0 == HOTKEY_ID as usize {
                    tracing::debug!("hotkey pressed");
                    trigger.set();
                }
            }

            if unsafe { UnregisterHotKey(None, HOTKEY_ID) }.is_err() {
                tracing::warn!("failed to unregister global hotkey");
            }
        });

        match ready_rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Some(thread_id)) => Some(ListenerThread { thread_id, join }),
            Ok(None) => {
                let _ = join.join();
                None
            }
            Err(_) => {
                tracing::error!("hotkey listener thread did not signal readiness");
                None
            }
        }
    }
}
