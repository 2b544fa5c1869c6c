use super::FocusAdapter;

use std::ffi::c_void;

use windows::Win32::Foundation::{BOOL, FALSE, HWND, LPARAM, TRUE};
use windows::Win32::System::Threading::{AttachThreadInput, GetCurrentProcessId};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    keybd_event, SetFocus, KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, VK_MENU,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AllowSetForegroundWindow, BringWindowToTop, EnumWindows, GetForegroundWindow,
    GetWindowThreadProcessId, IsWindowVisible, SetForegroundWindow, ShowWindow,
    SystemParametersInfoW, ASFW_ANY, SPIF_SENDCHANGE, SPI_GETFOREGROUNDLOCKTIMEOUT,
    SPI_SETFOREGROUNDLOCKTIMEOUT, SW_RESTORE, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

/// Win32 focus backend.
///
/// Windows blocks `SetForegroundWindow` calls from background processes
/// unless the calling process can claim recent user input. A single
/// activation pass therefore injects a harmless Alt tap first, then widens
/// the process-level permission, suspends the foreground lock timeout and
/// raises our top-level window with the input queues of both threads
/// attached. See `activate_once` for the exact order.
pub struct WindowsFocus;

impl WindowsFocus {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsFocus {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores `SPI_SETFOREGROUNDLOCKTIMEOUT` on drop. The lock timeout is a
/// process-wide OS setting; leaving it zeroed would change focus behaviour
/// for every application on the desktop, so restoration must hold on every
/// exit path.
struct ForegroundLockGuard {
    previous: u32,
}

impl ForegroundLockGuard {
    fn disable() -> Self {
        let mut previous = 0u32;
        unsafe {
            let _ = SystemParametersInfoW(
                SPI_GETFOREGROUNDLOCKTIMEOUT,
                0,
                Some(std::ptr::addr_of_mut!(previous).cast::<c_void>()),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            );
            // The new value travels in the pointer argument itself.
            let _ = SystemParametersInfoW(
                SPI_SETFOREGROUNDLOCKTIMEOUT,
                0,
                Some(std::ptr::null_mut()),
                SPIF_SENDCHANGE,
            );
        }
        Self { previous }
    }
}

impl Drop for ForegroundLockGuard {
    fn drop(&mut self) {
        unsafe {
            let _ = SystemParametersInfoW(
                SPI_SETFOREGROUNDLOCKTIMEOUT,
                0,
                Some(self.previous as usize as *mut c_void),
                SPIF_SENDCHANGE,
            );
        }
    }
}

struct EnumState {
    our_pid: u32,
    fg_thread: u32,
    raised: bool,
}

/// `EnumWindows` callback: raise the first visible top-level window owned by
/// this process, attaching our input queue to the current foreground thread
/// so `SetForegroundWindow` is allowed to succeed cross-thread.
unsafe extern "system" fn raise_own_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let state = &mut *(lparam.0 as *mut EnumState);

    let mut pid = 0u32;
    let our_thread = GetWindowThreadProcessId(hwnd, Some(&mut pid));
    if pid != state.our_pid || !IsWindowVisible(hwnd).as_bool() {
        return TRUE;
    }

    let attach = state.fg_thread != 0 && state.fg_thread != our_thread;
    if attach {
        let _ = AttachThreadInput(our_thread, state.fg_thread, TRUE);
    }

    let _ = ShowWindow(hwnd, SW_RESTORE);
    let _ = BringWindowToTop(hwnd);
    let _ = SetForegroundWindow(hwnd);
    let _ = SetFocus(hwnd);

    if attach {
        let _ = AttachThreadInput(our_thread, state.fg_thread, FALSE);
    }

    state.raised = true;
    FALSE
}

impl FocusAdapter for WindowsFocus {
    fn is_foreground(&self) -> bool {
        unsafe {
            let hwnd = GetForegroundWindow();
            if hwnd.is_invalid() {
                return false;
            }
            let mut pid = 0u32;
            GetWindowThreadProcessId(hwnd, Some(&mut pid));
            pid == GetCurrentProcessId()
        }
    }

    fn activate_once(&self) {
        unsafe {
            // Synthetic Alt tap: satisfies the "user just interacted"
            // heuristic that gates SetForegroundWindow.
            keybd_event(VK_MENU.0 as u8, 0, KEYEVENTF_EXTENDEDKEY, 0);
            keybd_event(VK_MENU.0 as u8, 0, KEYEVENTF_EXTENDEDKEY | KEYEVENTF_KEYUP, 0);

            let _ = AllowSetForegroundWindow(ASFW_ANY);

            let _lock = ForegroundLockGuard::disable();

            let fg = GetForegroundWindow();
            let fg_thread = if fg.is_invalid() {
                0
            } else {
                GetWindowThreadProcessId(fg, None)
            };

            let mut state = EnumState {
                our_pid: GetCurrentProcessId(),
                fg_thread,
                raised: false,
            };
            // Returns Err when the callback stops enumeration early, so the
            // result itself carries no signal.
            let _ = EnumWindows(
                Some(raise_own_window),
                LPARAM(std::ptr::addr_of_mut!(state) as isize),
            );

            if !state.raised {
                tracing::debug!("no visible window of ours found to raise");
            }
        }
    }
}
