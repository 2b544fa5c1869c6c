/// Map a key name to its Win32 virtual-key code.
///
/// The table is platform-independent on purpose: hotkey strings are parsed
/// and validated on every platform, registration only happens where the OS
/// supports it.
pub fn virtual_key_from_string(key: &str) -> Option<u32> {
    let upper = key.trim().to_ascii_uppercase();

    // Letters and digits map directly onto their ASCII codes.
    if upper.len() == 1 {
        let c = upper.as_bytes()[0];
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            return Some(u32::from(c));
        }
        return None;
    }

    // Function keys F1..F24 occupy a contiguous range from 0x70.
    if let Some(n) = upper.strip_prefix('F').and_then(|n| n.parse::<u32>().ok()) {
        if (1..=24).contains(&n) {
            return Some(0x70 + n - 1);
        }
        return None;
    }

    let vk = match upper.as_str() {
        "BACKSPACE" => 0x08,
        "TAB" => 0x09,
        "ENTER" | "RETURN" => 0x0D,
        "PAUSE" => 0x13,
        "CAPSLOCK" => 0x14,
        "ESC" | "ESCAPE" => 0x1B,
        "SPACE" => 0x20,
        "PAGEUP" => 0x21,
        "PAGEDOWN" => 0x22,
        "END" => 0x23,
        "HOME" => 0x24,
        "LEFT" => 0x25,
        "UP" => 0x26,
        "RIGHT" => 0x27,
        "DOWN" => 0x28,
        "PRINTSCREEN" => 0x2C,
        "INSERT" => 0x2D,
        "DELETE" => 0x2E,
        "NUMLOCK" => 0x90,
        "SCROLLLOCK" => 0x91,
        _ => return None,
    };
    Some(vk)
}
