use windows::Win32::Foundation::{HWND, LPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowTextLengthW, GetWindowTextW, IsWindowVisible,
};
use windows::core::BOOL;

use crate::state::{WindowEntry, WindowHandle};

/// Enumerate every visible top-level window that has a non-empty title.
///
/// Uses the Win32 `EnumWindows` API and keeps the order in which the OS
/// reports windows (roughly front to back).
pub fn enumerate_windows() -> windows::core::Result<Vec<WindowEntry>> {
    let mut windows: Vec<WindowEntry> = Vec::new();

    unsafe extern "system" fn enum_proc(hwnd: HWND, lparam: LPARAM) -> BOOL {
        unsafe {
            let windows = &mut *(lparam.0 as *mut Vec<WindowEntry>);

            if IsWindowVisible(hwnd).as_bool() {
                let title = window_title(hwnd);
                if !title.is_empty() {
                    windows.push(WindowEntry::new(title, WindowHandle(hwnd.0 as usize)));
                }
            }

            BOOL(1) // continue enumeration
        }
    }

    // EnumWindows runs synchronously, so the Vec outlives every callback.
    unsafe {
        EnumWindows(Some(enum_proc), LPARAM(&mut windows as *mut _ as isize))?;
    }

    Ok(windows)
}

/// Read a window's caption, or an empty string if it has none.
pub fn window_title(hwnd: HWND) -> String {
    unsafe {
        let length = GetWindowTextLengthW(hwnd);
        if length <= 0 {
            return String::new();
        }

        // +1 for the terminating NUL
        let mut buffer = vec![0u16; length as usize + 1];
        let copied = GetWindowTextW(hwnd, &mut buffer);
        String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
    }
}
