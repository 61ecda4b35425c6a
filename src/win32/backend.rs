use std::ffi::c_void;

use windows::Win32::Foundation::{
    COLORREF, ERROR_INVALID_WINDOW_HANDLE, ERROR_SUCCESS, GetLastError, HWND, SetLastError,
    WIN32_ERROR,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GWL_EXSTYLE, GetWindowLongPtrW, HWND_NOTOPMOST, HWND_TOPMOST, IsWindow, LWA_ALPHA,
    SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SetLayeredWindowAttributes, SetWindowLongPtrW,
    SetWindowPos,
};

use crate::state::{BackendError, ExStyle, WindowBackend, WindowEntry, WindowHandle};

use super::enumerate;

/// [`WindowBackend`] backed by the real Win32 window manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Backend;

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

/// Turn a failed call into a [`BackendError`], treating a dead window as
/// `HandleInvalid` whatever code the call itself reported.
fn classify(handle: WindowHandle, operation: &'static str, code: u32) -> BackendError {
    // SAFETY: IsWindow only inspects the handle table.
    let alive = unsafe { IsWindow(Some(hwnd(handle))).as_bool() };
    if !alive || code == ERROR_INVALID_WINDOW_HANDLE.0 {
        BackendError::HandleInvalid(handle)
    } else {
        BackendError::Os { operation, code }
    }
}

/// Extracts the Win32 error code from an `HRESULT_FROM_WIN32` value.
fn win32_code(err: &windows::core::Error) -> u32 {
    let hr = err.code().0 as u32;
    if (hr >> 16) & 0x1FFF == 7 { hr & 0xFFFF } else { hr }
}

impl WindowBackend for Win32Backend {
    fn enumerate_windows(&self) -> Result<Vec<WindowEntry>, BackendError> {
        enumerate::enumerate_windows().map_err(|e| BackendError::Os {
            operation: "EnumWindows",
            code: win32_code(&e),
        })
    }

    fn read_ex_style(&self, handle: WindowHandle) -> Result<ExStyle, BackendError> {
        // GetWindowLongPtrW returns 0 both on failure and for a window with
        // no extended style, so the last-error slot has to be cleared first.
        unsafe {
            SetLastError(ERROR_SUCCESS);
            let value = GetWindowLongPtrW(hwnd(handle), GWL_EXSTYLE);
            if value == 0 {
                let err: WIN32_ERROR = GetLastError();
                if err != ERROR_SUCCESS {
                    return Err(classify(handle, "GetWindowLongPtrW", err.0));
                }
            }
            Ok(ExStyle(value as u32))
        }
    }

    fn write_ex_style(&self, handle: WindowHandle, style: ExStyle) -> Result<(), BackendError> {
        // The return value is the previous style, which may legitimately be 0.
        unsafe {
            SetLastError(ERROR_SUCCESS);
            let previous = SetWindowLongPtrW(hwnd(handle), GWL_EXSTYLE, style.0 as isize);
            if previous == 0 {
                let err = GetLastError();
                if err != ERROR_SUCCESS {
                    return Err(classify(handle, "SetWindowLongPtrW", err.0));
                }
            }
        }
        tracing::trace!(%handle, style = style.0, "wrote extended style");
        Ok(())
    }

    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> Result<(), BackendError> {
        let result =
            unsafe { SetLayeredWindowAttributes(hwnd(handle), COLORREF(0), alpha, LWA_ALPHA) };
        result.map_err(|e| classify(handle, "SetLayeredWindowAttributes", win32_code(&e)))
    }

    fn set_topmost(&self, handle: WindowHandle, topmost: bool) -> Result<(), BackendError> {
        let insert_after = if topmost { HWND_TOPMOST } else { HWND_NOTOPMOST };
        let result = unsafe {
            SetWindowPos(
                hwnd(handle),
                Some(insert_after),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            )
        };
        result.map_err(|e| classify(handle, "SetWindowPos", win32_code(&e)))
    }
}
