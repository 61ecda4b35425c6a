use super::error::BackendError;
use super::style::ExStyle;
use super::types::{WindowEntry, WindowHandle};

/// The OS window-manager calls the controller depends on.
///
/// The Win32 implementation lives in `crate::win32`; tests substitute an
/// in-memory fake.
pub trait WindowBackend {
    /// Lists visible top-level windows with a non-empty title, in OS order.
    fn enumerate_windows(&self) -> Result<Vec<WindowEntry>, BackendError>;

    /// Reads the window's extended style bitmask.
    fn read_ex_style(&self, handle: WindowHandle) -> Result<ExStyle, BackendError>;

    /// Replaces the window's extended style bitmask.
    fn write_ex_style(&self, handle: WindowHandle, style: ExStyle) -> Result<(), BackendError>;

    /// Sets the layered-window alpha (alpha channel only, no colour key).
    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> Result<(), BackendError>;

    /// Moves the window into (or out of) the topmost z-order band without
    /// moving, resizing or activating it.
    fn set_topmost(&self, handle: WindowHandle, topmost: bool) -> Result<(), BackendError>;
}

impl<B: WindowBackend + ?Sized> WindowBackend for &B {
    fn enumerate_windows(&self) -> Result<Vec<WindowEntry>, BackendError> {
        (**self).enumerate_windows()
    }

    fn read_ex_style(&self, handle: WindowHandle) -> Result<ExStyle, BackendError> {
        (**self).read_ex_style(handle)
    }

    fn write_ex_style(&self, handle: WindowHandle, style: ExStyle) -> Result<(), BackendError> {
        (**self).write_ex_style(handle, style)
    }

    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> Result<(), BackendError> {
        (**self).set_alpha(handle, alpha)
    }

    fn set_topmost(&self, handle: WindowHandle, topmost: bool) -> Result<(), BackendError> {
        (**self).set_topmost(handle, topmost)
    }
}
