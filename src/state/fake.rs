//! In-memory window backend for controller tests.

use std::cell::RefCell;

use super::backend::WindowBackend;
use super::error::BackendError;
use super::style::ExStyle;
use super::types::{WindowEntry, WindowHandle};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ReadStyle(WindowHandle),
    WriteStyle(WindowHandle, ExStyle),
    SetAlpha(WindowHandle, u8),
    SetTopmost(WindowHandle, bool),
}

struct FakeWindow {
    handle: WindowHandle,
    title: String,
    style: ExStyle,
    alpha: Option<u8>,
    topmost: bool,
}

#[derive(Default)]
pub struct FakeBackend {
    windows: RefCell<Vec<FakeWindow>>,
    calls: RefCell<Vec<Call>>,
    denied_code: RefCell<Option<u32>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a window, replacing any live window with the same handle.
    pub fn add_window(&self, handle: WindowHandle, title: &str, style: ExStyle) {
        self.close_window(handle);
        self.windows.borrow_mut().push(FakeWindow {
            handle,
            title: title.to_string(),
            style,
            alpha: None,
            topmost: false,
        });
    }

    pub fn close_window(&self, handle: WindowHandle) {
        self.windows.borrow_mut().retain(|w| w.handle != handle);
    }

    /// Makes every mutating call fail with the given OS error code.
    pub fn deny_writes(&self, code: u32) {
        *self.denied_code.borrow_mut() = Some(code);
    }

    pub fn style(&self, handle: WindowHandle) -> Option<ExStyle> {
        self.find(handle, |w| w.style)
    }

    pub fn alpha(&self, handle: WindowHandle) -> Option<u8> {
        self.find(handle, |w| w.alpha).flatten()
    }

    pub fn topmost(&self, handle: WindowHandle) -> Option<bool> {
        self.find(handle, |w| w.topmost)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn read_count(&self, handle: WindowHandle) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| **call == Call::ReadStyle(handle))
            .count()
    }

    fn find<T>(&self, handle: WindowHandle, f: impl FnOnce(&FakeWindow) -> T) -> Option<T> {
        self.windows.borrow().iter().find(|w| w.handle == handle).map(f)
    }

    fn mutate(
        &self,
        handle: WindowHandle,
        operation: &'static str,
        f: impl FnOnce(&mut FakeWindow),
    ) -> Result<(), BackendError> {
        let mut windows = self.windows.borrow_mut();
        let window = windows
            .iter_mut()
            .find(|w| w.handle == handle)
            .ok_or(BackendError::HandleInvalid(handle))?;
        if let Some(code) = *self.denied_code.borrow() {
            return Err(BackendError::Os { operation, code });
        }
        f(window);
        Ok(())
    }
}

impl WindowBackend for FakeBackend {
    fn enumerate_windows(&self) -> Result<Vec<WindowEntry>, BackendError> {
        Ok(self
            .windows
            .borrow()
            .iter()
            .filter(|w| !w.title.is_empty())
            .map(|w| WindowEntry::new(w.title.clone(), w.handle))
            .collect())
    }

    fn read_ex_style(&self, handle: WindowHandle) -> Result<ExStyle, BackendError> {
        self.calls.borrow_mut().push(Call::ReadStyle(handle));
        self.style(handle).ok_or(BackendError::HandleInvalid(handle))
    }

    fn write_ex_style(&self, handle: WindowHandle, style: ExStyle) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(Call::WriteStyle(handle, style));
        self.mutate(handle, "SetWindowLongPtrW", |w| w.style = style)
    }

    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(Call::SetAlpha(handle, alpha));
        self.mutate(handle, "SetLayeredWindowAttributes", |w| w.alpha = Some(alpha))
    }

    fn set_topmost(&self, handle: WindowHandle, topmost: bool) -> Result<(), BackendError> {
        self.calls.borrow_mut().push(Call::SetTopmost(handle, topmost));
        self.mutate(handle, "SetWindowPos", |w| w.topmost = topmost)
    }
}
