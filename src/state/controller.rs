use std::collections::HashMap;

use super::backend::WindowBackend;
use super::error::{BackendError, ControlError};
use super::style::{ExStyle, layered_style, opacity_to_alpha};
use super::types::{DisplayConfig, WindowEntry, WindowHandle, clamp_opacity};

/// Owns the per-window style baselines and the latest window snapshot.
///
/// A baseline is the extended style observed the first time a handle is
/// made layered. Every later apply is computed from it, so toggling
/// click-through or sliding opacity back and forth never accumulates flags.
/// Baselines are dropped only when the OS reports the handle dead.
pub struct WindowStateController<B: WindowBackend> {
    backend: B,
    baselines: HashMap<WindowHandle, ExStyle>,
    snapshot: Vec<WindowEntry>,
}

impl<B: WindowBackend> WindowStateController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            baselines: HashMap::new(),
            snapshot: Vec::new(),
        }
    }

    /// Re-enumerates windows and replaces the snapshot.
    ///
    /// Never touches the baselines.
    pub fn refresh(&mut self) -> Result<&[WindowEntry], ControlError> {
        let windows = self.backend.enumerate_windows()?;
        tracing::debug!(count = windows.len(), "refreshed window list");
        self.snapshot = windows;
        Ok(&self.snapshot)
    }

    /// Windows from the last [`refresh`](Self::refresh).
    pub fn windows(&self) -> &[WindowEntry] {
        &self.snapshot
    }

    /// Resolves a title picked from the snapshot to its handle.
    ///
    /// When titles repeat, the first window in enumeration order wins.
    pub fn resolve_selection(&self, title: Option<&str>) -> Result<WindowHandle, ControlError> {
        let title = title.ok_or(ControlError::NoSelection)?;
        self.snapshot
            .iter()
            .find(|entry| entry.title == title)
            .map(|entry| entry.handle)
            .ok_or_else(|| ControlError::NotFound(title.to_string()))
    }

    /// Checks that a selected handle is still part of the snapshot.
    pub fn resolve_handle(&self, handle: Option<WindowHandle>) -> Result<WindowHandle, ControlError> {
        let handle = handle.ok_or(ControlError::NoSelection)?;
        if self.snapshot.iter().any(|entry| entry.handle == handle) {
            Ok(handle)
        } else {
            Err(ControlError::NotFound(handle.to_string()))
        }
    }

    /// Looks up the snapshot entry for a handle.
    pub fn entry(&self, handle: WindowHandle) -> Option<&WindowEntry> {
        self.snapshot.iter().find(|entry| entry.handle == handle)
    }

    /// Makes the window layered with the given opacity and click-through.
    ///
    /// If the window turns out to be gone, its baseline is evicted so a
    /// recycled handle value starts clean.
    pub fn apply_opacity(
        &mut self,
        handle: WindowHandle,
        opacity: u8,
        click_through: bool,
    ) -> Result<(), ControlError> {
        let result = self.layer(handle, clamp_opacity(opacity), click_through);
        self.evict_if_closed(handle, &result);
        result.map_err(ControlError::from)
    }

    fn evict_if_closed(&mut self, handle: WindowHandle, result: &Result<(), BackendError>) {
        if let Err(BackendError::HandleInvalid(_)) = result
            && self.baselines.remove(&handle).is_some()
        {
            tracing::debug!(%handle, "evicted baseline of closed window");
        }
    }

    fn layer(
        &mut self,
        handle: WindowHandle,
        opacity: u8,
        click_through: bool,
    ) -> Result<(), BackendError> {
        let baseline = match self.baselines.get(&handle) {
            Some(style) => *style,
            None => {
                let style = self.backend.read_ex_style(handle)?;
                tracing::debug!(%handle, style = style.0, "captured baseline style");
                self.baselines.insert(handle, style);
                style
            }
        };

        let style = layered_style(baseline, click_through);
        self.backend.write_ex_style(handle, style)?;

        let alpha = opacity_to_alpha(opacity);
        self.backend.set_alpha(handle, alpha)?;

        tracing::debug!(%handle, opacity, alpha, click_through, "applied layered style");
        Ok(())
    }

    /// Places the window in the topmost band, or back in the normal one.
    ///
    /// Never reads or writes style bits. The only effect on the baselines
    /// is evicting a closed window's entry.
    pub fn apply_always_on_top(
        &mut self,
        handle: WindowHandle,
        always_on_top: bool,
    ) -> Result<(), ControlError> {
        let result = self.backend.set_topmost(handle, always_on_top);
        self.evict_if_closed(handle, &result);
        result?;
        tracing::debug!(%handle, always_on_top, "updated z-order band");
        Ok(())
    }

    /// Applies a whole [`DisplayConfig`]: opacity and click-through first,
    /// then the z-order band. Stops at the first failure.
    pub fn apply(&mut self, handle: WindowHandle, config: &DisplayConfig) -> Result<(), ControlError> {
        let result = self
            .apply_opacity(handle, config.opacity, config.click_through)
            .and_then(|()| self.apply_always_on_top(handle, config.always_on_top));

        match &result {
            Ok(()) => tracing::info!(
                %handle,
                opacity = config.opacity,
                click_through = config.click_through,
                always_on_top = config.always_on_top,
                tracked = self.tracked_count(),
                "applied display config"
            ),
            Err(e) => tracing::warn!(%handle, error = %e, "could not apply display config"),
        }
        result
    }

    /// Baseline recorded for a handle, if it has been touched.
    pub fn baseline(&self, handle: WindowHandle) -> Option<ExStyle> {
        self.baselines.get(&handle).copied()
    }

    /// Number of handles with a recorded baseline.
    pub fn tracked_count(&self) -> usize {
        self.baselines.len()
    }
}
