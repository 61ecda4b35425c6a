use std::fmt;

/// Opaque identifier of a top-level window, as assigned by the OS.
///
/// Stored as a pointer-sized integer so the core never depends on the
/// platform's handle type. A handle is only meaningful while its window
/// exists; the OS may hand the same value to a new window later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub usize);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// A visible, titled top-level window found by enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowEntry {
    /// Window caption at the time of enumeration.
    pub title: String,
    /// Handle used for every subsequent operation.
    pub handle: WindowHandle,
}

impl WindowEntry {
    pub fn new(title: impl Into<String>, handle: WindowHandle) -> Self {
        Self {
            title: title.into(),
            handle,
        }
    }
}

/// Lowest opacity the controller will apply, in percent.
pub const MIN_OPACITY: u8 = 10;
/// Highest opacity (fully opaque), in percent.
pub const MAX_OPACITY: u8 = 100;

/// Target appearance requested for a single window.
///
/// Built fresh from the form (or the command line) on every apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Opacity in percent, always within `MIN_OPACITY..=MAX_OPACITY`.
    pub opacity: u8,
    /// Whether mouse input should pass through the window.
    pub click_through: bool,
    /// Whether the window sits in the topmost z-order band.
    pub always_on_top: bool,
}

impl DisplayConfig {
    /// Creates a config, clamping `opacity` into the supported range.
    pub fn new(opacity: u8, click_through: bool, always_on_top: bool) -> Self {
        Self {
            opacity: clamp_opacity(opacity),
            click_through,
            always_on_top,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(MAX_OPACITY, false, false)
    }
}

pub fn clamp_opacity(opacity: u8) -> u8 {
    opacity.clamp(MIN_OPACITY, MAX_OPACITY)
}
