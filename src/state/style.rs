//! Extended window style bits and the opacity → alpha conversion.

use std::ops::{BitAnd, BitOr, Not};

/// Extended window style bitmask (`GWL_EXSTYLE`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExStyle(pub u32);

impl ExStyle {
    /// `WS_EX_LAYERED`: the OS composites the window with a single alpha value.
    pub const LAYERED: ExStyle = ExStyle(0x0008_0000);
    /// `WS_EX_TRANSPARENT`: mouse input falls through to windows underneath.
    pub const TRANSPARENT: ExStyle = ExStyle(0x0000_0020);

    pub fn contains(self, flags: ExStyle) -> bool {
        self.0 & flags.0 == flags.0
    }
}

impl BitOr for ExStyle {
    type Output = ExStyle;

    fn bitor(self, rhs: ExStyle) -> ExStyle {
        ExStyle(self.0 | rhs.0)
    }
}

impl BitAnd for ExStyle {
    type Output = ExStyle;

    fn bitand(self, rhs: ExStyle) -> ExStyle {
        ExStyle(self.0 & rhs.0)
    }
}

impl Not for ExStyle {
    type Output = ExStyle;

    fn not(self) -> ExStyle {
        ExStyle(!self.0)
    }
}

/// Computes the style to write for a window, always starting from the
/// style captured on first touch so repeated applies never compound.
pub fn layered_style(baseline: ExStyle, click_through: bool) -> ExStyle {
    let style = baseline | ExStyle::LAYERED;
    if click_through {
        style | ExStyle::TRANSPARENT
    } else {
        style & !ExStyle::TRANSPARENT
    }
}

/// Converts an opacity percentage to an 8-bit alpha, rounding half up.
///
/// Values above 100 saturate at 255.
pub fn opacity_to_alpha(opacity: u8) -> u8 {
    let percent = u32::from(opacity.min(100));
    ((255 * percent + 50) / 100) as u8
}
