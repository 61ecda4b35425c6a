pub mod backend;
pub mod controller;
pub mod error;
pub mod style;
pub mod types;

#[cfg(test)]
pub mod fake;

pub use backend::WindowBackend;
pub use controller::WindowStateController;
pub use error::{BackendError, ControlError};
pub use style::ExStyle;
pub use types::{DisplayConfig, MAX_OPACITY, MIN_OPACITY, WindowEntry, WindowHandle, clamp_opacity};
