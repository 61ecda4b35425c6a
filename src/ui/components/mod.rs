mod button;
mod checkbox;
mod slider;

pub use button::button;
pub use checkbox::labeled_checkbox;
pub use slider::{TrackBounds, opacity_slider};
