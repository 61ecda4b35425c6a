pub mod backend;
pub mod enumerate;

pub use backend::Win32Backend;
