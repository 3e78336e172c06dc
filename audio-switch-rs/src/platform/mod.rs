//! Platform glue: application directories and the window icon.

pub mod icons;
pub mod paths;

pub use icons::{app_icon, ICON_SIZE};
