//! UI module for the dashboard and overlay windows.
//!
//! Views render from borrowed state and queue actions; the app turns those
//! actions into backend commands.

pub mod components;
pub mod dashboard;
pub mod geometry;
pub mod overlay;
pub mod theme;

pub use dashboard::{Dashboard, DashboardAction};
pub use overlay::{Overlay, OverlayAction};
pub use theme::Theme;
