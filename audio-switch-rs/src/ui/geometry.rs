//! Window-geometry negotiation helpers.

use audio_switch_bridge::WindowGeometry;
use eframe::egui;

/// Sizes closer than this are considered equal.
const TOLERANCE: f32 = 0.5;

/// Remembers the last observed window size and reports resizes.
#[derive(Debug, Default)]
pub struct ResizeTracker {
    last: Option<egui::Vec2>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `size`. Returns `true` if it differs from the previous one; the
    /// first observation is the initial size, not a resize.
    pub fn observe(&mut self, size: egui::Vec2) -> bool {
        match self.last {
            Some(last) if same_size(last, size) => false,
            Some(_) => {
                self.last = Some(size);
                true
            }
            None => {
                self.last = Some(size);
                false
            }
        }
    }
}

/// True if both sizes match within half a point.
pub fn same_size(a: egui::Vec2, b: egui::Vec2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Payload for resize notifications.
pub fn geometry(size: egui::Vec2) -> WindowGeometry {
    WindowGeometry {
        width: size.x.round(),
        height: size.y.round(),
    }
}
