//! Window icon generation.
//!
//! The icon is drawn programmatically: a rounded microphone capsule on a
//! filled disc, tinted by mute state.

use eframe::egui::IconData;
use image::{Rgba, RgbaImage};

/// Icon size in pixels.
pub const ICON_SIZE: u32 = 32;

const BACKGROUND: [u8; 3] = [27, 38, 54];
const UNMUTED: [u8; 3] = [60, 180, 60];
const MUTED: [u8; 3] = [220, 60, 60];

/// Application icon for the dashboard and overlay windows.
pub fn app_icon(muted: bool) -> IconData {
    let image = draw_icon(muted);
    let (width, height) = image.dimensions();
    IconData {
        rgba: image.into_raw(),
        width,
        height,
    }
}

fn draw_icon(muted: bool) -> RgbaImage {
    let size = ICON_SIZE as f32;
    let center = size / 2.0;
    let radius = size / 2.0 - 1.0;
    let [r, g, b] = if muted { MUTED } else { UNMUTED };

    RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dist = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

        if dist > radius + 1.0 {
            return Rgba([0, 0, 0, 0]);
        }
        // Anti-aliased edge
        let alpha = if dist > radius {
            ((radius + 1.0 - dist) * 255.0) as u8
        } else {
            255
        };

        if in_capsule(px, py, center) {
            Rgba([r, g, b, alpha])
        } else {
            let [br, bg, bb] = BACKGROUND;
            Rgba([br, bg, bb, alpha])
        }
    })
}

/// Vertical capsule (the microphone head) plus its stand.
fn in_capsule(px: f32, py: f32, center: f32) -> bool {
    let half_width: f32 = 4.5;
    let top: f32 = 7.0;
    let bottom: f32 = 18.0;

    let body = if py < top + half_width {
        let dy = py - (top + half_width);
        (px - center).powi(2) + dy.powi(2) <= half_width.powi(2)
    } else if py > bottom - half_width {
        let dy = py - (bottom - half_width);
        (px - center).powi(2) + dy.powi(2) <= half_width.powi(2)
    } else {
        (px - center).abs() <= half_width
    };

    let stand = (px - center).abs() <= 1.0 && (bottom..=24.0).contains(&py);
    let base = (px - center).abs() <= 5.0 && (24.0..=26.0).contains(&py);

    body || stand || base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions() {
        let icon = app_icon(false);
        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn test_corners_are_transparent() {
        let image = draw_icon(true);
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(ICON_SIZE - 1, ICON_SIZE - 1)[3], 0);
    }

    #[test]
    fn test_tint_follows_mute_state() {
        let center = ICON_SIZE / 2;
        assert_eq!(draw_icon(true).get_pixel(center, 12).0[..3], MUTED);
        assert_eq!(draw_icon(false).get_pixel(center, 12).0[..3], UNMUTED);
    }
}
