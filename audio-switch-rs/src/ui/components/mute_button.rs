//! Microphone mute toggle.

use crate::ui::theme::Theme;
use eframe::egui;

/// Mute button showing the current mute state of the selected device.
pub struct MuteButton;

impl MuteButton {
    /// Render the button with an icon of `size` points.
    pub fn show(ui: &mut egui::Ui, muted: bool, size: f32, theme: &Theme) -> egui::Response {
        let icon = if muted {
            egui::RichText::new("🔇").color(theme.muted)
        } else {
            egui::RichText::new("🎤").color(theme.text_primary)
        };
        let hint = if muted { "Unmute" } else { "Mute" };

        ui.add(egui::Button::new(icon.size(size)).min_size(egui::vec2(size, size) * 1.4))
            .on_hover_text(hint)
    }
}
