//! Preferred-device star toggle.

use crate::ui::theme::Theme;
use eframe::egui;

/// Star button flipping a device's preferred flag.
pub struct PrefButton;

impl PrefButton {
    /// Render the star. Returns `true` when clicked.
    pub fn show(ui: &mut egui::Ui, preferred: bool, theme: &Theme) -> bool {
        let (icon, hint) = if preferred {
            (egui::RichText::new("★").color(theme.star), "Remove from preferred")
        } else {
            (egui::RichText::new("☆"), "Add to preferred")
        };

        ui.add(egui::Button::new(icon.size(16.0)).frame(false))
            .on_hover_text(hint)
            .clicked()
    }
}
