//! Header showing the selected device and its mute toggle.

use super::mute_button::MuteButton;
use crate::state::DeviceView;
use crate::ui::theme::Theme;
use eframe::egui;

/// Selected-device header.
pub struct SelectedDevice;

impl SelectedDevice {
    /// Render the header. Returns `true` if the mute button was clicked.
    ///
    /// The label is at least as wide as the longest device name so the mute
    /// button does not move when the selection changes.
    pub fn show(
        ui: &mut egui::Ui,
        label: &str,
        muted: bool,
        devices: &[DeviceView],
        theme: &Theme,
    ) -> bool {
        let font = egui::TextStyle::Body.resolve(ui.style());
        let label_width = widest_name(ui, devices, &font).max(120.0);

        let mut clicked = false;
        ui.label(
            egui::RichText::new("Select device:")
                .strong()
                .color(theme.text_secondary),
        );
        ui.horizontal(|ui| {
            ui.add_sized(
                [label_width, 24.0],
                egui::Label::new(egui::RichText::new(label).color(theme.text_primary)).truncate(),
            );
            clicked = MuteButton::show(ui, muted, 18.0, theme).clicked();
        });
        clicked
    }
}

fn widest_name(ui: &egui::Ui, devices: &[DeviceView], font: &egui::FontId) -> f32 {
    ui.fonts(|fonts| {
        devices
            .iter()
            .map(|device| {
                fonts
                    .layout_no_wrap(device.name.clone(), font.clone(), egui::Color32::WHITE)
                    .size()
                    .x
            })
            .fold(0.0, f32::max)
    })
}
