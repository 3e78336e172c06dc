//! Device list entry.
//!
//! Clicking the name selects the device; the star toggles its preferred flag
//! without selecting it.

use super::pref_button::PrefButton;
use crate::state::DeviceView;
use crate::ui::theme::Theme;
use eframe::egui;

/// Actions that can be triggered from a device row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceRowAction {
    /// Make this the selected device
    Select,
    /// Flip the preferred flag
    TogglePref,
}

/// Device row component.
pub struct DeviceRow;

impl DeviceRow {
    /// Render a device row and return any action triggered.
    pub fn show(
        ui: &mut egui::Ui,
        device: &DeviceView,
        selected: bool,
        theme: &Theme,
    ) -> Option<DeviceRowAction> {
        let mut select_clicked = false;
        let mut star_clicked = false;

        egui::Frame::none()
            .fill(theme.surface)
            .rounding(4.0)
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    star_clicked = PrefButton::show(ui, device.preferred, theme);

                    let mut name = egui::RichText::new(&device.name);
                    if !device.connected {
                        name = name.italics().color(theme.text_secondary);
                    }

                    let response = ui
                        .with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                            ui.add_sized(
                                [ui.available_width(), 24.0],
                                egui::SelectableLabel::new(selected, name),
                            )
                        })
                        .inner;

                    let response = if device.connected {
                        response
                    } else {
                        response.on_hover_text("Device not connected")
                    };
                    select_clicked = response.clicked();
                });
            });

        row_action(select_clicked, star_clicked)
    }
}

/// The star wins if both registered in the same frame.
fn row_action(select_clicked: bool, star_clicked: bool) -> Option<DeviceRowAction> {
    if star_clicked {
        Some(DeviceRowAction::TogglePref)
    } else if select_clicked {
        Some(DeviceRowAction::Select)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_never_selects() {
        assert_eq!(row_action(true, true), Some(DeviceRowAction::TogglePref));
        assert_eq!(row_action(false, true), Some(DeviceRowAction::TogglePref));
        assert_eq!(row_action(true, false), Some(DeviceRowAction::Select));
        assert_eq!(row_action(false, false), None);
    }
}
