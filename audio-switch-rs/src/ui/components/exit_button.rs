use eframe::egui;

/// Button shutting the application down.
pub struct ExitButton;

impl ExitButton {
    pub fn show(ui: &mut egui::Ui) -> bool {
        ui.button("Exit").clicked()
    }
}
