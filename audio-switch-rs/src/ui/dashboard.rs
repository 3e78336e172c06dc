//! Dashboard window: device selection, mute, hotkey configuration.

use crate::state::{selected_label, DeviceView, HotkeyRecorder};
use crate::ui::components::{
    DeviceRow, DeviceRowAction, ExitButton, HotkeyAction, HotkeyPanel, SelectedDevice,
};
use crate::ui::geometry::{geometry, ResizeTracker};
use crate::ui::theme::Theme;
use audio_switch_bridge::{AppState, WindowGeometry};
use eframe::egui;

/// Actions that can be triggered from the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Select a device
    SetDevice(String),
    /// Flip a device's preferred flag
    TogglePref(String),
    /// Toggle mute on the selected device
    ToggleMute,
    /// Hotkey capture was cleared
    ClearHotkey,
    /// Register the captured hotkey
    SaveHotkey,
    /// Shut everything down
    Exit,
    /// The window changed size
    Resized(WindowGeometry),
}

/// Dashboard window state.
pub struct Dashboard {
    /// Pending actions from the UI
    pub actions: Vec<DashboardAction>,
    hotkey: HotkeyPanel,
    size: ResizeTracker,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            hotkey: HotkeyPanel::new(),
            size: ResizeTracker::new(),
        }
    }

    /// Render the dashboard into the current viewport.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        state: &AppState,
        devices: &[DeviceView],
        recorder: &mut HotkeyRecorder,
        theme: &Theme,
    ) {
        let (size, focused) = ctx.input(|i| {
            (
                i.screen_rect().size(),
                i.viewport().focused.unwrap_or(true),
            )
        });
        if self.size.observe(size) {
            self.actions.push(DashboardAction::Resized(geometry(size)));
        }

        let frame = egui::Frame::central_panel(&ctx.style())
            .fill(theme.backdrop(!focused))
            .inner_margin(12.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            if SelectedDevice::show(ui, selected_label(state), state.muted, devices, theme) {
                self.actions.push(DashboardAction::ToggleMute);
            }

            ui.separator();
            self.render_devices(ui, state, devices, theme);
            ui.separator();

            match self.hotkey.show(ui, recorder, theme) {
                Some(HotkeyAction::Clear) => self.actions.push(DashboardAction::ClearHotkey),
                Some(HotkeyAction::Save) => self.actions.push(DashboardAction::SaveHotkey),
                None => {}
            }

            ui.add_space(8.0);
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
                if ExitButton::show(ui) {
                    self.actions.push(DashboardAction::Exit);
                }
            });
        });
    }

    fn render_devices(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        devices: &[DeviceView],
        theme: &Theme,
    ) {
        if devices.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(egui::RichText::new("No devices").color(theme.text_secondary));
                ui.add_space(12.0);
            });
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(260.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for device in devices {
                    let selected = device.id == state.selected;
                    match DeviceRow::show(ui, device, selected, theme) {
                        Some(DeviceRowAction::Select) => {
                            self.actions.push(DashboardAction::SetDevice(device.id.clone()))
                        }
                        Some(DeviceRowAction::TogglePref) => {
                            self.actions.push(DashboardAction::TogglePref(device.id.clone()))
                        }
                        None => {}
                    }
                    ui.add_space(4.0);
                }
            });
    }

    /// Take all pending actions.
    pub fn take_actions(&mut self) -> Vec<DashboardAction> {
        std::mem::take(&mut self.actions)
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
