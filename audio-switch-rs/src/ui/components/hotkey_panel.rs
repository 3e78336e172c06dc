//! Hotkey capture panel.
//!
//! A focusable capture box feeds keyboard input into a [`HotkeyRecorder`]
//! and renders the captured combination as chips, followed by clear and save
//! buttons. Keys pressed while the box is not focused are left alone.

use crate::state::keys::{key_input, modifier_input};
use crate::state::HotkeyRecorder;
use crate::ui::theme::Theme;
use eframe::egui;

/// Actions that can be triggered from the hotkey panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Drop the current combination and unregister it upstream
    Clear,
    /// Register the captured combination upstream
    Save,
}

/// Widget id of the capture box.
pub fn capture_id() -> egui::Id {
    egui::Id::new("hotkey-capture")
}

/// Hotkey panel state kept across frames.
#[derive(Debug, Default)]
pub struct HotkeyPanel {
    last_modifiers: egui::Modifiers,
}

impl HotkeyPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of input into `recorder`.
    ///
    /// Input is only consumed while the capture box is `focused`. egui
    /// reports no key events for modifier keys, so a modifier becoming held
    /// since the previous frame is treated as a modifier-only key-down.
    /// Returns `true` if the capture changed.
    pub fn handle_input(
        &mut self,
        recorder: &mut HotkeyRecorder,
        events: &[egui::Event],
        modifiers: egui::Modifiers,
        focused: bool,
    ) -> bool {
        let newly_held = newly_pressed(self.last_modifiers, modifiers);
        self.last_modifiers = modifiers;
        if !focused {
            return false;
        }

        let mut changed = false;
        if newly_held {
            changed |= recorder.key_down(&modifier_input(modifiers));
        }

        for event in events {
            if let egui::Event::Key {
                key,
                physical_key,
                pressed: true,
                repeat: false,
                modifiers,
            } = event
            {
                changed |= recorder.key_down(&key_input(*key, *physical_key, *modifiers));
            }
        }

        changed
    }

    /// Render the panel and return any action triggered.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        recorder: &mut HotkeyRecorder,
        theme: &Theme,
    ) -> Option<HotkeyAction> {
        let id = capture_id();
        let focused = ui.memory(|m| m.has_focus(id));
        let (events, modifiers) = ui.input(|i| (i.events.clone(), i.modifiers));
        if self.handle_input(recorder, &events, modifiers, focused) {
            ui.ctx().request_repaint();
        }

        let mut action = None;

        ui.label(egui::RichText::new("Hotkey:").strong().color(theme.text_secondary));

        let outline = if focused { theme.accent } else { theme.border };
        let capture_box = egui::Frame::none()
            .stroke(egui::Stroke::new(1.0, outline))
            .rounding(4.0)
            .inner_margin(6.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.horizontal_wrapped(|ui| render_chips(ui, recorder, focused, theme));
            });

        let response = ui.interact(capture_box.response.rect, id, egui::Sense::click());
        if response.clicked() {
            response.request_focus();
        }

        ui.horizontal(|ui| {
            if ui.button("🗑").on_hover_text("Clear hotkey").clicked() {
                action = Some(HotkeyAction::Clear);
            }
            let save = ui
                .add_enabled(recorder.is_complete(), egui::Button::new("💾"))
                .on_hover_text("Save hotkey");
            if save.clicked() {
                action = Some(HotkeyAction::Save);
            }
        });

        action
    }
}

fn render_chips(ui: &mut egui::Ui, recorder: &HotkeyRecorder, focused: bool, theme: &Theme) {
    let config = recorder.config();
    let chips = [
        (config.shift, "SHIFT"),
        (config.ctrl, "CTRL"),
        (config.alt, "ALT"),
        (config.meta, "META"),
    ];
    for (held, name) in chips {
        if held {
            chip(ui, name, theme);
        }
    }
    if !config.key.is_empty() {
        chip(ui, &config.key, theme);
    }

    if config.is_empty() && recorder.is_listening() {
        let hint = if focused {
            "Press a key combination…"
        } else {
            "Click here to record a hotkey"
        };
        ui.label(egui::RichText::new(hint).italics().color(theme.text_secondary));
    }
}

fn newly_pressed(before: egui::Modifiers, now: egui::Modifiers) -> bool {
    (now.shift && !before.shift)
        || (now.ctrl && !before.ctrl)
        || (now.alt && !before.alt)
        || (now.mac_cmd && !before.mac_cmd)
}

fn chip(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    egui::Frame::none()
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).monospace().color(theme.accent));
        });
}
