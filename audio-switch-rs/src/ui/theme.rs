//! Dark theme colors and styling.

use eframe::egui;

/// Alpha of window backgrounds while translucent.
const TRANSLUCENT_ALPHA: u8 = 217;

/// Theme colors.
pub struct Theme {
    /// Window background color
    pub background: egui::Color32,

    /// Surface color (device rows, key chips)
    pub surface: egui::Color32,

    /// Primary accent color
    pub accent: egui::Color32,

    /// Text primary color
    pub text_primary: egui::Color32,

    /// Text secondary color
    pub text_secondary: egui::Color32,

    /// Preferred-device star
    pub star: egui::Color32,

    /// Muted microphone
    pub muted: egui::Color32,

    /// Border color
    pub border: egui::Color32,
}

impl Theme {
    /// Dark theme matching the host's window background.
    pub fn dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(27, 38, 54),
            surface: egui::Color32::from_rgb(40, 54, 74),
            accent: egui::Color32::from_rgb(0, 120, 212),
            text_primary: egui::Color32::from_rgb(255, 255, 255),
            text_secondary: egui::Color32::from_rgb(170, 180, 195),
            star: egui::Color32::from_rgb(245, 158, 11),
            muted: egui::Color32::from_rgb(239, 68, 68),
            border: egui::Color32::from_rgb(62, 78, 102),
        }
    }

    /// Window background; opaque while `opaque` is set, translucent otherwise.
    pub fn backdrop(&self, opaque: bool) -> egui::Color32 {
        if opaque {
            self.background
        } else {
            let [r, g, b, _] = self.background.to_array();
            egui::Color32::from_rgba_unmultiplied(r, g, b, TRANSLUCENT_ALPHA)
        }
    }

    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::dark();

        // Panel colors
        style.visuals.panel_fill = self.background;
        style.visuals.window_fill = self.surface;

        // Widget colors
        style.visuals.widgets.noninteractive.bg_fill = self.surface;
        style.visuals.widgets.inactive.bg_fill = self.surface;
        style.visuals.widgets.inactive.weak_bg_fill = self.surface;
        style.visuals.widgets.hovered.bg_fill = self.border;
        style.visuals.widgets.hovered.weak_bg_fill = self.border;
        style.visuals.widgets.active.bg_fill = self.accent;

        // Text colors
        style.visuals.widgets.noninteractive.fg_stroke.color = self.text_primary;
        style.visuals.widgets.inactive.fg_stroke.color = self.text_secondary;
        style.visuals.widgets.hovered.fg_stroke.color = self.text_primary;
        style.visuals.widgets.active.fg_stroke.color = self.text_primary;

        // Selection color
        style.visuals.selection.bg_fill = self.accent;
        style.visuals.selection.stroke.color = self.text_primary;

        style.visuals.window_rounding = egui::Rounding::same(8.0);

        ctx.set_style(style);
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_alpha() {
        let theme = Theme::dark();
        assert_eq!(theme.backdrop(true).a(), 255);
        assert_eq!(theme.backdrop(false).a(), TRANSLUCENT_ALPHA);
    }
}
