//! Overlay window: a small always-on-top mute toggle.
//!
//! The window is sized to its content. Its background turns opaque for a
//! moment after every mute change, then fades back to translucent.

use crate::state::SettleTimer;
use crate::ui::components::MuteButton;
use crate::ui::geometry::{geometry, same_size};
use crate::ui::theme::Theme;
use audio_switch_bridge::WindowGeometry;
use eframe::egui;
use std::time::{Duration, Instant};

const PADDING: f32 = 6.0;
const ICON_SIZE: f32 = 22.0;

/// Actions that can be triggered from the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayAction {
    /// Toggle mute on the selected device
    ToggleMute,
    /// Secondary click: bring up the dashboard
    OpenDashboard,
    /// The content size changed and the window was resized to match
    Resized(WindowGeometry),
}

/// Overlay window state.
pub struct Overlay {
    /// Pending actions from the UI
    pub actions: Vec<OverlayAction>,
    settle: SettleTimer,
    last_muted: Option<bool>,
    /// Size last requested from the window system, until the window matches
    requested: Option<egui::Vec2>,
}

impl Overlay {
    pub fn new(dim_settle: Duration) -> Self {
        Self {
            actions: Vec::new(),
            settle: SettleTimer::new(dim_settle),
            last_muted: None,
            requested: None,
        }
    }

    /// Record the current mute flag, arming the settle timer on the first
    /// observation and whenever it flips.
    pub fn observe_mute(&mut self, muted: bool, now: Instant) {
        if self.last_muted != Some(muted) {
            self.settle.trigger(now);
        }
        self.last_muted = Some(muted);
    }

    /// Whether the background is currently drawn opaque.
    pub fn is_dimmed(&self, now: Instant) -> bool {
        self.settle.is_active(now)
    }

    /// Render the overlay into the current viewport.
    pub fn show(&mut self, ctx: &egui::Context, muted: bool, theme: &Theme, now: Instant) {
        let dimmed = self.is_dimmed(now);
        if let Some(left) = self.settle.remaining(now) {
            ctx.request_repaint_after(left);
        }

        let frame = egui::Frame::none()
            .fill(theme.backdrop(dimmed))
            .rounding(8.0)
            .inner_margin(PADDING);

        let area = egui::Area::new(egui::Id::new("overlay"))
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                frame
                    .show(ui, |ui| MuteButton::show(ui, muted, ICON_SIZE, theme))
                    .inner
            });
        let button = area.inner;

        if button.clicked() {
            self.actions.push(OverlayAction::ToggleMute);
        }

        let (secondary_click, primary_press) = ctx.input(|i| {
            (
                i.pointer.button_clicked(egui::PointerButton::Secondary),
                i.pointer.primary_pressed(),
            )
        });
        if secondary_click {
            self.actions.push(OverlayAction::OpenDashboard);
        } else if primary_press && !button.hovered() {
            ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
        }

        self.fit_window(ctx, area.response.rect.size());
    }

    /// Resize the window to `content` whenever the two differ.
    fn fit_window(&mut self, ctx: &egui::Context, content: egui::Vec2) {
        let window = ctx.screen_rect().size();
        if same_size(window, content) {
            self.requested = None;
            return;
        }
        if self.requested.is_some_and(|requested| same_size(requested, content)) {
            return;
        }

        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(content));
        self.requested = Some(content);
        self.actions.push(OverlayAction::Resized(geometry(content)));
    }

    /// Take all pending actions.
    pub fn take_actions(&mut self) -> Vec<OverlayAction> {
        std::mem::take(&mut self.actions)
    }
}
