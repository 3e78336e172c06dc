//! Application state and lifecycle management.
//!
//! [`AudioSwitchApp`] owns the state store, the local interaction state and
//! the two windows. Each frame it drains the inbox, renders, and turns the
//! views' actions into fire-and-forget backend commands.

use crate::config::UiConfig;
use crate::dispatch::{ui_channel, Command, Dispatcher, UiMessage, UiSender};
use crate::platform::app_icon;
use crate::state::{DeviceList, HotkeyRecorder, StateStore};
use crate::ui::{Dashboard, DashboardAction, Overlay, OverlayAction, Theme};
use audio_switch_bridge::{Backend, BridgeError, HostClient, HostEvent, WindowTarget};
use eframe::egui;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Window title of the dashboard.
pub const DASHBOARD_TITLE: &str = "Audio Switch";

/// How long shutdown waits for queued commands to reach the host.
const EXIT_FLUSH: Duration = Duration::from_millis(500);

const DASHBOARD_MIN_SIZE: [f32; 2] = [320.0, 360.0];

/// Failures while bringing the app up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Cannot reach host service at {address}: {source}")]
    Connect {
        address: String,
        #[source]
        source: BridgeError,
    },

    #[error("Failed to start backend dispatcher: {0}")]
    Dispatcher(#[from] std::io::Error),
}

/// Window-level follow-up of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowRequest {
    ShowDashboard,
    Quit,
}

/// Window icons for both mute states.
struct Icons {
    unmuted: Arc<egui::IconData>,
    muted: Arc<egui::IconData>,
}

impl Icons {
    fn new() -> Self {
        Self {
            unmuted: Arc::new(app_icon(false)),
            muted: Arc::new(app_icon(true)),
        }
    }

    fn get(&self, muted: bool) -> Arc<egui::IconData> {
        if muted {
            Arc::clone(&self.muted)
        } else {
            Arc::clone(&self.unmuted)
        }
    }
}

/// Main application.
pub struct AudioSwitchApp {
    config: UiConfig,
    dispatcher: Dispatcher,
    inbox: Receiver<UiMessage>,

    /// Reconciled copy of the host state
    store: StateStore,
    devices: DeviceList,
    recorder: HotkeyRecorder,

    dashboard: Dashboard,
    overlay: Overlay,
    /// Whether the dashboard viewport is shown (overlay mode only)
    dashboard_open: bool,

    theme: Theme,
    icons: Icons,
}

impl AudioSwitchApp {
    /// Start the dispatcher and issue the initial queries.
    pub fn new(
        config: UiConfig,
        backend: Arc<dyn Backend>,
        ui: UiSender,
        inbox: Receiver<UiMessage>,
    ) -> Result<Self, StartupError> {
        let dispatcher = Dispatcher::spawn(backend, ui)?;
        dispatcher.load_state();
        dispatcher.load_hotkey_config();

        let overlay = Overlay::new(config.overlay.dim_settle());

        Ok(Self {
            config,
            dispatcher,
            inbox,
            store: StateStore::new(),
            devices: DeviceList::new(),
            recorder: HotkeyRecorder::new(),
            dashboard: Dashboard::new(),
            overlay,
            dashboard_open: true,
            theme: Theme::dark(),
            icons: Icons::new(),
        })
    }

    /// Connect to the host service and build the app for `cc`.
    pub fn connect(
        cc: &eframe::CreationContext<'_>,
        config: UiConfig,
    ) -> Result<Self, StartupError> {
        let repaint = cc.egui_ctx.clone();
        let (ui, inbox) = ui_channel(Arc::new(move || repaint.request_repaint()));

        let events = ui.clone();
        let client = HostClient::connect(
            &config.host.address,
            config.host.connect_timeout(),
            move |event| events.send(UiMessage::Host(event)),
        )
        .map_err(|source| StartupError::Connect {
            address: config.host.address.clone(),
            source,
        })?;

        let app = Self::new(config, Arc::new(client), ui, inbox)?;
        app.theme.apply(&cc.egui_ctx);
        Ok(app)
    }

    /// Apply everything queued for the UI thread.
    fn process_messages(&mut self, now: Instant) {
        while let Ok(message) = self.inbox.try_recv() {
            self.handle_message(message);
        }

        self.devices.sync(&self.store);
        if self.store.is_loaded() {
            self.overlay.observe_mute(self.store.state().muted, now);
        }
    }

    fn handle_message(&mut self, message: UiMessage) {
        match message {
            UiMessage::State(state) => {
                debug!("Initial state: {} devices", state.devices.len());
                self.store.replace(state);
            }
            UiMessage::HotkeyConfig(config) => {
                debug!("Registered hotkey: {}", config.describe());
                self.recorder.load(config);
            }
            UiMessage::Host(HostEvent::StateUpdate(patch)) => {
                self.store.merge(patch);
            }
        }
    }

    fn handle_dashboard_action(&mut self, action: DashboardAction) -> Option<WindowRequest> {
        match action {
            DashboardAction::SetDevice(id) => self.dispatcher.command(Command::SetDevice(id)),
            DashboardAction::TogglePref(id) => self.dispatcher.command(Command::TogglePref(id)),
            DashboardAction::ToggleMute => self.dispatcher.command(Command::ToggleSelected),
            DashboardAction::ClearHotkey => {
                self.recorder.clear();
                self.dispatcher.command(Command::UnregisterHotkey);
                self.recorder.resume();
            }
            DashboardAction::SaveHotkey => {
                if self.recorder.is_complete() {
                    let config = self.recorder.config().clone();
                    info!("Saving hotkey {}", config.describe());
                    self.dispatcher.command(Command::RegisterHotkey(config));
                } else {
                    warn!("Ignoring save of an incomplete hotkey");
                }
            }
            DashboardAction::Exit => {
                self.dispatcher.command(Command::Exit);
                return Some(WindowRequest::Quit);
            }
            DashboardAction::Resized(geometry) => self
                .dispatcher
                .command(Command::NotifyResize(WindowTarget::Dashboard, geometry)),
        }
        None
    }

    fn handle_overlay_action(&mut self, action: OverlayAction) -> Option<WindowRequest> {
        match action {
            OverlayAction::ToggleMute => self.dispatcher.command(Command::ToggleSelected),
            OverlayAction::OpenDashboard => {
                self.dispatcher.command(Command::CreateWindow);
                return Some(WindowRequest::ShowDashboard);
            }
            OverlayAction::Resized(geometry) => self
                .dispatcher
                .command(Command::NotifyResize(WindowTarget::Overlay, geometry)),
        }
        None
    }

    fn apply_request(&mut self, ctx: &egui::Context, request: WindowRequest) {
        match request {
            WindowRequest::ShowDashboard => {
                if self.dashboard_open {
                    ctx.send_viewport_cmd_to(dashboard_viewport(), egui::ViewportCommand::Focus);
                }
                self.dashboard_open = true;
            }
            WindowRequest::Quit => {
                info!("Exit requested");
                ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Close);
            }
        }
    }

    fn run_dashboard_actions(&mut self, ctx: &egui::Context) {
        for action in self.dashboard.take_actions() {
            if let Some(request) = self.handle_dashboard_action(action) {
                self.apply_request(ctx, request);
            }
        }
    }

    /// Render the dashboard as a secondary viewport. Closing it only hides it.
    fn show_dashboard_viewport(&mut self, ctx: &egui::Context) {
        let state = self.store.state();
        let builder = egui::ViewportBuilder::default()
            .with_title(DASHBOARD_TITLE)
            .with_inner_size([self.config.dashboard.width, self.config.dashboard.height])
            .with_min_inner_size(DASHBOARD_MIN_SIZE)
            .with_transparent(true)
            .with_icon(self.icons.get(state.muted));

        let dashboard = &mut self.dashboard;
        let recorder = &mut self.recorder;
        let views = self.devices.views();
        let theme = &self.theme;

        let close_requested = ctx.show_viewport_immediate(dashboard_viewport(), builder, |ctx, _| {
            dashboard.show(ctx, state, views, recorder, theme);
            ctx.input(|i| i.viewport().close_requested())
        });

        if close_requested {
            debug!("Dashboard hidden");
            self.dashboard_open = false;
        }
    }
}

fn dashboard_viewport() -> egui::ViewportId {
    egui::ViewportId::from_hash_of("dashboard")
}

impl eframe::App for AudioSwitchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_messages(now);

        if !self.config.overlay.enabled {
            self.dashboard.show(
                ctx,
                self.store.state(),
                self.devices.views(),
                &mut self.recorder,
                &self.theme,
            );
            self.run_dashboard_actions(ctx);
            return;
        }

        self.overlay
            .show(ctx, self.store.state().muted, &self.theme, now);
        for action in self.overlay.take_actions() {
            if let Some(request) = self.handle_overlay_action(action) {
                self.apply_request(ctx, request);
            }
        }

        if self.dashboard_open {
            self.show_dashboard_viewport(ctx);
            self.run_dashboard_actions(ctx);
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if !self.dispatcher.flush(EXIT_FLUSH) {
            warn!("Shutting down with backend calls still pending");
        }
        info!("Audio Switch shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;
    use audio_switch_bridge::{AppState, DeviceDescriptor, HotkeyConfig, StatePatch};

    const WAIT: Duration = Duration::from_secs(2);

    fn setup(backend: Arc<RecordingBackend>) -> (AudioSwitchApp, UiSender) {
        let (ui, inbox) = ui_channel(Arc::new(|| {}));
        let app = AudioSwitchApp::new(UiConfig::default(), backend, ui.clone(), inbox).unwrap();
        (app, ui)
    }

    fn settle(app: &mut AudioSwitchApp) {
        assert!(app.dispatcher.flush(WAIT));
        app.process_messages(Instant::now());
    }

    fn host_state() -> AppState {
        let mut state = AppState::default();
        state.selected = "a".into();
        state
            .devices
            .insert("a".into(), DeviceDescriptor::new("a", "Headset"));
        state
            .devices
            .insert("b".into(), DeviceDescriptor::new("b", "Webcam"));
        state
    }

    fn ctrl_m() -> HotkeyConfig {
        HotkeyConfig {
            ctrl: true,
            key: "M".into(),
            code: 0x4D,
            ..Default::default()
        }
    }

    #[test]
    fn test_startup_loads_state_and_hotkey() {
        let backend = Arc::new(RecordingBackend::new());
        backend.set_state(host_state());
        backend.set_hotkey(ctrl_m());
        let (mut app, _ui) = setup(Arc::clone(&backend));

        settle(&mut app);

        assert_eq!(backend.calls(), vec!["GetState", "GetHotkeyConfig"]);
        assert!(app.store.is_loaded());
        assert_eq!(app.devices.views().len(), 2);
        assert_eq!(app.recorder.config(), &ctrl_m());
    }

    #[test]
    fn test_failed_startup_query_leaves_store_empty() {
        let backend = Arc::new(RecordingBackend::new());
        backend.fail_with("host busy");
        let (mut app, _ui) = setup(backend);

        settle(&mut app);

        assert!(!app.store.is_loaded());
        assert!(app.devices.is_empty());
    }

    #[test]
    fn test_push_update_merges() {
        let backend = Arc::new(RecordingBackend::new());
        backend.set_state(host_state());
        let (mut app, ui) = setup(backend);
        settle(&mut app);

        ui.send(UiMessage::Host(HostEvent::StateUpdate(StatePatch {
            muted: Some(true),
            ..Default::default()
        })));
        app.process_messages(Instant::now());

        let state = app.store.state();
        assert!(state.muted);
        assert_eq!(state.selected, "a");
        assert_eq!(state.devices.len(), 2);
    }

    #[test]
    fn test_pushed_mute_change_dims_overlay() {
        let backend = Arc::new(RecordingBackend::new());
        backend.set_state(host_state());
        let (mut app, ui) = setup(backend);
        settle(&mut app);

        // Dimmed once when the first state arrives.
        let later = Instant::now() + Duration::from_secs(5);
        app.process_messages(later);
        assert!(!app.overlay.is_dimmed(later));

        ui.send(UiMessage::Host(HostEvent::StateUpdate(StatePatch {
            muted: Some(true),
            ..Default::default()
        })));
        app.process_messages(later);
        assert!(app.overlay.is_dimmed(later));
    }

    #[test]
    fn test_device_actions_forward_commands() {
        let backend = Arc::new(RecordingBackend::new());
        let (mut app, _ui) = setup(Arc::clone(&backend));

        assert_eq!(app.handle_dashboard_action(DashboardAction::SetDevice("b".into())), None);
        app.handle_dashboard_action(DashboardAction::TogglePref("b".into()));
        app.handle_dashboard_action(DashboardAction::ToggleMute);
        app.handle_overlay_action(OverlayAction::ToggleMute);
        settle(&mut app);

        assert_eq!(
            backend.calls()[2..],
            ["SetDevice(b)", "TogglePref(b)", "ToggleSelected", "ToggleSelected"]
        );
    }

    #[test]
    fn test_clear_hotkey_resets_before_unregister() {
        let backend = Arc::new(RecordingBackend::new());
        backend.set_hotkey(ctrl_m());
        let (mut app, _ui) = setup(Arc::clone(&backend));
        settle(&mut app);

        app.handle_dashboard_action(DashboardAction::ClearHotkey);
        assert!(app.recorder.config().is_empty());
        assert!(!app.recorder.config().ctrl);
        assert!(app.recorder.is_listening());

        settle(&mut app);
        assert_eq!(backend.calls().last().map(String::as_str), Some("UnregisterHotkey"));
    }

    #[test]
    fn test_save_hotkey_registers_captured_config() {
        let backend = Arc::new(RecordingBackend::new());
        backend.set_hotkey(ctrl_m());
        let (mut app, _ui) = setup(Arc::clone(&backend));
        settle(&mut app);

        app.handle_dashboard_action(DashboardAction::SaveHotkey);
        settle(&mut app);
        assert_eq!(backend.calls().last().map(String::as_str), Some("RegisterHotkey(CTRL+M)"));
    }

    #[test]
    fn test_save_without_key_is_ignored() {
        let backend = Arc::new(RecordingBackend::new());
        let (mut app, _ui) = setup(Arc::clone(&backend));
        settle(&mut app);

        app.handle_dashboard_action(DashboardAction::SaveHotkey);
        settle(&mut app);
        assert_eq!(backend.calls(), vec!["GetState", "GetHotkeyConfig"]);
    }

    #[test]
    fn test_window_actions() {
        let backend = Arc::new(RecordingBackend::new());
        let (mut app, _ui) = setup(Arc::clone(&backend));

        assert_eq!(
            app.handle_overlay_action(OverlayAction::OpenDashboard),
            Some(WindowRequest::ShowDashboard)
        );
        assert_eq!(
            app.handle_dashboard_action(DashboardAction::Exit),
            Some(WindowRequest::Quit)
        );
        settle(&mut app);

        assert_eq!(backend.calls()[2..], ["CreateWindow", "Exit"]);
    }

    #[test]
    fn test_resizes_are_tagged_by_window() {
        let backend = Arc::new(RecordingBackend::new());
        let (mut app, _ui) = setup(Arc::clone(&backend));
        let size = audio_switch_bridge::WindowGeometry {
            width: 48.0,
            height: 40.0,
        };

        app.handle_overlay_action(OverlayAction::Resized(size));
        app.handle_dashboard_action(DashboardAction::Resized(size));
        settle(&mut app);

        assert_eq!(
            backend.calls()[2..],
            ["NotifyResize(Overlay, 48x40)", "NotifyResize(Dashboard, 48x40)"]
        );
    }
}
