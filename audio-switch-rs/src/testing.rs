//! Test doubles shared by unit tests.

use audio_switch_bridge::{
    AppState, Backend, BridgeError, HotkeyConfig, WindowGeometry, WindowTarget,
};
use std::sync::Mutex;

/// Backend fake that records every call.
#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<String>>,
    state: Mutex<AppState>,
    hotkey: Mutex<HotkeyConfig>,
    failure: Mutex<Option<String>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn set_hotkey(&self, config: HotkeyConfig) {
        *self.hotkey.lock().unwrap() = config;
    }

    /// Make every subsequent call fail with a host error.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(BridgeError::Host(message.clone())),
            None => Ok(()),
        }
    }
}

impl Backend for RecordingBackend {
    fn get_state(&self) -> Result<AppState, BridgeError> {
        self.record("GetState".into())?;
        Ok(self.state.lock().unwrap().clone())
    }

    fn get_hotkey_config(&self) -> Result<HotkeyConfig, BridgeError> {
        self.record("GetHotkeyConfig".into())?;
        Ok(self.hotkey.lock().unwrap().clone())
    }

    fn toggle_selected(&self) -> Result<(), BridgeError> {
        self.record("ToggleSelected".into())
    }

    fn set_device(&self, device_id: &str) -> Result<(), BridgeError> {
        self.record(format!("SetDevice({})", device_id))
    }

    fn toggle_pref(&self, device_id: &str) -> Result<(), BridgeError> {
        self.record(format!("TogglePref({})", device_id))
    }

    fn register_hotkey(&self, config: &HotkeyConfig) -> Result<(), BridgeError> {
        self.record(format!("RegisterHotkey({})", config.describe()))
    }

    fn unregister_hotkey(&self) -> Result<(), BridgeError> {
        self.record("UnregisterHotkey".into())
    }

    fn create_window(&self) -> Result<(), BridgeError> {
        self.record("CreateWindow".into())
    }

    fn exit(&self) -> Result<(), BridgeError> {
        self.record("Exit".into())
    }

    fn notify_resize(
        &self,
        target: WindowTarget,
        geometry: WindowGeometry,
    ) -> Result<(), BridgeError> {
        self.record(format!(
            "NotifyResize({:?}, {}x{})",
            target, geometry.width, geometry.height
        ))
    }
}
