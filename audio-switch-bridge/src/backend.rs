//! The host-service surface as seen by the UI.

use crate::error::BridgeError;
use crate::types::{AppState, HotkeyConfig, StatePatch, WindowGeometry, WindowTarget};

/// Events pushed by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Full or partial application state
    StateUpdate(StatePatch),
}

/// Operations exposed by the host service.
///
/// Queries return full snapshots; commands return nothing meaningful and the
/// outcome shows up in the next [`HostEvent::StateUpdate`].
pub trait Backend: Send + Sync {
    /// Full application state.
    fn get_state(&self) -> Result<AppState, BridgeError>;

    /// Currently registered hotkey.
    fn get_hotkey_config(&self) -> Result<HotkeyConfig, BridgeError>;

    /// Toggle mute on the selected device.
    fn toggle_selected(&self) -> Result<(), BridgeError>;

    /// Select a device by id.
    fn set_device(&self, device_id: &str) -> Result<(), BridgeError>;

    /// Flip the preferred flag of a device.
    fn toggle_pref(&self, device_id: &str) -> Result<(), BridgeError>;

    /// Register a global hotkey.
    fn register_hotkey(&self, config: &HotkeyConfig) -> Result<(), BridgeError>;

    /// Unregister the global hotkey.
    fn unregister_hotkey(&self) -> Result<(), BridgeError>;

    /// Ask the host to (re)open the dashboard window.
    fn create_window(&self) -> Result<(), BridgeError>;

    /// Ask the host to shut down.
    fn exit(&self) -> Result<(), BridgeError>;

    /// Tell the host a window changed size.
    fn notify_resize(
        &self,
        target: WindowTarget,
        geometry: WindowGeometry,
    ) -> Result<(), BridgeError>;
}
