//! Reusable UI components for the dashboard and overlay windows.

pub mod device_row;
pub mod exit_button;
pub mod hotkey_panel;
pub mod mute_button;
pub mod pref_button;
pub mod selected_device;

pub use device_row::{DeviceRow, DeviceRowAction};
pub use exit_button::ExitButton;
pub use hotkey_panel::{capture_id, HotkeyAction, HotkeyPanel};
pub use mute_button::MuteButton;
pub use pref_button::PrefButton;
pub use selected_device::SelectedDevice;
