//! Audio Switch - Library
//!
//! Presentation layer of the audio-device switcher. The host service owns
//! the audio endpoints, global hotkeys and persistence; this crate mirrors
//! its state and sends it commands.
//!
//! ## Features
//!
//! - Device list merged from present and preferred devices
//! - Mute toggle from the dashboard or the always-on-top overlay
//! - Hotkey capture and registration
//! - Live updates pushed by the host

pub mod app;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod platform;
pub mod state;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AudioSwitchApp, StartupError};
pub use config::UiConfig;
pub use dispatch::{Command, Dispatcher, UiMessage};
pub use state::{DeviceView, HotkeyRecorder, StateStore};
