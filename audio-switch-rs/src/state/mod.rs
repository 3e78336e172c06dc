//! Client-side state: the reconcilable cache of host state and the purely
//! local interaction state (hotkey capture, settle timers).

pub mod hotkey;
pub mod keys;
pub mod settle;
pub mod store;
pub mod view;

pub use hotkey::{CapturedKey, HotkeyRecorder, KeyInput};
pub use settle::SettleTimer;
pub use store::StateStore;
pub use view::{selected_label, DeviceList, DeviceView};
