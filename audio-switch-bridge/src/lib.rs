//! Bindings to the AudioSwitch host service.
//!
//! The host owns every audio and window-management operation. This crate
//! carries the state projections it exchanges with the UI, the line-delimited
//! JSON frames used on the wire, and a blocking TCP client that implements
//! [`Backend`].

pub mod backend;
pub mod client;
pub mod error;
pub mod types;
pub mod wire;

pub use backend::{Backend, HostEvent};
pub use client::HostClient;
pub use error::BridgeError;
pub use types::{
    AppState, DeviceDescriptor, DeviceMap, HotkeyConfig, StatePatch, WindowGeometry,
    WindowTarget,
};
