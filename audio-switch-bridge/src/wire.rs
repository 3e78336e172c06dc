//! Line-delimited JSON frames exchanged with the host service.
//!
//! Every frame is a single JSON object on its own line, tagged by `kind`.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Remote method names exposed by the host.
pub mod method {
    pub const GET_STATE: &str = "AudioService.GetState";
    pub const TOGGLE_SELECTED: &str = "AudioService.ToggleSelected";
    pub const SET_DEVICE: &str = "AudioService.SetDevice";
    pub const TOGGLE_PREF: &str = "AudioService.TogglePref";
    pub const GET_HOTKEY_CONFIG: &str = "WindowService.GetHotkeyConfig";
    pub const REGISTER_HOTKEY: &str = "WindowService.RegisterHotkey";
    pub const UNREGISTER_HOTKEY: &str = "WindowService.UnregisterHotkey";
    pub const CREATE_WINDOW: &str = "WindowService.CreateWindow";
    pub const EXIT: &str = "WindowService.Exit";
}

/// Event names.
pub mod event {
    /// Host -> UI, full or partial state
    pub const STATE_UPDATE: &str = "audio-device-update";
    /// UI -> host, dashboard geometry changed
    pub const WINDOW_RESIZE: &str = "window-resize";
    /// UI -> host, overlay geometry changed
    pub const OVERLAY_RESIZE: &str = "overlay-resize";
}

/// A single frame on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frame {
    /// Client -> host method call
    Call {
        id: u64,
        method: String,
        #[serde(default)]
        args: Vec<Value>,
    },
    /// Client -> host event
    Emit {
        name: String,
        #[serde(default)]
        data: Value,
    },
    /// Host -> client successful response
    Result {
        id: u64,
        #[serde(default)]
        result: Value,
    },
    /// Host -> client failed response
    Error { id: u64, error: String },
    /// Host -> client push event
    Event {
        name: String,
        #[serde(default)]
        data: Value,
    },
}

/// Encode a frame as one line (without the trailing newline).
pub fn encode(frame: &Frame) -> Result<String, BridgeError> {
    serde_json::to_string(frame).map_err(BridgeError::Encode)
}

/// Decode one line into a frame.
pub fn decode(line: &str) -> Result<Frame, BridgeError> {
    serde_json::from_str(line.trim()).map_err(BridgeError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_frame_layout() {
        let frame = Frame::Call {
            id: 7,
            method: method::SET_DEVICE.to_string(),
            args: vec![json!("dev-1")],
        };
        let line = encode(&frame).unwrap();
        assert!(!line.contains('\n'));

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "call");
        assert_eq!(value["method"], "AudioService.SetDevice");
        assert_eq!(value["args"][0], "dev-1");
    }

    #[test]
    fn test_decode_host_frames() {
        let result = decode(r#"{"kind":"result","id":3,"result":null}"#).unwrap();
        assert_eq!(
            result,
            Frame::Result {
                id: 3,
                result: Value::Null
            }
        );

        let error = decode(r#"{"kind":"error","id":4,"error":"device not found"}"#).unwrap();
        assert_eq!(
            error,
            Frame::Error {
                id: 4,
                error: "device not found".into()
            }
        );

        let update = decode(r#"{"kind":"event","name":"audio-device-update","data":{"Muted":true}}"#)
            .unwrap();
        assert!(matches!(update, Frame::Event { name, .. } if name == event::STATE_UPDATE));
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        assert!(matches!(
            decode(r#"{"kind":"bogus"}"#),
            Err(BridgeError::Decode(_))
        ));
    }
}
