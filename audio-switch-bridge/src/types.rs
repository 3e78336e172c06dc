//! State projections exchanged with the host service.
//!
//! Field names on the wire follow the host's conventions (`Muted`,
//! `Selected`, `ID`, ...), so every struct carries explicit serde renames.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Map of device identifier to descriptor.
pub type DeviceMap = BTreeMap<String, DeviceDescriptor>;

/// An audio endpoint as described by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Opaque endpoint identifier
    #[serde(rename = "ID")]
    pub id: String,

    /// Friendly name shown to the user
    #[serde(rename = "Name")]
    pub name: String,
}

impl DeviceDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Full application state as answered by `AudioService.GetState`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppState {
    /// Whether the selected device is muted
    #[serde(default)]
    pub muted: bool,

    /// Identifier of the selected device (empty when none)
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected: String,

    /// Devices currently present on the system
    #[serde(default, deserialize_with = "null_as_default")]
    pub devices: DeviceMap,

    /// Devices the user marked as preferred
    #[serde(default, deserialize_with = "null_as_default")]
    pub prefs: DeviceMap,
}

impl AppState {
    /// Shallow merge: every field carried by `patch` replaces the stored one,
    /// every absent field is kept as is.
    ///
    /// Returns `true` if anything changed.
    pub fn merge(&mut self, patch: StatePatch) -> bool {
        let before = self.clone();

        if let Some(muted) = patch.muted {
            self.muted = muted;
        }
        if let Some(selected) = patch.selected {
            self.selected = selected;
        }
        if let Some(devices) = patch.devices {
            self.devices = devices;
        }
        if let Some(prefs) = patch.prefs {
            self.prefs = prefs;
        }

        *self != before
    }

    /// Descriptor of the selected device, looked up in both maps.
    pub fn selected_device(&self) -> Option<&DeviceDescriptor> {
        self.prefs
            .get(&self.selected)
            .or_else(|| self.devices.get(&self.selected))
    }
}

/// Full or partial state pushed with the `audio-device-update` event.
///
/// `None` means the field was not part of the update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<DeviceMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefs: Option<DeviceMap>,
}

impl From<StatePatch> for AppState {
    fn from(patch: StatePatch) -> Self {
        let mut state = AppState::default();
        state.merge(patch);
        state
    }
}

/// Global hotkey configuration.
///
/// `code` is a Windows virtual-key code; `key` is the label shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotkeyConfig {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default)]
    pub code: u16,
}

impl HotkeyConfig {
    /// True when no key has been captured.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }

    /// Human readable form, e.g. `CTRL+ALT+M`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if self.shift {
            parts.push("SHIFT");
        }
        if self.ctrl {
            parts.push("CTRL");
        }
        if self.alt {
            parts.push("ALT");
        }
        if self.meta {
            parts.push("META");
        }
        if !self.key.is_empty() {
            parts.push(&self.key);
        }
        parts.join("+")
    }
}

/// Which window a resize notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowTarget {
    Dashboard,
    Overlay,
}

/// Window size carried by resize notifications, in logical points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WindowGeometry {
    pub width: f32,
    pub height: f32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> AppState {
        let mut devices = DeviceMap::new();
        devices.insert("a".into(), DeviceDescriptor::new("a", "Headset"));
        devices.insert("b".into(), DeviceDescriptor::new("b", "Webcam"));
        AppState {
            muted: false,
            selected: "a".into(),
            devices,
            prefs: DeviceMap::new(),
        }
    }

    #[test]
    fn test_decodes_host_field_names() {
        let json = r#"{
            "Muted": true,
            "Selected": "x",
            "Devices": {"x": {"ID": "x", "Name": "USB Mic"}},
            "Prefs": null
        }"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert!(state.muted);
        assert_eq!(state.selected, "x");
        assert_eq!(state.devices["x"].name, "USB Mic");
        assert!(state.prefs.is_empty());
    }

    #[test]
    fn test_merge_keeps_absent_fields() {
        let mut state = sample_state();
        let patch: StatePatch = serde_json::from_str(r#"{"Muted": true}"#).unwrap();

        assert!(state.merge(patch));
        assert!(state.muted);
        assert_eq!(state.selected, "a");
        assert_eq!(state.devices.len(), 2);
    }

    #[test]
    fn test_merge_replaces_maps_wholesale() {
        let mut state = sample_state();
        let patch: StatePatch =
            serde_json::from_str(r#"{"Devices": {"c": {"ID": "c", "Name": "Line In"}}}"#)
                .unwrap();

        state.merge(patch);
        assert_eq!(state.devices.keys().collect::<Vec<_>>(), vec!["c"]);
        assert_eq!(state.selected, "a");
    }

    #[test]
    fn test_merge_reports_no_change() {
        let mut state = sample_state();
        let patch = StatePatch {
            selected: Some("a".into()),
            ..Default::default()
        };
        assert!(!state.merge(patch));
    }

    #[test]
    fn test_selected_device_prefers_pref_descriptor() {
        let mut state = sample_state();
        state
            .prefs
            .insert("a".into(), DeviceDescriptor::new("a", "Headset (saved)"));
        assert_eq!(state.selected_device().unwrap().name, "Headset (saved)");
    }

    #[test]
    fn test_state_from_partial_patch() {
        let state = AppState::from(StatePatch {
            selected: Some("a".into()),
            ..Default::default()
        });
        assert_eq!(state.selected, "a");
        assert!(!state.muted);
        assert!(state.devices.is_empty());
    }

    #[test]
    fn test_hotkey_describe() {
        let config = HotkeyConfig {
            ctrl: true,
            alt: true,
            key: "M".into(),
            code: 0x4D,
            ..Default::default()
        };
        assert_eq!(config.describe(), "CTRL+ALT+M");
        assert!(!config.is_empty());
        assert!(HotkeyConfig::default().is_empty());
    }
}
