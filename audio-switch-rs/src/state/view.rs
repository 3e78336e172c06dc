//! Derived per-device view.
//!
//! Combines the present devices with the preferred-device mapping into one
//! entry per identifier.

use super::store::StateStore;
use audio_switch_bridge::AppState;
use std::collections::BTreeMap;

/// Label shown when the selected id matches no known device.
pub const NO_DEVICE_SELECTED: &str = "No Device Selected";

/// A device as rendered in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceView {
    pub id: String,
    pub name: String,
    /// Id is a key of the preferred mapping
    pub preferred: bool,
    /// Id is a key of the present-devices mapping
    pub connected: bool,
}

/// Derive the view entries for `state`, sorted by name.
pub fn derive(state: &AppState) -> Vec<DeviceView> {
    let mut entries: BTreeMap<&str, DeviceView> = BTreeMap::new();

    for (id, device) in &state.devices {
        entries.insert(
            id,
            DeviceView {
                id: id.clone(),
                name: device.name.clone(),
                preferred: false,
                connected: true,
            },
        );
    }

    // Preferred descriptors win over present ones.
    for (id, device) in &state.prefs {
        entries.insert(
            id,
            DeviceView {
                id: id.clone(),
                name: device.name.clone(),
                preferred: true,
                connected: state.devices.contains_key(id),
            },
        );
    }

    let mut views: Vec<DeviceView> = entries.into_values().collect();
    views.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    views
}

/// Name of the selected device, or [`NO_DEVICE_SELECTED`].
pub fn selected_label(state: &AppState) -> &str {
    match state.selected_device() {
        Some(device) if !device.name.is_empty() => device.name.as_str(),
        _ => NO_DEVICE_SELECTED,
    }
}

/// Cached view, recomputed when the store revision moves.
#[derive(Debug, Default)]
pub struct DeviceList {
    views: Vec<DeviceView>,
    revision: Option<u64>,
}

impl DeviceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cache up to date with `store`. Returns `true` if recomputed.
    pub fn sync(&mut self, store: &StateStore) -> bool {
        if self.revision == Some(store.revision()) {
            return false;
        }
        self.views = derive(store.state());
        self.revision = Some(store.revision());
        true
    }

    pub fn views(&self) -> &[DeviceView] {
        &self.views
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
