//! Root state store.
//!
//! Mirrors the host's application state. The only writers are the answer to
//! the initial query and the host's push updates.

use audio_switch_bridge::{AppState, StatePatch};

/// Disposable cache of the host's application state.
#[derive(Debug, Default)]
pub struct StateStore {
    state: AppState,
    revision: u64,
    loaded: bool,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Bumped on every change, used to invalidate derived views.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether any state has been received from the host yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Overwrite everything with a full snapshot.
    pub fn replace(&mut self, state: AppState) {
        self.loaded = true;
        if self.state != state {
            self.state = state;
            self.revision += 1;
        }
    }

    /// Merge a push update, keeping fields the update does not carry.
    pub fn merge(&mut self, patch: StatePatch) {
        self.loaded = true;
        if self.state.merge(patch) {
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audio_switch_bridge::{DeviceDescriptor, DeviceMap};

    fn snapshot() -> AppState {
        let mut devices = DeviceMap::new();
        devices.insert("mic".into(), DeviceDescriptor::new("mic", "Desk Mic"));
        let mut prefs = DeviceMap::new();
        prefs.insert("mic".into(), DeviceDescriptor::new("mic", "Desk Mic"));
        AppState {
            muted: false,
            selected: "mic".into(),
            devices,
            prefs,
        }
    }

    #[test]
    fn test_replace_bumps_revision_only_on_change() {
        let mut store = StateStore::new();
        assert!(!store.is_loaded());

        store.replace(snapshot());
        assert!(store.is_loaded());
        assert_eq!(store.revision(), 1);

        store.replace(snapshot());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_partial_update_preserves_absent_fields() {
        let mut store = StateStore::new();
        store.replace(snapshot());

        store.merge(StatePatch {
            muted: Some(true),
            ..Default::default()
        });

        let state = store.state();
        assert!(state.muted);
        assert_eq!(state.selected, "mic");
        assert_eq!(state.devices.len(), 1);
        assert_eq!(state.prefs.len(), 1);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_merge_before_initial_load() {
        let mut store = StateStore::new();
        store.merge(StatePatch {
            selected: Some("mic".into()),
            ..Default::default()
        });
        assert!(store.is_loaded());
        assert_eq!(store.state().selected, "mic");
        assert!(store.state().devices.is_empty());
    }
}
