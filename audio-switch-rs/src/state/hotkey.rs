//! Hotkey capture state machine.
//!
//! While listening, every key-down refreshes the modifier flags. The first
//! printable non-modifier key freezes the combination and stops listening.
//! Only [`HotkeyRecorder::clear`] followed by [`HotkeyRecorder::resume`] starts
//! a new capture.

use audio_switch_bridge::HotkeyConfig;

/// A printable key that completes a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedKey {
    /// Upper-cased label
    pub label: String,
    /// Windows virtual-key code
    pub code: u16,
}

/// One key-down as seen by the recorder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Set only for printable keys on the main keyboard block
    pub key: Option<CapturedKey>,
}

/// Local hotkey capture session.
#[derive(Debug, Clone)]
pub struct HotkeyRecorder {
    config: HotkeyConfig,
    listening: bool,
}

impl HotkeyRecorder {
    pub fn new() -> Self {
        Self {
            config: HotkeyConfig::default(),
            listening: true,
        }
    }

    /// Combination captured so far.
    pub fn config(&self) -> &HotkeyConfig {
        &self.config
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// A key has been captured.
    pub fn is_complete(&self) -> bool {
        !self.config.is_empty()
    }

    /// Take the host's configuration as the starting point.
    ///
    /// Listening mode is left as is, matching what the host reports does not
    /// end a capture in progress.
    pub fn load(&mut self, config: HotkeyConfig) {
        self.config = config;
    }

    /// Feed a key-down. Returns `true` if the capture state changed.
    pub fn key_down(&mut self, input: &KeyInput) -> bool {
        if !self.listening {
            return false;
        }

        let before = self.config.clone();
        self.config.shift = input.shift;
        self.config.ctrl = input.ctrl;
        self.config.alt = input.alt;
        self.config.meta = input.meta;

        if let Some(key) = &input.key {
            self.config.key = key.label.to_uppercase();
            self.config.code = key.code;
            self.listening = false;
            return true;
        }

        self.config != before
    }

    /// Reset to an empty configuration and return it.
    ///
    /// The caller unregisters upstream, then calls [`resume`](Self::resume).
    pub fn clear(&mut self) -> HotkeyConfig {
        self.config = HotkeyConfig::default();
        self.config.clone()
    }

    /// Re-enter listening mode.
    pub fn resume(&mut self) {
        self.listening = true;
    }
}

impl Default for HotkeyRecorder {
    fn default() -> Self {
        Self::new()
    }
}
