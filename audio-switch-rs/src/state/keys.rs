//! Keyboard translation for hotkey capture.
//!
//! Maps egui keys onto the label shown to the user and the Windows
//! virtual-key code the host registers.

use super::hotkey::{CapturedKey, KeyInput};
use eframe::egui::{Key, Modifiers};

const VK_SPACE: u16 = 0x20;
const VK_OEM_1: u16 = 0xBA; // ;
const VK_OEM_PLUS: u16 = 0xBB;
const VK_OEM_COMMA: u16 = 0xBC;
const VK_OEM_MINUS: u16 = 0xBD;
const VK_OEM_PERIOD: u16 = 0xBE;
const VK_OEM_2: u16 = 0xBF; // /
const VK_OEM_3: u16 = 0xC0; // `
const VK_OEM_4: u16 = 0xDB; // [
const VK_OEM_5: u16 = 0xDC; // \
const VK_OEM_6: u16 = 0xDD; // ]
const VK_OEM_7: u16 = 0xDE; // '

/// Translate a printable key on the main keyboard block.
///
/// Returns `None` for modifier, function, navigation and editing keys,
/// which never complete a capture.
pub fn capture_key(key: Key) -> Option<CapturedKey> {
    let (label, code) = match key {
        Key::A => ("A", 0x41),
        Key::B => ("B", 0x42),
        Key::C => ("C", 0x43),
        Key::D => ("D", 0x44),
        Key::E => ("E", 0x45),
        Key::F => ("F", 0x46),
        Key::G => ("G", 0x47),
        Key::H => ("H", 0x48),
        Key::I => ("I", 0x49),
        Key::J => ("J", 0x4A),
        Key::K => ("K", 0x4B),
        Key::L => ("L", 0x4C),
        Key::M => ("M", 0x4D),
        Key::N => ("N", 0x4E),
        Key::O => ("O", 0x4F),
        Key::P => ("P", 0x50),
        Key::Q => ("Q", 0x51),
        Key::R => ("R", 0x52),
        Key::S => ("S", 0x53),
        Key::T => ("T", 0x54),
        Key::U => ("U", 0x55),
        Key::V => ("V", 0x56),
        Key::W => ("W", 0x57),
        Key::X => ("X", 0x58),
        Key::Y => ("Y", 0x59),
        Key::Z => ("Z", 0x5A),
        Key::Num0 => ("0", 0x30),
        Key::Num1 => ("1", 0x31),
        Key::Num2 => ("2", 0x32),
        Key::Num3 => ("3", 0x33),
        Key::Num4 => ("4", 0x34),
        Key::Num5 => ("5", 0x35),
        Key::Num6 => ("6", 0x36),
        Key::Num7 => ("7", 0x37),
        Key::Num8 => ("8", 0x38),
        Key::Num9 => ("9", 0x39),
        Key::Space => ("SPACE", VK_SPACE),
        Key::Semicolon => (";", VK_OEM_1),
        Key::Equals => ("=", VK_OEM_PLUS),
        Key::Comma => (",", VK_OEM_COMMA),
        Key::Minus => ("-", VK_OEM_MINUS),
        Key::Period => (".", VK_OEM_PERIOD),
        Key::Slash => ("/", VK_OEM_2),
        Key::Backtick => ("`", VK_OEM_3),
        Key::OpenBracket => ("[", VK_OEM_4),
        Key::Backslash => ("\\", VK_OEM_5),
        Key::CloseBracket => ("]", VK_OEM_6),
        Key::Quote => ("'", VK_OEM_7),
        _ => return None,
    };

    Some(CapturedKey {
        label: label.to_string(),
        code,
    })
}

/// Modifier-only key-down.
pub fn modifier_input(modifiers: Modifiers) -> KeyInput {
    KeyInput {
        shift: modifiers.shift,
        ctrl: modifiers.ctrl,
        alt: modifiers.alt,
        meta: modifiers.mac_cmd,
        key: None,
    }
}

/// Key-down of `key` with `modifiers` held.
///
/// The physical key decides what is captured: with Shift held egui reports
/// the shifted symbol as the logical key (`Plus` for `=`, `Colon` for `;`).
pub fn key_input(key: Key, physical_key: Option<Key>, modifiers: Modifiers) -> KeyInput {
    KeyInput {
        key: physical_key
            .and_then(capture_key)
            .or_else(|| capture_key(key)),
        ..modifier_input(modifiers)
    }
}
