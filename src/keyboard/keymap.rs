//! Key code definitions and keyboard layout tables

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Represents a physical key code.
///
/// Codes are opaque hardware identifiers in the W3C `KeyboardEvent.code`
/// style (`KeyA`, `Digit1`, `ShiftLeft`). Two codes are equal only when
/// their strings are identical; unknown codes are carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(String);

impl KeyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for KeyCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl Borrow<str> for KeyCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<device_query::Keycode> for KeyCode {
    fn from(keycode: device_query::Keycode) -> Self {
        use device_query::Keycode as DK;
        // Map device_query keycodes to layout-independent W3C codes
        let code = match keycode {
            DK::Escape => "Escape",
            DK::F1 => "F1",
            DK::F2 => "F2",
            DK::F3 => "F3",
            DK::F4 => "F4",
            DK::F5 => "F5",
            DK::F6 => "F6",
            DK::F7 => "F7",
            DK::F8 => "F8",
            DK::F9 => "F9",
            DK::F10 => "F10",
            DK::F11 => "F11",
            DK::F12 => "F12",
            DK::Grave => "Backquote",
            DK::Key1 => "Digit1",
            DK::Key2 => "Digit2",
            DK::Key3 => "Digit3",
            DK::Key4 => "Digit4",
            DK::Key5 => "Digit5",
            DK::Key6 => "Digit6",
            DK::Key7 => "Digit7",
            DK::Key8 => "Digit8",
            DK::Key9 => "Digit9",
            DK::Key0 => "Digit0",
            DK::Minus => "Minus",
            DK::Equal => "Equal",
            DK::Backspace => "Backspace",
            DK::Tab => "Tab",
            DK::Q => "KeyQ",
            DK::W => "KeyW",
            DK::E => "KeyE",
            DK::R => "KeyR",
            DK::T => "KeyT",
            DK::Y => "KeyY",
            DK::U => "KeyU",
            DK::I => "KeyI",
            DK::O => "KeyO",
            DK::P => "KeyP",
            DK::LeftBracket => "BracketLeft",
            DK::RightBracket => "BracketRight",
            DK::BackSlash => "Backslash",
            DK::CapsLock => "CapsLock",
            DK::A => "KeyA",
            DK::S => "KeyS",
            DK::D => "KeyD",
            DK::F => "KeyF",
            DK::G => "KeyG",
            DK::H => "KeyH",
            DK::J => "KeyJ",
            DK::K => "KeyK",
            DK::L => "KeyL",
            DK::Semicolon => "Semicolon",
            DK::Apostrophe => "Quote",
            DK::Enter => "Enter",
            DK::LShift => "ShiftLeft",
            DK::Z => "KeyZ",
            DK::X => "KeyX",
            DK::C => "KeyC",
            DK::V => "KeyV",
            DK::B => "KeyB",
            DK::N => "KeyN",
            DK::M => "KeyM",
            DK::Comma => "Comma",
            DK::Dot => "Period",
            DK::Slash => "Slash",
            DK::RShift => "ShiftRight",
            DK::LControl => "ControlLeft",
            DK::LMeta => "MetaLeft",
            DK::LAlt => "AltLeft",
            DK::Space => "Space",
            DK::RAlt => "AltRight",
            DK::RMeta => "MetaRight",
            DK::RControl => "ControlRight",
            DK::Insert => "Insert",
            DK::Home => "Home",
            DK::PageUp => "PageUp",
            DK::Delete => "Delete",
            DK::End => "End",
            DK::PageDown => "PageDown",
            DK::Up => "ArrowUp",
            DK::Left => "ArrowLeft",
            DK::Down => "ArrowDown",
            DK::Right => "ArrowRight",
            DK::Numpad0 => "Numpad0",
            DK::Numpad1 => "Numpad1",
            DK::Numpad2 => "Numpad2",
            DK::Numpad3 => "Numpad3",
            DK::Numpad4 => "Numpad4",
            DK::Numpad5 => "Numpad5",
            DK::Numpad6 => "Numpad6",
            DK::Numpad7 => "Numpad7",
            DK::Numpad8 => "Numpad8",
            DK::Numpad9 => "Numpad9",
            DK::NumpadSubtract => "NumpadSubtract",
            DK::NumpadAdd => "NumpadAdd",
            DK::NumpadDivide => "NumpadDivide",
            DK::NumpadMultiply => "NumpadMultiply",
            // Anything else is tracked under its device_query name
            other => return Self(format!("{:?}", other)),
        };
        Self::from(code)
    }
}

/// Main block, one slice per physical row
pub const SECTION_MAIN: &[&[&str]] = &[
    &[
        "Escape", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ],
    &[
        "Backquote", "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7",
        "Digit8", "Digit9", "Digit0", "Minus", "Equal", "Backspace",
    ],
    &[
        "Tab", "KeyQ", "KeyW", "KeyE", "KeyR", "KeyT", "KeyY", "KeyU", "KeyI", "KeyO", "KeyP",
        "BracketLeft", "BracketRight", "Backslash",
    ],
    &[
        "CapsLock", "KeyA", "KeyS", "KeyD", "KeyF", "KeyG", "KeyH", "KeyJ", "KeyK", "KeyL",
        "Semicolon", "Quote", "Enter",
    ],
    &[
        "ShiftLeft", "KeyZ", "KeyX", "KeyC", "KeyV", "KeyB", "KeyN", "KeyM", "Comma", "Period",
        "Slash", "ShiftRight",
    ],
    &[
        "ControlLeft", "MetaLeft", "AltLeft", "Space", "AltRight", "MetaRight", "ContextMenu",
        "ControlRight",
    ],
];

/// Navigation cluster above the arrows
pub const SECTION_NAV: &[&[&str]] = &[
    &["PrintScreen", "ScrollLock", "Pause"],
    &["Insert", "Home", "PageUp"],
    &["Delete", "End", "PageDown"],
];

/// Inverted-T arrow cluster
pub const SECTION_ARROWS: &[&[&str]] = &[
    &["ArrowUp"],
    &["ArrowLeft", "ArrowDown", "ArrowRight"],
];

/// Numpad rows. Tall keys (`NumpadAdd`, `NumpadEnter`) appear once, on
/// the upper row they occupy.
pub const SECTION_NUMPAD: &[&[&str]] = &[
    &["NumLock", "NumpadDivide", "NumpadMultiply", "NumpadSubtract"],
    &["Numpad7", "Numpad8", "Numpad9", "NumpadAdd"],
    &["Numpad4", "Numpad5", "Numpad6"],
    &["Numpad1", "Numpad2", "Numpad3", "NumpadEnter"],
    &["Numpad0", "NumpadDecimal"],
];

/// Short labels for keys whose code doesn't read well on a keycap
static LABELS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("Backquote", "~"),
        ("Minus", "-"),
        ("Equal", "="),
        ("BracketLeft", "["),
        ("BracketRight", "]"),
        ("Backslash", "\\"),
        ("Semicolon", ";"),
        ("Quote", "'"),
        ("Comma", ","),
        ("Period", "."),
        ("Slash", "/"),
        ("Space", ""),
        ("ControlLeft", "Ctrl"),
        ("MetaLeft", "Win"),
        ("AltLeft", "Alt"),
        ("ControlRight", "Ctrl"),
        ("MetaRight", "Win"),
        ("AltRight", "Alt"),
        ("ShiftLeft", "Shift"),
        ("ShiftRight", "Shift"),
        ("Backspace", "Backspace"),
        ("Enter", "Enter"),
        ("CapsLock", "Caps"),
        ("Tab", "Tab"),
        ("ContextMenu", "Fn"),
        ("Escape", "ESC"),
        ("PrintScreen", "PrtSc"),
        ("ScrollLock", "ScrLk"),
        ("Pause", "Pause"),
        ("Insert", "Ins"),
        ("Home", "Home"),
        ("PageUp", "PgUp"),
        ("Delete", "Del"),
        ("End", "End"),
        ("PageDown", "PgDn"),
        ("ArrowUp", "↑"),
        ("ArrowLeft", "←"),
        ("ArrowDown", "↓"),
        ("ArrowRight", "→"),
        ("NumLock", "Num"),
        ("NumpadDivide", "/"),
        ("NumpadMultiply", "*"),
        ("NumpadSubtract", "-"),
        ("NumpadAdd", "+"),
        ("NumpadEnter", "Ent"),
        ("NumpadDecimal", "."),
        ("Numpad0", "0"),
        ("Numpad1", "1"),
        ("Numpad2", "2"),
        ("Numpad3", "3"),
        ("Numpad4", "4"),
        ("Numpad5", "5"),
        ("Numpad6", "6"),
        ("Numpad7", "7"),
        ("Numpad8", "8"),
        ("Numpad9", "9"),
    ])
});

/// Keycap label for a code.
///
/// Falls back to the code itself with any `Key`/`Digit` prefix stripped,
/// so `KeyQ` renders as `Q` and unknown codes render verbatim.
pub fn key_label(code: &str) -> &str {
    if let Some(label) = LABELS.get(code) {
        return *label;
    }
    code.strip_prefix("Key")
        .or_else(|| code.strip_prefix("Digit"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(code)
}
