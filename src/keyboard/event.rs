//! Keyboard event types and listener

use super::KeyCode;
use device_query::{DeviceQuery, DeviceState};
use std::sync::mpsc;

/// Direction of a key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    /// Key went down
    Down,
    /// Key came up
    Up,
}

/// A raw key transition as delivered by the input source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Physical key code
    pub code: KeyCode,
    /// Down or up
    pub kind: KeyEventKind,
    /// Set on auto-repeat downs generated while a key is held
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(code: impl Into<KeyCode>, kind: KeyEventKind, repeat: bool) -> Self {
        Self {
            code: code.into(),
            kind,
            repeat,
        }
    }

    pub fn down(code: impl Into<KeyCode>) -> Self {
        Self::new(code, KeyEventKind::Down, false)
    }

    pub fn repeat(code: impl Into<KeyCode>) -> Self {
        Self::new(code, KeyEventKind::Down, true)
    }

    pub fn up(code: impl Into<KeyCode>) -> Self {
        Self::new(code, KeyEventKind::Up, false)
    }
}

/// Events that turn the held set `last` into `current`: downs for new
/// keys, then ups for keys no longer held.
pub fn key_transitions<K>(last: &[K], current: &[K]) -> Vec<KeyEvent>
where
    K: Copy + PartialEq,
    KeyCode: From<K>,
{
    let downs = current
        .iter()
        .filter(|key| !last.contains(key))
        .map(|key| KeyEvent::down(KeyCode::from(*key)));
    let ups = last
        .iter()
        .filter(|key| !current.contains(key))
        .map(|key| KeyEvent::up(KeyCode::from(*key)));
    downs.chain(ups).collect()
}

/// Keyboard listener that polls physical key state and emits transitions.
///
/// Polling sees held keys as a set, so it never produces repeat events.
pub struct KeyboardListener {
    device_state: DeviceState,
    last_keys: Vec<device_query::Keycode>,
    event_tx: mpsc::Sender<KeyEvent>,
}

impl KeyboardListener {
    /// Create a new keyboard listener
    pub fn new(event_tx: mpsc::Sender<KeyEvent>) -> Self {
        Self {
            device_state: DeviceState::new(),
            last_keys: Vec::new(),
            event_tx,
        }
    }

    /// Poll for keyboard state changes
    /// Returns the number of events generated
    pub fn poll(&mut self) -> usize {
        let current_keys = self.device_state.get_keys();
        let events = key_transitions(&self.last_keys, &current_keys);
        let event_count = events.len();
        for event in events {
            let _ = self.event_tx.send(event);
        }
        self.last_keys = current_keys;
        event_count
    }

    /// Forget the previously seen keys so the next poll reports every
    /// held key as a fresh down.
    pub fn resync(&mut self) {
        self.last_keys.clear();
    }
}
