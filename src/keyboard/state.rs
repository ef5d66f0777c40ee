//! Keyboard state tracking

use super::{KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use std::collections::BTreeSet;

/// Read-only copy of the tracker state.
///
/// Owns its sets, so nothing done to a snapshot can reach back into the
/// tracker that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStateSnapshot {
    /// Keys currently believed to be held
    pub active: BTreeSet<KeyCode>,
    /// Keys pressed at least once since the last reset
    pub tested: BTreeSet<KeyCode>,
    /// Most recent fresh (non-repeat) press
    pub last_key: Option<KeyCode>,
    /// Highest number of simultaneously held keys since the last reset
    pub max_rollover: usize,
}

impl KeyStateSnapshot {
    pub fn is_active(&self, code: &str) -> bool {
        self.active.contains(code)
    }

    pub fn is_tested(&self, code: &str) -> bool {
        self.tested.contains(code)
    }
}

/// Converts a possibly lossy stream of press/release events into a
/// consistent model of held and ever-pressed keys.
///
/// Out-of-order, duplicated and orphaned events are tolerated: inserts and
/// removals are idempotent and never fail.
#[derive(Debug, Default)]
pub struct KeyEventTracker {
    active: BTreeSet<KeyCode>,
    tested: BTreeSet<KeyCode>,
    last_key: Option<KeyCode>,
    max_rollover: usize,
}

impl KeyEventTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a raw event to the matching handler
    pub fn process_event(&mut self, event: &KeyEvent) -> KeyStateSnapshot {
        match event.kind {
            KeyEventKind::Down => self.on_key_down(&event.code, event.repeat),
            KeyEventKind::Up => self.on_key_up(&event.code),
        }
    }

    /// Record a key going down. Auto-repeat downs are ignored entirely.
    pub fn on_key_down(&mut self, code: &KeyCode, is_repeat: bool) -> KeyStateSnapshot {
        if !is_repeat {
            self.active.insert(code.clone());
            self.tested.insert(code.clone());
            self.last_key = Some(code.clone());
            self.max_rollover = self.max_rollover.max(self.active.len());
        }
        self.snapshot()
    }

    /// Record a key coming up. Releasing a key that isn't held is a no-op.
    pub fn on_key_up(&mut self, code: &KeyCode) -> KeyStateSnapshot {
        self.active.remove(code);
        self.snapshot()
    }

    /// Forget tested keys and the last key. Held keys stay held.
    pub fn reset(&mut self) -> KeyStateSnapshot {
        debug!("tracker reset, {} key(s) still held", self.active.len());
        self.tested.clear();
        self.last_key = None;
        self.max_rollover = self.active.len();
        self.snapshot()
    }

    /// Drop every held key, e.g. when focus is lost and key-ups will never
    /// arrive. Tested keys are kept.
    pub fn release_all(&mut self) -> KeyStateSnapshot {
        if !self.active.is_empty() {
            debug!("releasing {} held key(s)", self.active.len());
        }
        self.active.clear();
        self.snapshot()
    }

    pub fn snapshot(&self) -> KeyStateSnapshot {
        KeyStateSnapshot {
            active: self.active.clone(),
            tested: self.tested.clone(),
            last_key: self.last_key.clone(),
            max_rollover: self.max_rollover,
        }
    }

    pub fn is_active(&self, code: &KeyCode) -> bool {
        self.active.contains(code)
    }

    pub fn is_tested(&self, code: &KeyCode) -> bool {
        self.tested.contains(code)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn tested_count(&self) -> usize {
        self.tested.len()
    }

    pub fn last_key(&self) -> Option<&KeyCode> {
        self.last_key.as_ref()
    }

    pub fn max_rollover(&self) -> usize {
        self.max_rollover
    }
}
