//! Keyboard event handling and state management

mod event;
mod state;
pub mod keymap;

pub use event::{key_transitions, KeyEvent, KeyEventKind, KeyboardListener};
pub use state::{KeyEventTracker, KeyStateSnapshot};
pub use keymap::{key_label, KeyCode};
