//! Terminal User Interface components

mod app;
mod keyboard_visual;
pub mod theme;
mod typing_view;
mod widgets;

pub use app::{App, AppState, AppView};
pub use keyboard_visual::{KeyboardVisual, KEYBOARD_HEIGHT};
pub use theme::ThemeColors;
pub use typing_view::TypingPanel;
pub use widgets::*;
