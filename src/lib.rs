//! KeiX - keyboard switch tester and typing speed trainer
//!
//! Two independent pieces of logic sit behind a thin terminal front end:
//! [`keyboard::KeyEventTracker`] turns raw press/release events into held
//! and tested key sets, and [`typing::TypingSession`] scores a typing
//! exercise against a reference passage.

pub mod config;
pub mod keyboard;
pub mod typing;
pub mod ui;

pub use config::Config;
