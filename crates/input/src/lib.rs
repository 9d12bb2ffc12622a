//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] through a
//! static binding table. The same table feeds the help panel, so the keys
//! shown on screen are always the keys that work.

pub mod map;

pub use tui_hanoi_types as types;

pub use map::{binding, handle_key_event, should_quit, KeyBinding, BINDINGS, FULL_HELP, SHORT_HELP};
