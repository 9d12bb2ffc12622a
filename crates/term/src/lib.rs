//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. Instead of a widget
//! toolkit, the view writes styled text into a framebuffer that the
//! renderer flushes to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so screens can be asserted cell by cell
//! - Pass styling in as a [`Theme`] value rather than global state

pub mod event;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_hanoi_core as core;
pub use tui_hanoi_input as input;
pub use tui_hanoi_types as types;

pub use event::{handle_event, Flow};
pub use fb::{Cell, CellStyle, FrameBuffer, Paint};
pub use game_view::{GameView, Viewport, GOODBYE_MESSAGE, RULES, RULES_TITLE, WIN_MESSAGE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::Theme;
