//! TUI Hanoi (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_hanoi::{core,input,term,types}` so
//! the binary, integration tests and benchmarks share one import path.

pub use tui_hanoi_core as core;
pub use tui_hanoi_input as input;
pub use tui_hanoi_term as term;
pub use tui_hanoi_types as types;
