//! Core types module - shared constants and actions
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the puzzle model, the key mapping and the terminal view.
//!
//! # Puzzle Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PEG_COUNT` | 3 | Number of pegs on the board |
//! | `DISK_COUNT` | 5 | Number of disks in a game |
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{GameAction, DISK_COUNT, PEG_COUNT};
//!
//! assert_eq!(GameAction::MoveDiskLeft.as_str(), "moveDiskLeft");
//!
//! assert_eq!(PEG_COUNT, 3);
//! assert_eq!(DISK_COUNT, 5);
//! ```

/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// Number of disks in a game (sizes 1..=DISK_COUNT)
pub const DISK_COUNT: usize = 5;

/// Viewport assumed before the terminal reports its real size.
pub const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

/// Size of a disk. Smaller values must sit on top of larger ones.
pub type Disk = u8;

/// Logical actions the player can trigger
///
/// Keys are mapped onto these by the input crate; the controller state only
/// ever sees actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Leave the game
    Quit,
    /// Expand or collapse the key-binding help panel
    ToggleHelp,
    /// Show or hide the rules panel
    ToggleRules,
    /// Select the peg to the left (wraps around)
    CursorLeft,
    /// Select the peg to the right (wraps around)
    CursorRight,
    /// Move the top disk of the selected peg onto the peg to its left
    MoveDiskLeft,
    /// Move the top disk of the selected peg onto the peg to its right
    MoveDiskRight,
    /// Restore the initial layout
    Reset,
}

impl GameAction {
    /// Every action, in help-panel order.
    pub const ALL: [GameAction; 8] = [
        GameAction::Reset,
        GameAction::Quit,
        GameAction::ToggleHelp,
        GameAction::ToggleRules,
        GameAction::CursorLeft,
        GameAction::CursorRight,
        GameAction::MoveDiskLeft,
        GameAction::MoveDiskRight,
    ];

    /// Convert to camelCase name (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Quit => "quit",
            GameAction::ToggleHelp => "toggleHelp",
            GameAction::ToggleRules => "toggleRules",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::MoveDiskLeft => "moveDiskLeft",
            GameAction::MoveDiskRight => "moveDiskRight",
            GameAction::Reset => "reset",
        }
    }
}

/// Letter used to label a peg on screen (`A`, `B`, `C`, ...).
pub fn peg_label(peg: usize) -> char {
    (b'A' + (peg % 26) as u8) as char
}
