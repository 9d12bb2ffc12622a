//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the puzzle rules and the session state driven by
//! player actions. It has **no dependencies** on the terminal, so every rule
//! can be exercised from plain unit tests.
//!
//! # Module Structure
//!
//! - [`puzzle`]: pegs, disks, the move rule, win check and reset
//! - [`game_state`]: cursor, status line and overlay toggles around a puzzle
//! - [`rng`]: seeded shuffling for the random initial stack
//!
//! # Rules
//!
//! - Only the top disk of a peg can move
//! - A disk may not be placed on a smaller disk
//! - The game is won when the first peg is empty and the last peg holds
//!   every disk
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::{GameState, Puzzle};
//! use tui_hanoi_types::GameAction;
//!
//! let puzzle = Puzzle::from_pegs(vec![vec![2, 1], vec![], vec![]]);
//! let mut game = GameState::with_puzzle(puzzle);
//!
//! game.apply_action(GameAction::MoveDiskRight); // 1 -> B
//! game.apply_action(GameAction::MoveDiskLeft);  // 2 -> C
//! game.apply_action(GameAction::CursorRight);
//! game.apply_action(GameAction::MoveDiskRight); // 1 -> C
//!
//! assert!(game.is_done());
//! ```

pub mod game_state;
pub mod puzzle;
pub mod rng;

pub use tui_hanoi_types as types;

pub use game_state::{GameState, Status, RESET_MESSAGE};
pub use puzzle::{next_peg, prev_peg, HanoiError, Puzzle};
pub use rng::SimpleRng;
