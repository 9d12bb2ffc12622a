//! Game state module - controller state for an interactive session
//!
//! Wraps a [`Puzzle`] with everything the view needs: the selected peg,
//! the status line and the overlay toggles. All input arrives as
//! [`GameAction`]s; this module never touches the terminal.

use log::{debug, info};

use crate::puzzle::{next_peg, prev_peg, HanoiError, Puzzle};
use crate::rng::SimpleRng;
use crate::types::{GameAction, DISK_COUNT, PEG_COUNT};

/// Message shown after a reset.
pub const RESET_MESSAGE: &str = "game reset";

/// Line shown under the board until the next action overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Last move was rejected
    Error(HanoiError),
    /// Informational message
    Info(&'static str),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    puzzle: Puzzle,
    cursor: usize,
    status: Option<Status>,
    show_rules: bool,
    show_help: bool,
    quitting: bool,
    done: bool,
}

impl GameState {
    /// Create a standard game (3 pegs, 5 disks) from the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self::with_puzzle(Puzzle::new(PEG_COUNT, DISK_COUNT, &mut rng))
    }

    /// Create a session around an existing puzzle
    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        let done = puzzle.is_finished();
        Self {
            puzzle,
            cursor: 0,
            status: None,
            show_rules: false,
            show_help: false,
            quitting: false,
            done,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Index of the selected peg.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn show_rules(&self) -> bool {
        self.show_rules
    }

    /// Whether the full help panel is expanded.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Whether the puzzle has been solved.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Apply a single player action
    pub fn apply_action(&mut self, action: GameAction) {
        debug!("action {} (cursor={})", action.as_str(), self.cursor);
        let pegs = self.puzzle.peg_count();

        match action {
            GameAction::Quit => self.quitting = true,
            GameAction::ToggleHelp => self.show_help = !self.show_help,
            GameAction::ToggleRules => self.show_rules = !self.show_rules,
            GameAction::CursorLeft => self.cursor = prev_peg(self.cursor, pegs),
            GameAction::CursorRight => self.cursor = next_peg(self.cursor, pegs),
            GameAction::MoveDiskLeft => self.move_from_cursor(prev_peg(self.cursor, pegs)),
            GameAction::MoveDiskRight => self.move_from_cursor(next_peg(self.cursor, pegs)),
            GameAction::Reset => {
                self.puzzle.reset();
                self.status = Some(Status::Info(RESET_MESSAGE));
                info!("puzzle reset to initial layout");
            }
        }

        let was_done = self.done;
        self.done = self.puzzle.is_finished();
        if self.done && !was_done {
            info!("puzzle solved");
        }
    }

    fn move_from_cursor(&mut self, to: usize) {
        match self.puzzle.move_disk(self.cursor, to) {
            Ok(()) => self.status = None,
            Err(err) => {
                debug!("rejected move {} -> {}: {}", self.cursor, to, err);
                self.status = Some(Status::Error(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Disk;

    fn sorted_game() -> GameState {
        let first: Vec<Disk> = vec![3, 2, 1];
        GameState::with_puzzle(Puzzle::from_pegs(vec![first, vec![], vec![]]))
    }

    #[test]
    fn new_game_starts_on_first_peg() {
        let gs = GameState::new(1);
        assert_eq!(gs.cursor(), 0);
        assert_eq!(gs.status(), None);
        assert!(!gs.is_quitting());
        assert!(!gs.is_done());
        assert_eq!(gs.puzzle().disk_count(), DISK_COUNT);
        assert_eq!(gs.puzzle().peg_count(), PEG_COUNT);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::CursorLeft);
        assert_eq!(gs.cursor(), 2);
        gs.apply_action(GameAction::CursorRight);
        assert_eq!(gs.cursor(), 0);
        gs.apply_action(GameAction::CursorRight);
        gs.apply_action(GameAction::CursorRight);
        gs.apply_action(GameAction::CursorRight);
        assert_eq!(gs.cursor(), 0);
    }

    #[test]
    fn successful_move_keeps_cursor_and_clears_status() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::Reset);
        gs.apply_action(GameAction::MoveDiskRight);
        assert_eq!(gs.cursor(), 0);
        assert_eq!(gs.status(), None);
        assert_eq!(gs.puzzle().peg(1).unwrap(), &[1]);
    }

    #[test]
    fn failed_move_records_error_and_keeps_cursor() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::CursorRight);
        gs.apply_action(GameAction::MoveDiskRight);
        assert_eq!(gs.cursor(), 1);
        assert_eq!(
            gs.status(),
            Some(Status::Error(HanoiError::EmptyPeg { peg: 1 }))
        );
    }

    #[test]
    fn move_left_wraps_to_last_peg() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::MoveDiskLeft);
        assert_eq!(gs.puzzle().peg(2).unwrap(), &[1]);
    }

    #[test]
    fn reset_sets_info_message() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::MoveDiskRight);
        gs.apply_action(GameAction::Reset);
        assert_eq!(gs.status(), Some(Status::Info(RESET_MESSAGE)));
        assert_eq!(gs.puzzle().peg(0).unwrap(), &[3, 2, 1]);
    }

    #[test]
    fn toggles_flip() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::ToggleRules);
        gs.apply_action(GameAction::ToggleHelp);
        assert!(gs.show_rules());
        assert!(gs.show_help());
        gs.apply_action(GameAction::ToggleRules);
        gs.apply_action(GameAction::ToggleHelp);
        assert!(!gs.show_rules());
        assert!(!gs.show_help());
    }

    #[test]
    fn moves_still_apply_while_rules_are_shown() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::ToggleRules);
        gs.apply_action(GameAction::MoveDiskRight);
        assert_eq!(gs.puzzle().peg(1).unwrap(), &[1]);
    }

    #[test]
    fn quit_ends_session() {
        let mut gs = sorted_game();
        gs.apply_action(GameAction::Quit);
        assert!(gs.is_quitting());
        assert!(!gs.is_done());
    }

    #[test]
    fn done_follows_the_win_predicate() {
        let puzzle = Puzzle::from_pegs(vec![vec![], vec![1], vec![2]]);
        let mut gs = GameState::with_puzzle(puzzle);
        assert!(!gs.is_done());
        gs.cursor = 1;
        gs.apply_action(GameAction::MoveDiskRight);
        assert!(gs.is_done());
    }
}
