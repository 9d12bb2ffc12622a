//! Event dispatch: one terminal event in, at most one state change out.
//!
//! Kept apart from `event::read()` so the loop's decisions can be tested
//! without a terminal.

use crossterm::event::{Event, KeyEventKind};
use log::debug;

use crate::core::GameState;
use crate::game_view::Viewport;
use crate::input::handle_key_event;

/// What the loop should do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw and wait for the next event
    Continue,
    /// Viewport changed; the next draw must be a full redraw
    Resized,
    /// Draw the final screen and leave the loop
    Exit,
}

/// Apply a single terminal event.
///
/// Only key presses reach the game; repeats and releases are dropped. Once
/// the puzzle is solved, the next key press ends the session.
pub fn handle_event(state: &mut GameState, viewport: &mut Viewport, event: Event) -> Flow {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if state.is_done() {
                return Flow::Exit;
            }
            if let Some(action) = handle_key_event(key) {
                state.apply_action(action);
            }
            if state.is_quitting() {
                Flow::Exit
            } else {
                Flow::Continue
            }
        }
        Event::Resize(width, height) => {
            debug!("resize {width}x{height}");
            *viewport = Viewport::new(width, height);
            Flow::Resized
        }
        _ => Flow::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn game() -> GameState {
        GameState::with_puzzle(Puzzle::from_pegs(vec![vec![2, 1], vec![], vec![]]))
    }

    #[test]
    fn non_key_events_change_nothing() {
        let mut state = game();
        let mut viewport = Viewport::new(80, 24);
        let flow = handle_event(&mut state, &mut viewport, Event::FocusGained);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(viewport, Viewport::new(80, 24));
        assert_eq!(state.puzzle().peg(0).unwrap(), &[2, 1]);
    }

    #[test]
    fn repeat_is_ignored() {
        let mut state = game();
        let mut viewport = Viewport::new(80, 24);
        let key = KeyEvent::new_with_kind(
            KeyCode::Char('d'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        let flow = handle_event(&mut state, &mut viewport, Event::Key(key));
        assert_eq!(flow, Flow::Continue);
        assert!(state.puzzle().peg(1).unwrap().is_empty());
    }
}
