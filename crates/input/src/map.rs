//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that trigger one action, plus how the help panel describes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub action: GameAction,
    pub keys: &'static [KeyCode],
    /// Key as printed in the help panel
    pub help_key: &'static str,
    pub help_desc: &'static str,
}

impl KeyBinding {
    pub fn matches(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }
}

/// Every binding, in help-panel order.
pub static BINDINGS: [KeyBinding; 8] = [
    KeyBinding {
        action: GameAction::Reset,
        keys: &[KeyCode::Char('r'), KeyCode::Char('R')],
        help_key: "r",
        help_desc: "Reload",
    },
    KeyBinding {
        action: GameAction::Quit,
        keys: &[KeyCode::Char('q'), KeyCode::Esc],
        help_key: "q",
        help_desc: "Quit",
    },
    KeyBinding {
        action: GameAction::ToggleHelp,
        keys: &[KeyCode::Char('?')],
        help_key: "?",
        help_desc: "Expand help",
    },
    KeyBinding {
        action: GameAction::ToggleRules,
        keys: &[KeyCode::Char('f')],
        help_key: "f",
        help_desc: "View rules",
    },
    KeyBinding {
        action: GameAction::CursorLeft,
        keys: &[KeyCode::Left],
        help_key: "←",
        help_desc: "Move cursor left",
    },
    KeyBinding {
        action: GameAction::CursorRight,
        keys: &[KeyCode::Right],
        help_key: "→",
        help_desc: "Move cursor right",
    },
    KeyBinding {
        action: GameAction::MoveDiskLeft,
        keys: &[KeyCode::Char('a'), KeyCode::Char('A')],
        help_key: "a",
        help_desc: "Move disk left",
    },
    KeyBinding {
        action: GameAction::MoveDiskRight,
        keys: &[KeyCode::Char('d'), KeyCode::Char('D')],
        help_key: "d",
        help_desc: "Move disk right",
    },
];

/// Actions listed in the collapsed help line.
pub const SHORT_HELP: [GameAction; 4] = [
    GameAction::Reset,
    GameAction::Quit,
    GameAction::ToggleHelp,
    GameAction::ToggleRules,
];

/// Columns of the expanded help panel.
pub const FULL_HELP: [&[GameAction]; 3] = [
    &[
        GameAction::Reset,
        GameAction::Quit,
        GameAction::ToggleHelp,
        GameAction::ToggleRules,
    ],
    &[GameAction::CursorLeft, GameAction::CursorRight],
    &[GameAction::MoveDiskLeft, GameAction::MoveDiskRight],
];

/// Binding for an action.
///
/// # Panics
///
/// Panics if `BINDINGS` has no entry for `action`.
pub fn binding(action: GameAction) -> &'static KeyBinding {
    BINDINGS
        .iter()
        .find(|b| b.action == action)
        .expect("every GameAction has an entry in BINDINGS")
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    BINDINGS
        .iter()
        .find(|b| b.matches(key.code))
        .map(|b| b.action)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        || (key.modifiers.is_empty() && binding(GameAction::Quit).matches(key.code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::CursorRight)
        );
    }

    #[test]
    fn test_move_keys() {
        for c in ['a', 'A'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(GameAction::MoveDiskLeft)
            );
        }
        for c in ['d', 'D'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(GameAction::MoveDiskRight)
            );
        }
    }

    #[test]
    fn test_panel_and_reset_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('?'))),
            Some(GameAction::ToggleHelp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(GameAction::ToggleRules)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn every_action_has_a_binding() {
        for action in GameAction::ALL {
            let count = BINDINGS.iter().filter(|b| b.action == action).count();
            assert_eq!(count, 1, "{:?}", action);
            assert_eq!(binding(action).action, action);
        }
    }

    #[test]
    fn binding_returns_the_entry_for_each_action() {
        assert_eq!(binding(GameAction::Reset).help_key, "r");
        assert_eq!(binding(GameAction::MoveDiskRight).help_desc, "Move disk right");
        assert_ne!(binding(GameAction::ToggleRules).help_desc, "Quit");
    }

    #[test]
    fn help_lists_every_action() {
        let listed: usize = FULL_HELP.iter().map(|col| col.len()).sum();
        assert_eq!(listed, GameAction::ALL.len());
        assert!(SHORT_HELP.iter().all(|a| FULL_HELP[0].contains(a)));
    }
}
