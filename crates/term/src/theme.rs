//! Rendering styles.
//!
//! A [`Theme`] is a plain value handed to the view on every render; nothing
//! here is global or mutable.

use crate::fb::{CellStyle, Paint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Column of the selected peg
    pub current_peg: CellStyle,
    pub normal_peg: CellStyle,
    pub rules: CellStyle,
    /// The `Error:` prefix of the status line
    pub error: CellStyle,
    pub text: CellStyle,
    pub help_key: CellStyle,
    pub help_desc: CellStyle,
    pub help_sep: CellStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            current_peg: CellStyle::fg(Paint::Indexed(39)),
            normal_peg: CellStyle::fg(Paint::Indexed(240)),
            rules: CellStyle::fg(Paint::Indexed(220)),
            error: CellStyle::fg(Paint::Indexed(9)),
            text: CellStyle::default(),
            help_key: CellStyle::fg(Paint::Indexed(245)),
            help_desc: CellStyle::fg(Paint::Indexed(240)),
            help_sep: CellStyle::fg(Paint::Indexed(238)),
        }
    }
}

impl Theme {
    /// Style for a peg column.
    pub fn peg(&self, selected: bool) -> CellStyle {
        if selected {
            self.current_peg
        } else {
            self.normal_peg
        }
    }
}
