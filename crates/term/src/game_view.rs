//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Status};
use crate::fb::{CellStyle, FrameBuffer};
use crate::input::{binding, FULL_HELP, SHORT_HELP};
use crate::theme::Theme;
use crate::types::peg_label;

/// Shown once the puzzle is solved.
pub const WIN_MESSAGE: &str = "You win!";

/// Shown when the player quits.
pub const GOODBYE_MESSAGE: &str = "Goodbye!";

pub const RULES_TITLE: &str = "Rules:";

pub const RULES: [&str; 5] = [
    "Only one disk can be moved at a time.",
    "Each move consists of taking the upper disk from one of the stacks and placing it on top of another stack.",
    "No disk may be placed on top of a smaller disk.",
    "Fill the last peg with all the disks to win.",
    "You can only move adjacent disks.",
];

const SHORT_HELP_SEP: &str = " • ";
const FULL_HELP_SEP: &str = "    ";
const ELLIPSIS: &str = "…";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Styled runs making up one screen row.
type Line = Vec<(String, CellStyle)>;

/// Blank columns after each disk label.
const CELL_GAP: usize = 1;

/// Text renderer for the puzzle screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport. Body text starts after
    /// one blank row and is wrapped to `width - 1` columns; the help panel
    /// sits on the last rows of the screen.
    pub fn render_into(
        &self,
        state: &GameState,
        theme: &Theme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);
        let wrap_width = (viewport.width as usize).saturating_sub(1).max(1);

        let mut body: Vec<Line> = vec![Vec::new()];
        if state.is_done() {
            push_wrapped(&mut body, WIN_MESSAGE, theme.text, wrap_width);
        } else if state.is_quitting() {
            push_wrapped(&mut body, GOODBYE_MESSAGE, theme.text, wrap_width);
            draw_lines(fb, 0, viewport.height, &body);
            return;
        } else if state.show_rules() {
            push_rules(&mut body, theme, wrap_width);
        } else {
            self.push_board(&mut body, state, theme);
            body.push(Vec::new());
            push_status(&mut body, state.status(), theme, wrap_width);
        }

        let help = if state.show_help() {
            full_help(theme)
        } else {
            vec![short_help(theme, viewport.width as usize)]
        };
        let help_top = viewport.height.saturating_sub(help.len() as u16);

        draw_lines(fb, 0, help_top, &body);
        draw_lines(fb, help_top, viewport.height, &help);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, theme: &Theme, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, theme, viewport, &mut fb);
        fb
    }

    /// One row per disk height (top first), a blank row, then peg labels.
    fn push_board(&self, out: &mut Vec<Line>, state: &GameState, theme: &Theme) {
        let puzzle = state.puzzle();
        let cell_w = puzzle.disk_count().to_string().len() + CELL_GAP;

        for height in (0..puzzle.disk_count()).rev() {
            let line = puzzle
                .pegs()
                .iter()
                .enumerate()
                .map(|(i, peg)| {
                    let text = match peg.get(height) {
                        Some(disk) => format!("{disk:<cell_w$}"),
                        None => " ".repeat(cell_w),
                    };
                    (text, theme.peg(i == state.cursor()))
                })
                .collect();
            out.push(line);
        }

        out.push(Vec::new());
        let labels = (0..puzzle.peg_count())
            .map(|i| {
                let text = format!("{:<cell_w$}", peg_label(i));
                (text, theme.peg(i == state.cursor()).bold())
            })
            .collect();
        out.push(labels);
    }
}

fn push_wrapped(out: &mut Vec<Line>, text: &str, style: CellStyle, width: usize) {
    for row in textwrap::wrap(text, width) {
        out.push(vec![(row.into_owned(), style)]);
    }
}

fn push_rules(out: &mut Vec<Line>, theme: &Theme, width: usize) {
    out.push(vec![(RULES_TITLE.to_string(), theme.rules.bold().underline())]);
    out.push(Vec::new());
    for (i, rule) in RULES.iter().enumerate() {
        push_wrapped(out, &format!("{}. {}", i + 1, rule), theme.rules, width);
    }
}

/// `Error: <message>` for rejected moves, the bare message otherwise.
fn push_status(out: &mut Vec<Line>, status: Option<Status>, theme: &Theme, width: usize) {
    match status {
        None => out.push(Vec::new()),
        Some(Status::Info(msg)) => push_wrapped(out, msg, theme.text, width),
        Some(Status::Error(err)) => {
            const PREFIX: &str = "Error: ";
            let text = format!("{PREFIX}{err}");
            for (i, row) in textwrap::wrap(&text, width).into_iter().enumerate() {
                if i > 0 {
                    out.push(vec![(row.into_owned(), theme.text)]);
                    continue;
                }
                let split = row
                    .char_indices()
                    .nth(PREFIX.chars().count())
                    .map_or(row.len(), |(idx, _)| idx);
                let (head, tail) = row.split_at(split);
                out.push(vec![
                    (head.to_string(), theme.error),
                    (tail.to_string(), theme.text),
                ]);
            }
        }
    }
}

/// Collapsed help: one line, truncated with an ellipsis when too wide.
fn short_help(theme: &Theme, max_width: usize) -> Line {
    let mut line = Line::new();
    let mut used = 0usize;

    for (i, action) in SHORT_HELP.iter().enumerate() {
        let b = binding(*action);
        let sep = if i == 0 { "" } else { SHORT_HELP_SEP };
        let item_w = sep.chars().count()
            + b.help_key.chars().count()
            + 1
            + b.help_desc.chars().count();

        if used + item_w > max_width {
            if used + 2 <= max_width {
                line.push((format!(" {ELLIPSIS}"), theme.help_sep));
            }
            break;
        }

        if !sep.is_empty() {
            line.push((sep.to_string(), theme.help_sep));
        }
        line.push((b.help_key.to_string(), theme.help_key));
        line.push((format!(" {}", b.help_desc), theme.help_desc));
        used += item_w;
    }
    line
}

/// Expanded help: one column of `key desc` rows per group.
fn full_help(theme: &Theme) -> Vec<Line> {
    let rows = FULL_HELP.iter().map(|col| col.len()).max().unwrap_or(0);
    let mut lines = vec![Line::new(); rows];

    for (c, column) in FULL_HELP.iter().enumerate() {
        let bindings: Vec<_> = column.iter().map(|a| binding(*a)).collect();
        let key_w = bindings
            .iter()
            .map(|b| b.help_key.chars().count())
            .max()
            .unwrap_or(0);
        let desc_w = bindings
            .iter()
            .map(|b| b.help_desc.chars().count())
            .max()
            .unwrap_or(0);

        for (r, line) in lines.iter_mut().enumerate() {
            if c > 0 {
                line.push((FULL_HELP_SEP.to_string(), theme.help_sep));
            }
            match bindings.get(r) {
                Some(b) => {
                    line.push((format!("{:<key_w$} ", b.help_key), theme.help_key));
                    line.push((format!("{:<desc_w$}", b.help_desc), theme.help_desc));
                }
                None => line.push((" ".repeat(key_w + 1 + desc_w), theme.help_desc)),
            }
        }
    }
    lines
}

/// Draw `lines` from row `top`, stopping before row `bottom`.
fn draw_lines(fb: &mut FrameBuffer, top: u16, bottom: u16, lines: &[Line]) {
    for (line, y) in lines.iter().zip(top..bottom) {
        let mut x = 0;
        for (text, style) in line {
            x = fb.put_str(x, y, text, *style);
        }
    }
}
