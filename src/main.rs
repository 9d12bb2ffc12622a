//! Terminal Tower of Hanoi (default binary).
//!
//! Owns the event loop: block on the next terminal event, apply at most one
//! action, redraw. Uses crossterm for input and the framebuffer renderer from
//! `tui_hanoi::term` for output.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use tui_hanoi::core::{rng::clock_seed, GameState};
use tui_hanoi::term::{
    handle_event, Flow, FrameBuffer, GameView, TerminalRenderer, Theme, Viewport, GOODBYE_MESSAGE,
    WIN_MESSAGE,
};
use tui_hanoi::types::DEFAULT_VIEWPORT;

#[derive(Parser)]
#[command(name = "tui-hanoi", about = "Tower of Hanoi in the terminal")]
struct Args {
    /// Seed for the initial disk order (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        init_logging(path);
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");
    let mut state = GameState::new(seed);

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &mut state));

    // Always try to restore terminal state.
    let _ = term.exit();

    match result {
        Ok(()) => {
            println!("{}", farewell(&state));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event loop failed: {err:#}");
            eprintln!("Failed to start UI: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, config, file);
        }
        Err(err) => {
            eprintln!("warning: cannot open log file {}: {err}", path.display());
        }
    }
}

fn run(term: &mut TerminalRenderer, state: &mut GameState) -> Result<()> {
    let theme = Theme::default();

    let (w, h) = crossterm::terminal::size().unwrap_or(DEFAULT_VIEWPORT);
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut exiting = false;

    loop {
        GameView.render_into(state, &theme, viewport, &mut fb);
        term.draw(&fb)?;

        if exiting {
            return Ok(());
        }

        match handle_event(state, &mut viewport, event::read()?) {
            Flow::Continue => {}
            Flow::Resized => term.invalidate(),
            Flow::Exit => exiting = true,
        }
    }
}

fn farewell(state: &GameState) -> &'static str {
    if state.is_done() {
        WIN_MESSAGE
    } else {
        GOODBYE_MESSAGE
    }
}
