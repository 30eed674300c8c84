//! Terminal Pong runner (default binary).
//!
//! Picks a mode, then runs the match with raw keyboard input and a
//! framebuffer renderer. The terminal is restored on every exit path.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use tui_pong::app::{Controller, MatchResult};
use tui_pong::config::Cli;
use tui_pong::core::Rally;
use tui_pong::input::{Backend, KeyPoller};
use tui_pong::logging;
use tui_pong::menu::choose_mode;
use tui_pong::term::{CrosstermControl, ScreenGuard, TerminalControl, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    let mut control = CrosstermControl::stdout();

    let mode = match cli.mode {
        Some(mode) => mode,
        None => {
            control.show_cursor()?;
            control.clear_screen()?;
            control.cursor_home()?;
            control.flush()?;
            choose_mode(&mut io::stdin().lock(), &mut io::stdout())?
        }
    };
    info!(mode = mode.as_str(), seed = ?cli.seed, "starting match");

    let rally = match cli.seed {
        Some(seed) => Rally::seeded(mode, seed),
        None => Rally::new(mode),
    };

    // The guard restores the screen on every path, panics included.
    let mut screen = ScreenGuard::enter(TerminalRenderer::new(control))?;
    let result = run(rally, cli.input, screen.control_mut());
    if let Err(e) = screen.finish() {
        warn!(error = %e, "failed to restore terminal");
    }

    let outcome = result?;
    info!(winner = ?outcome.winner, score = %outcome.score.text(), "match over");
    Ok(())
}

fn run(rally: Rally, backend: Backend, control: &mut impl TerminalControl) -> Result<MatchResult> {
    let keys = KeyPoller::acquire(backend)?;
    let mut controller = Controller::new(rally, keys, TerminalRenderer::new(control));
    let result = controller.run();

    let (keys, _) = controller.into_parts();
    let released = keys.release();
    let outcome = result?;
    released?;
    Ok(outcome)
}
