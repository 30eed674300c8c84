//! Interactive mode selection, shown once before the match.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use crate::types::{GameMode, ARENA_WIDTH};

const TITLE: &str = "==== Terminal Pong ====";

/// Print the menu to `out` and read lines from `input` until a valid choice.
pub fn choose_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<GameMode> {
    writeln!(out, "{:^width$}", TITLE, width = ARENA_WIDTH as usize)?;
    writeln!(out, "1) Player vs Player")?;
    writeln!(out, "2) Player vs Computer")?;

    let mut line = String::new();
    loop {
        write!(out, "Select mode (1/2): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("no game mode selected: input closed");
        }
        match line.trim() {
            "1" => return Ok(GameMode::PlayerVsPlayer),
            "2" => return Ok(GameMode::PlayerVsComputer),
            _ => writeln!(out, "Invalid choice. Try again.")?,
        }
    }
}
