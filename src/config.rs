//! Command line options.
//!
//! Every option is optional; with none the game behaves like the plain
//! interactive program (menu, OS-seeded randomness, no logging).

use std::path::PathBuf;

use clap::Parser;

use crate::input::Backend;
use crate::types::GameMode;

#[derive(Debug, Parser)]
#[command(name = "tui-pong", version, about = "Pong in the terminal")]
pub struct Cli {
    /// Game mode: pvp or pvc. Shows the mode menu when omitted
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<GameMode>,

    /// Seed for serve directions and the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keyboard backend: auto, bytes or events
    #[arg(long, default_value = "auto", value_parser = parse_backend)]
    pub input: Backend,

    /// Append logs to this file (the terminal is used by the game)
    #[arg(long, env = "TUI_PONG_LOG")]
    pub log_file: Option<PathBuf>,
}

fn parse_mode(s: &str) -> Result<GameMode, String> {
    GameMode::from_str(s).ok_or_else(|| format!("unknown mode '{s}', expected pvp or pvc"))
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    Backend::from_str(s)
        .ok_or_else(|| format!("unknown input backend '{s}', expected auto, bytes or events"))
}
