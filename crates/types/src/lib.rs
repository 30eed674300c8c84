//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input decoding).
//!
//! # Arena Dimensions
//!
//! The arena is a fixed character grid. Row 0 and row `ARENA_HEIGHT - 1` hold the
//! borders, so the playable rows are `1..=ARENA_HEIGHT - 2`.
//!
//! - **Width**: 60 columns (indexed 0-59)
//! - **Height**: 22 rows (indexed 0-21)
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PADDLE_HEIGHT` | 4 | Paddle length in cells |
//! | `PADDLE_SPEED` | 30 | Paddle speed in cells/second |
//! | `WIN_SCORE` | 4 | Points needed to win the match |
//! | `TARGET_FPS` | 30 | Frame rate and physics rate |
//! | `BALL_SPEED_UP` | 1.003 | Velocity multiplier per physics step |
//! | `BALL_VX` / `BALL_VY` | 25 / 12 | Serve velocity magnitudes |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{GameMode, Key, Side, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! assert_eq!(ARENA_WIDTH, 60);
//! assert_eq!(ARENA_HEIGHT, 22);
//!
//! assert_eq!(GameMode::from_str("pvc"), Some(GameMode::PlayerVsComputer));
//! assert_eq!(GameMode::PlayerVsComputer.label(Side::Right), "Computer");
//!
//! assert_eq!(Key::from_char('W'), Key::Char('w'));
//! ```

/// Arena width in columns (60)
pub const ARENA_WIDTH: i32 = 60;

/// Arena height in rows, borders included (22)
pub const ARENA_HEIGHT: i32 = 22;

/// Paddle height in cells (4)
pub const PADDLE_HEIGHT: i32 = 4;

/// Paddle speed in cells per second (30)
pub const PADDLE_SPEED: f32 = 30.0;

/// Points needed to win a match (4)
pub const WIN_SCORE: u32 = 4;

/// Target frame rate in Hz (30). Physics runs at the same rate.
pub const TARGET_FPS: u32 = 30;

/// Fixed physics timestep in seconds (1 / `TARGET_FPS`)
pub const FIXED_DT: f32 = 1.0 / TARGET_FPS as f32;

/// Ball velocity multiplier applied after every physics step (1.003)
pub const BALL_SPEED_UP: f32 = 1.003;

/// Horizontal serve speed in cells per second (25)
pub const BALL_VX: f32 = 25.0;

/// Vertical serve speed in cells per second (12)
pub const BALL_VY: f32 = 12.0;

/// Probability that the computer paddle tracks at full speed on a given tick (0.7)
pub const AI_TRACK_PROBABILITY: f64 = 0.7;

/// Speed fraction the computer paddle uses when it does not track at full speed (0.4)
pub const AI_SLUGGISH_FACTOR: f32 = 0.4;

/// Half-width of the computer paddle's dead zone around its center, in cells (1)
pub const AI_DEAD_ZONE: f32 = 1.0;

/// Poll interval while waiting for the post-match keypress (50ms)
pub const ACK_POLL_MS: u64 = 50;

/// Key that ends the match immediately
pub const QUIT_KEY: Key = Key::Char('q');

/// Player 1 (left paddle) controls
pub const P1_UP: Key = Key::Char('w');
pub const P1_DOWN: Key = Key::Char('s');

/// Player 2 (right paddle) controls
pub const P2_UP: Key = Key::Up;
pub const P2_DOWN: Key = Key::Down;

/// Default glyph for paddles and the ball
pub const FILL_GLYPH: char = '█';

/// Background glyph of the frame buffer
pub const BACKGROUND_GLYPH: char = ' ';

/// A normalized keypress.
///
/// Input backends turn raw platform input (escape sequences, console events) into
/// exactly one of these. "No key" is represented as `Option::<Key>::None` by callers.
///
/// - **Char**: an ordinary key, always lowercase
/// - **Up** / **Down**: the arrow keys
/// - **Interrupt**: Ctrl-C while the terminal is in raw mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Interrupt,
}

impl Key {
    /// Normalize a character key to its lowercase form.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::Key;
    ///
    /// assert_eq!(Key::from_char('Q'), Key::Char('q'));
    /// assert_eq!(Key::from_char('s'), Key::Char('s'));
    /// ```
    pub fn from_char(ch: char) -> Self {
        Key::Char(ch.to_lowercase().next().unwrap_or(ch))
    }

    /// True for keys that end the match (the quit key or Ctrl-C).
    pub fn is_quit(&self) -> bool {
        *self == QUIT_KEY || *self == Key::Interrupt
    }
}

/// One side of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Player 1, left paddle
    Left,
    /// Player 2 or the computer, right paddle
    Right,
}

impl Side {
    /// Index into a per-side array such as the score.
    pub fn index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Match mode, chosen once before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// Accepts the short names used on the command line and the menu digits:
    /// "pvp" | "1", "pvc" | "2"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pong_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("PvP"), Some(GameMode::PlayerVsPlayer));
    /// assert_eq!(GameMode::from_str("2"), Some(GameMode::PlayerVsComputer));
    /// assert_eq!(GameMode::from_str("3"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pvp" | "1" => Some(GameMode::PlayerVsPlayer),
            "pvc" | "2" => Some(GameMode::PlayerVsComputer),
            _ => None,
        }
    }

    /// Convert to short string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "pvp",
            GameMode::PlayerVsComputer => "pvc",
        }
    }

    /// Display name of the player on `side` in this mode.
    pub fn label(&self, side: Side) -> &'static str {
        match (self, side) {
            (_, Side::Left) => "Player 1",
            (GameMode::PlayerVsPlayer, Side::Right) => "Player 2",
            (GameMode::PlayerVsComputer, Side::Right) => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_and_timing_defaults() {
        assert_eq!(ARENA_WIDTH, 60);
        assert_eq!(ARENA_HEIGHT, 22);
        assert_eq!(PADDLE_HEIGHT, 4);
        assert_eq!(PADDLE_SPEED, 30.0);
        assert_eq!(WIN_SCORE, 4);
        assert_eq!(TARGET_FPS, 30);
        assert_eq!(BALL_SPEED_UP, 1.003);
        assert_eq!((BALL_VX, BALL_VY), (25.0, 12.0));
    }

    #[test]
    fn quit_keys() {
        assert!(Key::Char('q').is_quit());
        assert!(Key::Interrupt.is_quit());
        assert!(!Key::Char('w').is_quit());
        assert!(!Key::Up.is_quit());
    }

    #[test]
    fn labels_depend_on_mode() {
        assert_eq!(GameMode::PlayerVsPlayer.label(Side::Left), "Player 1");
        assert_eq!(GameMode::PlayerVsPlayer.label(Side::Right), "Player 2");
        assert_eq!(GameMode::PlayerVsComputer.label(Side::Left), "Player 1");
        assert_eq!(GameMode::PlayerVsComputer.label(Side::Right), "Computer");
    }

    #[test]
    fn side_index_and_mode_names() {
        assert_eq!(Side::Left.index(), 0);
        assert_eq!(Side::Right.index(), 1);
        assert_eq!(GameMode::from_str(GameMode::PlayerVsPlayer.as_str()), Some(GameMode::PlayerVsPlayer));
    }
}
