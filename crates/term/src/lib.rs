//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple character framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Hide escape sequences behind [`TerminalControl`] so rendering can target a `Vec<u8>`
//! - Redraw in place (cursor-home, not clear) to avoid flicker

pub mod control;
pub mod fb;
pub mod game_view;
pub mod pacing;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use control::{CrosstermControl, TerminalControl};
pub use fb::FrameBuffer;
pub use game_view::{GameView, EXIT_PROMPT};
pub use pacing::FramePacer;
pub use renderer::{encode_rows_into, ScreenGuard, TerminalRenderer};
