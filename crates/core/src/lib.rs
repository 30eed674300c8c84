//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong simulation: entities, the computer opponent and
//! the per-frame match update. It has **zero dependencies** on terminals or I/O:
//!
//! - **Deterministic**: a seeded [`Rally`] replays identically (serves, opponent)
//! - **Testable**: the frame update is split into its individual phases
//! - **Portable**: entities draw through the [`Canvas`] trait, not a concrete buffer
//!
//! # Module Structure
//!
//! - [`paddle`]: paddle movement with a one-cell margin against the borders
//! - [`ball`]: ball integration and bounce primitives
//! - [`ai`]: computer opponent policy (probabilistic tracking with a dead zone)
//! - [`rally`]: one match: fixed-timestep physics, collisions, scoring, win detection
//! - [`canvas`]: the drawing contract
//!
//! # Example
//!
//! ```
//! use tui_pong_core::Rally;
//! use tui_pong_types::{GameMode, Key, FIXED_DT};
//!
//! let mut rally = Rally::seeded(GameMode::PlayerVsComputer, 12345);
//! let outcome = rally.frame(Some(Key::Char('w')), FIXED_DT * 1.5);
//!
//! assert_eq!(outcome.steps, 1);
//! assert_eq!(outcome.winner, None);
//! ```
//!
//! # Timing
//!
//! Physics runs in fixed steps of `FIXED_DT` (1/30 s). Each frame the wall-clock
//! time since the previous frame is added to an accumulator and whole steps are
//! drained from it; every step also multiplies the ball velocity by `BALL_SPEED_UP`.

pub mod ai;
pub mod ball;
pub mod canvas;
pub mod paddle;
pub mod rally;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ball::Ball;
pub use canvas::Canvas;
pub use paddle::Paddle;
pub use rally::{FrameOutcome, Rally, Score};
