//! TUI Pong (workspace facade crate).
//!
//! Re-exports the game crates under `tui_pong::{core,input,term,types}` and hosts the
//! pieces that tie them together: the game loop [`app`], the mode [`menu`], command
//! line [`config`] and file [`logging`].

pub mod app;
pub mod config;
pub mod logging;
pub mod menu;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;
