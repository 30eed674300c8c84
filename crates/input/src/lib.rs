//! Terminal input module (engine-facing).
//!
//! Turns keystrokes into the small [`Key`](types::Key) vocabulary the game understands:
//! lowercase characters plus the Up/Down arrows. Two backends sit behind the
//! [`KeySource`] trait and one is chosen when the [`KeyPoller`] is acquired:
//!
//! - **bytes**: raw stdin decoded by [`KeyDecoder`] (Unix terminals)
//! - **events**: crossterm console events normalized by [`normalize_key_event`]

pub mod decode;
pub mod map;
pub mod poller;

pub use tui_pong_types as types;

pub use decode::{decode_next, ByteSource, KeyDecoder};
pub use map::normalize_key_event;
pub use poller::{Backend, CrosstermRawMode, KeyPoller, KeySource, RawMode, RawModeGuard};
