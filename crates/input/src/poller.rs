//! Scoped, non-blocking keyboard polling.
//!
//! [`KeyPoller::acquire`] switches the terminal into raw mode and picks one input
//! backend; the terminal mode is restored when the poller is released or dropped,
//! including while unwinding from a panic.

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use crossterm::{event, terminal};
use tracing::{info, warn};

use crate::decode::{ByteSource, KeyDecoder};
use crate::map::normalize_key_event;
use crate::types::Key;

/// Anything that yields at most one normalized key per call without blocking.
pub trait KeySource {
    fn poll(&mut self) -> Result<Option<Key>>;
}

impl<K: KeySource + ?Sized> KeySource for Box<K> {
    fn poll(&mut self) -> Result<Option<Key>> {
        (**self).poll()
    }
}

impl<S: ByteSource> KeySource for KeyDecoder<S> {
    fn poll(&mut self) -> Result<Option<Key>> {
        Ok(self.next_key()?)
    }
}

/// How keystrokes are read from the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Raw bytes on Unix terminals, console events elsewhere.
    #[default]
    Auto,
    /// Raw stdin bytes through [`KeyDecoder`] (Unix only).
    Bytes,
    /// crossterm console events.
    Events,
}

impl Backend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Backend::Auto),
            "bytes" => Some(Backend::Bytes),
            "events" => Some(Backend::Events),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Bytes => "bytes",
            Backend::Events => "events",
        }
    }

    /// The concrete backend for this platform. Never returns `Auto`.
    pub fn resolve(self) -> Self {
        let bytes_available = cfg!(unix) && std::io::stdin().is_terminal();
        match self {
            Backend::Auto if bytes_available => Backend::Bytes,
            Backend::Auto => Backend::Events,
            Backend::Bytes if !cfg!(unix) => {
                warn!("raw byte input is only available on Unix, using console events");
                Backend::Events
            }
            other => other,
        }
    }
}

/// crossterm console events, one event per poll.
struct EventKeys;

impl KeySource for EventKeys {
    fn poll(&mut self) -> Result<Option<Key>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            event::Event::Key(key) => Ok(normalize_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(unix)]
mod stdin {
    use std::io;

    use crate::decode::ByteSource;

    /// Unbuffered stdin, checked with a zero-timeout `poll(2)`.
    pub(super) struct StdinBytes;

    impl ByteSource for StdinBytes {
        fn next_ready(&mut self) -> io::Result<Option<u8>> {
            let mut pfd = libc::pollfd {
                fd: libc::STDIN_FILENO,
                events: libc::POLLIN,
                revents: 0,
            };
            // SAFETY: a single valid pollfd and a zero timeout.
            let ready = unsafe { libc::poll(&mut pfd, 1, 0) };
            if ready < 0 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    return Ok(None);
                }
                return Err(err);
            }
            if ready == 0 || pfd.revents & libc::POLLIN == 0 {
                return Ok(None);
            }

            let mut byte = 0u8;
            // SAFETY: reads at most one byte into a live local.
            let n = unsafe { libc::read(libc::STDIN_FILENO, (&mut byte as *mut u8).cast(), 1) };
            match n {
                1 => Ok(Some(byte)),
                0 => Ok(None),
                _ => Err(io::Error::last_os_error()),
            }
        }
    }
}

/// Switches the terminal in and out of raw (unbuffered, no echo) mode.
pub trait RawMode {
    fn enable(&mut self) -> Result<()>;
    fn disable(&mut self) -> Result<()>;
}

impl<M: RawMode + ?Sized> RawMode for Box<M> {
    fn enable(&mut self) -> Result<()> {
        (**self).enable()
    }

    fn disable(&mut self) -> Result<()> {
        (**self).disable()
    }
}

/// The controlling terminal's raw mode, through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermRawMode;

impl RawMode for CrosstermRawMode {
    fn enable(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

/// Raw terminal mode, restored exactly once on release or drop.
#[derive(Debug)]
pub struct RawModeGuard<M: RawMode> {
    mode: M,
    active: bool,
}

impl<M: RawMode> RawModeGuard<M> {
    pub fn acquire(mut mode: M) -> Result<Self> {
        mode.enable()?;
        Ok(Self { mode, active: true })
    }

    pub fn release(mut self) -> Result<()> {
        self.active = false;
        self.mode.disable()
    }
}

impl<M: RawMode> Drop for RawModeGuard<M> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = self.mode.disable();
        }
    }
}

/// The keyboard, as a scoped resource.
pub struct KeyPoller {
    source: Box<dyn KeySource>,
    guard: Option<RawModeGuard<Box<dyn RawMode>>>,
}

impl KeyPoller {
    /// Enter raw mode and start reading keys with `backend`.
    pub fn acquire(backend: Backend) -> Result<Self> {
        let backend = backend.resolve();
        let source: Box<dyn KeySource> = match backend {
            #[cfg(unix)]
            Backend::Bytes => Box::new(KeyDecoder::new(stdin::StdinBytes)),
            _ => Box::new(EventKeys),
        };
        let poller = Self::with_raw_mode(source, CrosstermRawMode)?;
        info!(backend = backend.as_str(), "keyboard acquired");
        Ok(poller)
    }

    /// Enter raw mode through `mode` and poll keys from `source`.
    pub fn with_raw_mode(
        source: impl KeySource + 'static,
        mode: impl RawMode + 'static,
    ) -> Result<Self> {
        let mode: Box<dyn RawMode> = Box::new(mode);
        Ok(Self {
            source: Box::new(source),
            guard: Some(RawModeGuard::acquire(mode)?),
        })
    }

    /// Poll keys from `source` without touching the terminal mode.
    pub fn from_source(source: impl KeySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            guard: None,
        }
    }

    /// True while this poller holds the terminal in raw mode.
    pub fn holds_terminal(&self) -> bool {
        self.guard.is_some()
    }

    /// Restore the terminal mode now instead of on drop.
    pub fn release(mut self) -> Result<()> {
        match self.guard.take() {
            Some(guard) => guard.release(),
            None => Ok(()),
        }
    }
}

impl KeySource for KeyPoller {
    fn poll(&mut self) -> Result<Option<Key>> {
        self.source.poll()
    }
}
