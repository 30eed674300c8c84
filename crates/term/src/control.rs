//! Terminal control capability: screen clear, cursor visibility and homing.
//!
//! The game loop and renderer only talk to [`TerminalControl`], so they can be driven
//! against an in-memory writer in tests.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

pub trait TerminalControl {
    fn clear_screen(&mut self) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    /// Move the cursor to the top-left corner without clearing.
    fn cursor_home(&mut self) -> Result<()>;
    fn write_str(&mut self, s: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

impl<T: TerminalControl + ?Sized> TerminalControl for &mut T {
    fn clear_screen(&mut self) -> Result<()> {
        (**self).clear_screen()
    }

    fn hide_cursor(&mut self) -> Result<()> {
        (**self).hide_cursor()
    }

    fn show_cursor(&mut self) -> Result<()> {
        (**self).show_cursor()
    }

    fn cursor_home(&mut self) -> Result<()> {
        (**self).cursor_home()
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        (**self).write_str(s)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// [`TerminalControl`] emitting crossterm commands to any writer.
///
/// Commands are queued into an internal buffer and written out on [`flush`](TerminalControl::flush).
pub struct CrosstermControl<W: Write> {
    out: W,
    buf: Vec<u8>,
}

impl CrosstermControl<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermControl<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalControl for CrosstermControl<W> {
    fn clear_screen(&mut self) -> Result<()> {
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.buf.queue(cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.buf.queue(cursor::Show)?;
        Ok(())
    }

    fn cursor_home(&mut self) -> Result<()> {
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.buf.queue(Print(s))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}
