//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! Every frame is a full redraw preceded by a cursor-home, never a screen clear,
//! so the previous frame is overwritten in place without flicker.

use anyhow::Result;

use crate::control::TerminalControl;
use crate::fb::FrameBuffer;

pub struct TerminalRenderer<T: TerminalControl> {
    term: T,
    buf: String,
}

impl<T: TerminalControl> TerminalRenderer<T> {
    pub fn new(term: T) -> Self {
        Self {
            term,
            buf: String::with_capacity(8 * 1024),
        }
    }

    /// Clear the screen and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        self.term.hide_cursor()?;
        self.term.flush()
    }

    /// Show the cursor and clear the screen.
    pub fn exit(&mut self) -> Result<()> {
        self.term.show_cursor()?;
        self.term.clear_screen()?;
        self.term.flush()
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_rows_into(fb, &mut self.buf);
        self.term.cursor_home()?;
        self.term.write_str(&self.buf)?;
        self.term.flush()
    }

    pub fn control_mut(&mut self) -> &mut T {
        &mut self.term
    }

    pub fn into_control(self) -> T {
        self.term
    }
}

/// A renderer that has entered the game screen.
///
/// `exit` runs exactly once: on [`ScreenGuard::finish`], or on drop if the
/// holder returns early or unwinds from a panic.
pub struct ScreenGuard<T: TerminalControl> {
    renderer: TerminalRenderer<T>,
    active: bool,
}

impl<T: TerminalControl> ScreenGuard<T> {
    pub fn enter(mut renderer: TerminalRenderer<T>) -> Result<Self> {
        renderer.enter()?;
        Ok(Self {
            renderer,
            active: true,
        })
    }

    pub fn control_mut(&mut self) -> &mut T {
        self.renderer.control_mut()
    }

    /// Restore the screen now and report the error instead of swallowing it.
    pub fn finish(mut self) -> Result<()> {
        self.active = false;
        self.renderer.exit()
    }
}

impl<T: TerminalControl> Drop for ScreenGuard<T> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            let _ = self.renderer.exit();
        }
    }
}

/// Serialize the framebuffer row by row into `out`.
///
/// Rows are separated by `\r\n` because raw mode disables output post-processing.
/// There is no separator after the last row so the terminal never scrolls.
pub fn encode_rows_into(fb: &FrameBuffer, out: &mut String) {
    for y in 0..fb.height() {
        out.extend(fb.row(y).iter());
        if y + 1 < fb.height() {
            out.push_str("\r\n");
        }
    }
}
