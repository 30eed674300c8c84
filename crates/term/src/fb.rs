//! Framebuffer for terminal rendering.

use crate::core::Canvas;
use crate::types::BACKGROUND_GLYPH;

/// 2D framebuffer of single-character cells.
///
/// Drawing outside the grid is silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    background: char,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, BACKGROUND_GLYPH)
    }

    pub fn with_background(width: u16, height: u16, background: char) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background,
            cells: vec![background; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Row `y` as a slice of cells.
    pub fn row(&self, y: u16) -> &[char] {
        let w = self.width as usize;
        let start = (y as usize) * w;
        &self.cells[start..start + w]
    }

    /// Reset every cell to the background glyph.
    pub fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    pub fn pix(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Vertical run at column `x` from `y0` to `y1`, both inclusive.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, ch: char) {
        for y in y0..=y1 {
            self.pix(x, y, ch);
        }
    }

    /// Horizontal run on row `y` from `x0` to `x1`, both inclusive.
    pub fn hline(&mut self, y: i32, x0: i32, x1: i32, ch: char) {
        for x in x0..=x1 {
            self.pix(x, y, ch);
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.pix(x + i as i32, y, ch);
        }
    }

    /// Write `s` horizontally centered on row `y`.
    pub fn put_str_centered(&mut self, y: i32, s: &str) {
        let len = s.chars().count() as i32;
        let x = (self.width as i32 - len).div_euclid(2);
        self.put_str(x, y, s);
    }
}

impl Canvas for FrameBuffer {
    fn pix(&mut self, x: i32, y: i32, ch: char) {
        FrameBuffer::pix(self, x, y, ch);
    }
}
