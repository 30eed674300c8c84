//! Paddle entity.

use crate::canvas::Canvas;
use crate::types::{Key, FILL_GLYPH, P1_DOWN, P1_UP, P2_DOWN, P2_UP, PADDLE_HEIGHT, PADDLE_SPEED};

/// A vertical paddle at a fixed column.
///
/// `y` is the top row. Movement is continuous (`speed * dt`), drawing truncates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: i32,
    pub y: f32,
    pub height: i32,
    /// Cells per second.
    pub speed: f32,
    pub up: Key,
    pub down: Key,
}

impl Paddle {
    pub fn new(x: i32, y: f32, height: i32, speed: f32, up: Key, down: Key) -> Self {
        Self {
            x,
            y,
            height,
            speed,
            up,
            down,
        }
    }

    /// Player 1's paddle in column 1, vertically centered.
    pub fn left(arena_height: i32) -> Self {
        Self::new(
            1,
            (arena_height / 2 - 2) as f32,
            PADDLE_HEIGHT,
            PADDLE_SPEED,
            P1_UP,
            P1_DOWN,
        )
    }

    /// Player 2's (or the computer's) paddle one column in from the right edge.
    pub fn right(arena_width: i32, arena_height: i32) -> Self {
        Self::new(
            arena_width - 2,
            (arena_height / 2 - 2) as f32,
            PADDLE_HEIGHT,
            PADDLE_SPEED,
            P2_UP,
            P2_DOWN,
        )
    }

    /// Move toward the top or bottom if `key` is one of this paddle's keys.
    ///
    /// A move is only started while the paddle is strictly inside the one-cell margin
    /// (`y > 1` going up, `y + height < max_y - 1` going down) and never ends outside
    /// `[1, max_y - 1 - height]`.
    pub fn update(&mut self, dt: f32, key: Option<Key>, max_y: i32) {
        let Some(key) = key else {
            return;
        };

        let step = self.speed * dt;
        let top = 1.0;
        let bottom = (max_y - 1 - self.height) as f32;

        if key == self.up && self.y > top {
            self.y = (self.y - step).max(top);
        } else if key == self.down && self.y + (self.height as f32) < (max_y - 1) as f32 {
            self.y = (self.y + step).min(bottom);
        }
    }

    pub fn center(&self) -> f32 {
        self.y + self.height as f32 / 2.0
    }

    /// True if row `y` lies within the paddle, both ends inclusive.
    pub fn spans(&self, y: f32) -> bool {
        self.y <= y && y <= self.y + self.height as f32
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        let top = self.y as i32;
        for i in 0..self.height {
            canvas.pix(self.x, top + i, FILL_GLYPH);
        }
    }
}
