//! Ball entity.

use crate::canvas::Canvas;
use crate::types::{Side, BALL_VX, BALL_VY, FILL_GLYPH};

/// The ball. Position is unbounded: leaving the arena horizontally is how points are scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32) -> Self {
        Self { x, y, vx, vy }
    }

    /// A fresh ball at the arena center, moving toward `toward`.
    ///
    /// `down` picks the sign of the vertical velocity; its magnitude is fixed.
    pub fn serve(arena_width: i32, arena_height: i32, toward: Side, down: bool) -> Self {
        let vx = match toward {
            Side::Left => -BALL_VX,
            Side::Right => BALL_VX,
        };
        let vy = if down { BALL_VY } else { -BALL_VY };
        Self::new(arena_width as f32 / 2.0, arena_height as f32 / 2.0, vx, vy)
    }

    /// Linear integration. Collisions are resolved by the caller.
    pub fn update(&mut self, dt: f32) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn bounce_vert(&mut self) {
        self.vy = -self.vy;
    }

    pub fn bounce_horiz(&mut self) {
        self.vx = -self.vx;
    }

    pub fn speed_up(&mut self, factor: f32) {
        self.vx *= factor;
        self.vy *= factor;
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.pix(self.x as i32, self.y as i32, FILL_GLYPH);
    }
}
