//! Drawing contract shared by the game entities and the frame buffer.

/// A character grid that entities can plot themselves onto.
///
/// Implementations must treat out-of-range coordinates as a no-op: the ball
/// legitimately leaves the arena for a frame before a point is scored.
pub trait Canvas {
    fn pix(&mut self, x: i32, y: i32, ch: char);
}
