//! GameView: maps a [`Rally`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Rally;
use crate::fb::FrameBuffer;
use crate::types::{Side, ARENA_HEIGHT, ARENA_WIDTH};

/// Prompt shown under the victory banner.
pub const EXIT_PROMPT: &str = "Press any key to exit...";

/// Glyphs for the static parts of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    border: char,
    centerline: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            border: '=',
            centerline: '.',
        }
    }
}

impl GameView {
    /// A framebuffer sized to the arena.
    pub fn framebuffer(&self) -> FrameBuffer {
        FrameBuffer::new(ARENA_WIDTH as u16, ARENA_HEIGHT as u16)
    }

    /// Render the current match into a fresh framebuffer.
    pub fn render(&self, rally: &Rally) -> FrameBuffer {
        let mut fb = self.framebuffer();
        self.render_into(rally, &mut fb);
        fb
    }

    /// Clear `fb` and draw borders, centerline, paddles, ball and score.
    pub fn render_into(&self, rally: &Rally, fb: &mut FrameBuffer) {
        fb.clear();
        let w = fb.width() as i32;
        let h = fb.height() as i32;

        fb.hline(0, 0, w - 1, self.border);
        fb.hline(h - 1, 0, w - 1, self.border);
        fb.vline(w / 2, 1, h - 2, self.centerline);

        rally.left.draw(fb);
        rally.right.draw(fb);
        rally.ball.draw(fb);

        fb.put_str_centered(0, &rally.score.text());
    }

    /// Clear `fb` and draw the victory banner for `winner` with the exit prompt.
    pub fn render_victory_into(&self, rally: &Rally, winner: Side, fb: &mut FrameBuffer) {
        fb.clear();
        let mid = fb.height() as i32 / 2;
        fb.put_str_centered(mid, &format!("{} wins!", rally.label(winner)));
        fb.put_str_centered(mid + 2, EXIT_PROMPT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Ball, Score};
    use crate::types::GameMode;

    fn row(fb: &FrameBuffer, y: u16) -> String {
        fb.row(y).iter().collect()
    }

    #[test]
    fn arena_frame_layout() {
        let mut rally = Rally::seeded(GameMode::PlayerVsPlayer, 1);
        rally.ball = Ball::new(10.7, 5.2, 25.0, 12.0);
        let fb = GameView::default().render(&rally);

        assert_eq!((fb.width(), fb.height()), (60, 22));
        assert_eq!(row(&fb, 0), format!("{}0 : 0{}", "=".repeat(27), "=".repeat(28)));
        assert_eq!(row(&fb, 21), "=".repeat(60));
        for y in 1..21 {
            assert_eq!(fb.get(30, y), Some('.'), "centerline row {y}");
        }

        // Paddles at rows 9..13 in columns 1 and 58.
        for y in 9..13 {
            assert_eq!(fb.get(1, y), Some('█'));
            assert_eq!(fb.get(58, y), Some('█'));
        }
        assert_eq!(fb.get(1, 8), Some(' '));
        assert_eq!(fb.get(1, 13), Some(' '));

        assert_eq!(fb.get(10, 5), Some('█'));
    }

    #[test]
    fn ball_outside_the_arena_is_clipped() {
        let mut rally = Rally::seeded(GameMode::PlayerVsPlayer, 1);
        rally.ball = Ball::new(75.0, 11.0, 25.0, 0.0);
        let fb = GameView::default().render(&rally);
        let filled = fb.cells().iter().filter(|&&c| c == '█').count();
        assert_eq!(filled, 8);
    }

    #[test]
    fn victory_banner_names_winner_by_mode() {
        let view = GameView::default();
        let mut fb = view.framebuffer();

        let mut rally = Rally::seeded(GameMode::PlayerVsComputer, 1);
        rally.score = Score::new(1, 4);
        view.render_victory_into(&rally, Side::Right, &mut fb);
        assert!(row(&fb, 11).contains("Computer wins!"));
        assert!(row(&fb, 13).contains(EXIT_PROMPT));

        let rally = Rally::seeded(GameMode::PlayerVsPlayer, 1);
        view.render_victory_into(&rally, Side::Right, &mut fb);
        assert!(row(&fb, 11).contains("Player 2 wins!"));
        assert_eq!(fb.get(0, 0), Some(' '));
    }
}
