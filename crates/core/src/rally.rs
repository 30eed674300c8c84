//! Rally module - one match of Pong
//!
//! Owns both paddles, the ball and the score, and advances them one frame at a time:
//! paddle input (human or computer), fixed-timestep ball physics, wall and paddle
//! collisions, scoring and win detection. Rendering and input polling live elsewhere.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::ai::track_ball;
use crate::ball::Ball;
use crate::paddle::Paddle;
use crate::types::{
    GameMode, Key, Side, ARENA_HEIGHT, ARENA_WIDTH, BALL_SPEED_UP, BALL_VX, BALL_VY, FIXED_DT,
    WIN_SCORE,
};

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score([u32; 2]);

impl Score {
    pub fn new(left: u32, right: u32) -> Self {
        Self([left, right])
    }

    pub fn get(&self, side: Side) -> u32 {
        self.0[side.index()]
    }

    pub fn award(&mut self, side: Side) {
        self.0[side.index()] += 1;
    }

    /// The side that reached `target`, left first if both did.
    pub fn winner(&self, target: u32) -> Option<Side> {
        if self.get(Side::Left) >= target {
            Some(Side::Left)
        } else if self.get(Side::Right) >= target {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Scoreboard text, e.g. `"2 : 1"`.
    pub fn text(&self) -> String {
        format!("{} : {}", self.0[0], self.0[1])
    }
}

/// What happened during one call to [`Rally::frame`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Number of fixed physics steps integrated.
    pub steps: u32,
    /// Side that scored this frame, if any.
    pub scored: Option<Side>,
    /// Set once a side has reached the win score.
    pub winner: Option<Side>,
}

/// Complete match state.
#[derive(Debug, Clone)]
pub struct Rally {
    pub mode: GameMode,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Wall-clock time not yet simulated, in seconds.
    accumulator: f32,
    rng: StdRng,
}

impl Rally {
    /// Create a match seeded from OS entropy.
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }

    /// Create a match with a fixed seed (reproducible serves and opponent behavior).
    pub fn seeded(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        Self {
            mode,
            left: Paddle::left(ARENA_HEIGHT),
            right: Paddle::right(ARENA_WIDTH, ARENA_HEIGHT),
            ball: Ball::new(
                ARENA_WIDTH as f32 / 2.0,
                ARENA_HEIGHT as f32 / 2.0,
                BALL_VX,
                BALL_VY,
            ),
            score: Score::default(),
            accumulator: 0.0,
            rng,
        }
    }

    /// Advance one frame.
    ///
    /// `key` is the single key polled this frame and `elapsed` the wall-clock seconds
    /// since the previous frame. The quit key is the caller's concern.
    pub fn frame(&mut self, key: Option<Key>, elapsed: f32) -> FrameOutcome {
        self.apply_input(key);
        let steps = self.integrate(elapsed);
        self.resolve_walls();
        self.resolve_paddles();
        let scored = self.check_exit();

        FrameOutcome {
            steps,
            scored,
            winner: self.winner(),
        }
    }

    /// Move both paddles from this frame's key.
    ///
    /// In player-vs-player both paddles read the same key: only one directional input
    /// is representable per frame.
    pub fn apply_input(&mut self, key: Option<Key>) {
        self.left.update(FIXED_DT, key, ARENA_HEIGHT - 1);
        match self.mode {
            GameMode::PlayerVsPlayer => self.right.update(FIXED_DT, key, ARENA_HEIGHT - 1),
            GameMode::PlayerVsComputer => {
                let sample = self.rng.random::<f64>();
                track_ball(&mut self.right, self.ball.y, FIXED_DT, sample, ARENA_HEIGHT);
            }
        }
    }

    /// Run as many fixed physics steps as the accumulated time allows.
    ///
    /// Returns the number of steps taken. The remainder carries over to the next frame.
    pub fn integrate(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.max(0.0);

        let mut steps = 0;
        while self.accumulator > FIXED_DT {
            self.ball.update(FIXED_DT);
            self.ball.speed_up(BALL_SPEED_UP);
            self.accumulator -= FIXED_DT;
            steps += 1;
        }
        steps
    }

    /// Bounce off the top and bottom borders, clamping into the playable rows.
    pub fn resolve_walls(&mut self) {
        let top = 1.0;
        let bottom = (ARENA_HEIGHT - 2) as f32;
        if self.ball.y <= top {
            self.ball.y = top;
            self.ball.bounce_vert();
        }
        if self.ball.y >= bottom {
            self.ball.y = bottom;
            self.ball.bounce_vert();
        }
    }

    /// Bounce off a paddle face. Unlike walls there is no positional correction.
    pub fn resolve_paddles(&mut self) {
        let column = self.ball.x as i32;
        if column == self.left.x + 1 && self.left.spans(self.ball.y) {
            self.ball.bounce_horiz();
        }
        if column == self.right.x - 1 && self.right.spans(self.ball.y) {
            self.ball.bounce_horiz();
        }
    }

    /// Award a point if the ball left the arena and serve a fresh ball from the center.
    ///
    /// A ball lost on the left scores for the right side and is served rightward, and
    /// vice versa. The vertical direction is a coin flip.
    pub fn check_exit(&mut self) -> Option<Side> {
        let scorer = if self.ball.x < 0.0 {
            Side::Right
        } else if self.ball.x > (ARENA_WIDTH - 1) as f32 {
            Side::Left
        } else {
            return None;
        };

        self.score.award(scorer);
        let down = self.rng.random_bool(0.5);
        self.ball = Ball::serve(ARENA_WIDTH, ARENA_HEIGHT, scorer, down);
        debug!(?scorer, score = %self.score.text(), "point scored");
        if let Some(winner) = self.winner() {
            info!(?winner, score = %self.score.text(), "match won");
        }
        Some(scorer)
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(WIN_SCORE)
    }

    /// Display name of `side` in this match's mode.
    pub fn label(&self, side: Side) -> &'static str {
        self.mode.label(side)
    }
}
