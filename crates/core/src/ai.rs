//! Computer opponent policy.
//!
//! Each tick the opponent draws one uniform sample: below `AI_TRACK_PROBABILITY` it
//! chases the ball at full speed, otherwise at `AI_SLUGGISH_FACTOR` of it. Inside the
//! dead zone around the paddle center it holds still.

use crate::paddle::Paddle;
use crate::types::{AI_DEAD_ZONE, AI_SLUGGISH_FACTOR, AI_TRACK_PROBABILITY};

/// Move `paddle` toward `ball_y` for one tick, then clamp it into `[1, arena_height - 2 - height]`.
///
/// `sample` is a uniform draw from `[0, 1)`.
pub fn track_ball(paddle: &mut Paddle, ball_y: f32, dt: f32, sample: f64, arena_height: i32) {
    let speed = if sample < AI_TRACK_PROBABILITY {
        paddle.speed
    } else {
        paddle.speed * AI_SLUGGISH_FACTOR
    };

    let center = paddle.center();
    if ball_y < center - AI_DEAD_ZONE {
        paddle.y -= speed * dt;
    } else if ball_y > center + AI_DEAD_ZONE {
        paddle.y += speed * dt;
    }

    let bottom = (arena_height - 2 - paddle.height) as f32;
    paddle.y = paddle.y.max(1.0).min(bottom);
}
