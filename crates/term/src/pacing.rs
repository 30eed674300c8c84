use std::thread;
use std::time::{Duration, Instant};

/// Keeps the loop at a target frame rate by sleeping off whatever part of the
/// frame interval the frame's own work did not use.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Duration,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left in the frame after `spent`. Zero once the frame overran.
    pub fn remaining(&self, spent: Duration) -> Duration {
        self.interval.saturating_sub(spent)
    }

    /// Sleep until one interval has passed since `frame_start`.
    pub fn sleep_rest(&self, frame_start: Instant) {
        let rest = self.remaining(frame_start.elapsed());
        if !rest.is_zero() {
            thread::sleep(rest);
        }
    }
}
