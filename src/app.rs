//! Game loop controller.
//!
//! Drives one match through three phases:
//!
//! - **Running**: poll one key, advance the [`Rally`], render, sleep off the rest of the frame
//! - **Won**: the victory banner is on screen; wait for any key
//! - **Terminated**: the loop returns and the caller restores the terminal

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;

use crate::core::{Rally, Score};
use crate::input::KeySource;
use crate::term::{FrameBuffer, FramePacer, GameView, TerminalControl, TerminalRenderer};
use crate::types::{Side, ACK_POLL_MS, TARGET_FPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Won(Side),
    Terminated,
}

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// `None` if the players quit before anyone won.
    pub winner: Option<Side>,
    pub score: Score,
}

pub struct Controller<K: KeySource, T: TerminalControl> {
    keys: K,
    renderer: TerminalRenderer<T>,
    rally: Rally,
    view: GameView,
    fb: FrameBuffer,
    pacer: FramePacer,
    phase: Phase,
    winner: Option<Side>,
    last_frame: Option<Instant>,
}

impl<K: KeySource, T: TerminalControl> Controller<K, T> {
    pub fn new(rally: Rally, keys: K, renderer: TerminalRenderer<T>) -> Self {
        let view = GameView::default();
        Self {
            keys,
            renderer,
            rally,
            fb: view.framebuffer(),
            view,
            pacer: FramePacer::new(TARGET_FPS),
            phase: Phase::Running,
            winner: None,
            last_frame: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rally(&self) -> &Rally {
        &self.rally
    }

    pub fn rally_mut(&mut self) -> &mut Rally {
        &mut self.rally
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn into_parts(self) -> (K, TerminalRenderer<T>) {
        (self.keys, self.renderer)
    }

    pub fn result(&self) -> MatchResult {
        MatchResult {
            winner: self.winner,
            score: self.rally.score,
        }
    }

    /// Run until the match is terminated.
    pub fn run(&mut self) -> Result<MatchResult> {
        loop {
            match self.phase {
                Phase::Running => {
                    let frame_start = Instant::now();
                    self.step(frame_start)?;
                    if self.phase == Phase::Running {
                        self.pacer.sleep_rest(frame_start);
                    }
                }
                Phase::Won(_) => {
                    self.await_acknowledgement(Duration::from_millis(ACK_POLL_MS))?;
                }
                Phase::Terminated => return Ok(self.result()),
            }
        }
    }

    /// One iteration of the running phase, timed at `now`. Never sleeps.
    pub fn step(&mut self, now: Instant) -> Result<Phase> {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }

        let key = self.keys.poll()?;
        if key.is_some_and(|k| k.is_quit()) {
            info!(?key, score = %self.rally.score.text(), "quit requested");
            self.phase = Phase::Terminated;
            return Ok(self.phase);
        }

        let elapsed = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let outcome = self.rally.frame(key, elapsed);
        if let Some(winner) = outcome.winner {
            self.winner = Some(winner);
            self.view.render_victory_into(&self.rally, winner, &mut self.fb);
            self.renderer.draw(&self.fb)?;
            self.phase = Phase::Won(winner);
            return Ok(self.phase);
        }

        self.view.render_into(&self.rally, &mut self.fb);
        self.renderer.draw(&self.fb)?;
        Ok(self.phase)
    }

    /// Wait for any key after a win, polling every `interval`.
    pub fn await_acknowledgement(&mut self, interval: Duration) -> Result<Phase> {
        if let Phase::Won(_) = self.phase {
            while self.keys.poll()?.is_none() {
                thread::sleep(interval);
            }
            self.phase = Phase::Terminated;
        }
        Ok(self.phase)
    }
}
