//! Game loop scenarios driven with scripted keys and an in-memory terminal.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use anyhow::Result;

use tui_pong::app::{Controller, Phase};
use tui_pong::core::{Ball, Rally, Score};
use tui_pong::input::KeySource;
use tui_pong::term::{CrosstermControl, TerminalRenderer};
use tui_pong::types::{GameMode, Key, Side};

/// Plays back one entry per poll, then reports no key forever.
struct ScriptedKeys {
    script: VecDeque<Option<Key>>,
}

impl ScriptedKeys {
    fn new(script: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl KeySource for ScriptedKeys {
    fn poll(&mut self) -> Result<Option<Key>> {
        Ok(self.script.pop_front().flatten())
    }
}

type TestController = Controller<ScriptedKeys, CrosstermControl<Vec<u8>>>;

fn controller(mode: GameMode, script: impl IntoIterator<Item = Option<Key>>) -> TestController {
    Controller::new(
        Rally::seeded(mode, 11),
        ScriptedKeys::new(script),
        TerminalRenderer::new(CrosstermControl::new(Vec::new())),
    )
}

fn output(c: TestController) -> String {
    let (_, renderer) = c.into_parts();
    String::from_utf8(renderer.into_control().into_inner()).unwrap()
}

fn row(c: &TestController, y: u16) -> String {
    c.framebuffer().row(y).iter().collect()
}

#[test]
fn quit_key_terminates_before_any_frame() {
    let mut c = controller(GameMode::PlayerVsPlayer, [Some(Key::Char('q'))]);
    assert_eq!(c.step(Instant::now()).unwrap(), Phase::Terminated);
    assert!(output(c).is_empty());
}

#[test]
fn interrupt_takes_the_quit_path() {
    let mut c = controller(GameMode::PlayerVsComputer, [None, Some(Key::Interrupt)]);
    let result = c.run().unwrap();
    assert_eq!(c.phase(), Phase::Terminated);
    assert_eq!(result.winner, None);
    assert_eq!(result.score, Score::new(0, 0));
}

#[test]
fn running_frame_draws_arena_with_cursor_home() {
    let mut c = controller(GameMode::PlayerVsPlayer, []);
    assert_eq!(c.step(Instant::now()).unwrap(), Phase::Running);

    assert!(row(&c, 0).contains("0 : 0"));
    assert_eq!(row(&c, 21), "=".repeat(60));

    let out = output(c);
    assert!(out.starts_with("\x1b[1;1H"));
    assert!(!out.contains("\x1b[2J"), "frames must not clear the screen");
}

#[test]
fn polled_key_moves_paddles() {
    let mut c = controller(GameMode::PlayerVsPlayer, [Some(Key::Char('s')), Some(Key::Up)]);
    let y0 = c.rally().left.y;
    c.step(Instant::now()).unwrap();
    c.step(Instant::now()).unwrap();
    assert!(c.rally().left.y > y0);
    assert!(c.rally().right.y < y0);
}

#[test]
fn elapsed_time_drives_physics() {
    let mut c = controller(GameMode::PlayerVsPlayer, []);
    let t0 = Instant::now();
    c.step(t0).unwrap();
    let x0 = c.rally().ball.x;

    c.step(t0 + Duration::from_millis(100)).unwrap();
    let x1 = c.rally().ball.x;
    assert!(x1 > x0, "ball should advance: {x0} -> {x1}");
}

#[test]
fn win_pauses_then_any_key_terminates() {
    let mut c = controller(
        GameMode::PlayerVsPlayer,
        [None, None, None, Some(Key::Char('x'))],
    );
    {
        let rally = c.rally_mut();
        rally.score = Score::new(3, 2);
        rally.ball = Ball::new(59.5, 11.0, 25.0, 0.0);
    }

    assert_eq!(c.step(Instant::now()).unwrap(), Phase::Won(Side::Left));
    assert_eq!(c.rally().score, Score::new(4, 2));
    assert!(row(&c, 11).contains("Player 1 wins!"));

    // Further steps do nothing until acknowledged.
    assert_eq!(c.step(Instant::now()).unwrap(), Phase::Won(Side::Left));

    assert_eq!(
        c.await_acknowledgement(Duration::from_millis(1)).unwrap(),
        Phase::Terminated
    );
    assert_eq!(c.result().winner, Some(Side::Left));
}

#[test]
fn computer_win_is_labelled() {
    let mut c = controller(GameMode::PlayerVsComputer, [None, Some(Key::Char('q'))]);
    {
        let rally = c.rally_mut();
        rally.score = Score::new(1, 3);
        rally.ball = Ball::new(-0.5, 11.0, -25.0, 0.0);
    }

    let result = c.run().unwrap();
    assert_eq!(result.winner, Some(Side::Right));
    assert_eq!(result.score, Score::new(1, 4));
    assert!(output(c).contains("Computer wins!"));
}
