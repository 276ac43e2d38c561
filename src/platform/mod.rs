//! Platform abstraction layer
//!
//! The game never talks to a window or keyboard directly. A `Platform`
//! supplies frame time, key state and the exit signal; a `Renderer`
//! consumes one `Snapshot` per frame. `run` drives both.

pub mod headless;

pub use headless::{Autopilot, LogRenderer, ScriptedPlatform};

use crate::sim::{GameState, Snapshot, TickInput, tick};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
}

/// Fixed bindings: WASD or arrows to move, Enter or Space to start
pub const UP_KEYS: [Key; 2] = [Key::W, Key::Up];
pub const DOWN_KEYS: [Key; 2] = [Key::S, Key::Down];
pub const LEFT_KEYS: [Key; 2] = [Key::A, Key::Left];
pub const RIGHT_KEYS: [Key; 2] = [Key::D, Key::Right];
pub const START_KEYS: [Key; 2] = [Key::Enter, Key::Space];

/// Input and timing source, polled once per frame
pub trait Platform {
    /// Advance to the next frame's input state
    fn poll_events(&mut self);
    /// Seconds since the previous frame
    fn frame_time(&self) -> f32;
    /// Key is currently held
    fn is_key_down(&self, key: Key) -> bool;
    /// Key went down this frame
    fn is_key_pressed(&self, key: Key) -> bool;
    /// The user asked to quit
    fn should_close(&self) -> bool;
}

/// Consumer of per-frame snapshots
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot);
}

/// Read every binding once so the whole frame sees the same input
pub fn sample_input<P: Platform + ?Sized>(platform: &P) -> TickInput {
    let down = |keys: &[Key]| keys.iter().any(|&k| platform.is_key_down(k));

    TickInput {
        up: down(&UP_KEYS),
        down: down(&DOWN_KEYS),
        left: down(&LEFT_KEYS),
        right: down(&RIGHT_KEYS),
        start: START_KEYS.iter().any(|&k| platform.is_key_pressed(k)),
    }
}

/// Totals reported when the loop exits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames: u64,
    pub rounds: u32,
    pub high_score: u32,
}

/// Run frames until the platform signals exit
pub fn run<P, R>(state: &mut GameState, platform: &mut P, renderer: &mut R) -> RunStats
where
    P: Platform + ?Sized,
    R: Renderer + ?Sized,
{
    let mut frames = 0;

    while !platform.should_close() {
        platform.poll_events();
        let input = sample_input(&*platform);
        let dt = platform.frame_time();

        tick(state, &input, dt);
        renderer.draw(&state.snapshot());
        frames += 1;
    }

    let stats = RunStats {
        frames,
        rounds: state.score.rounds_played,
        high_score: state.score.high_score,
    };
    log::info!(
        "Stopped after {} frames, {} rounds, high score {}",
        stats.frames,
        stats.rounds,
        stats.high_score
    );
    stats
}
