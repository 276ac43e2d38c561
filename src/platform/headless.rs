//! Headless platform implementations
//!
//! Used by the native binary and by tests: a scripted key sequence, a
//! seeded random autopilot, and a renderer that only logs.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Key, Platform, Renderer};
use crate::sim::{GamePhase, Snapshot};

/// Replays a fixed list of held-key sets, one per frame, then closes
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    dt: f32,
    frames: Vec<Vec<Key>>,
    cursor: usize,
    held: HashSet<Key>,
    previous: HashSet<Key>,
}

impl ScriptedPlatform {
    pub fn new(dt: f32, frames: Vec<Vec<Key>>) -> Self {
        Self {
            dt,
            frames,
            cursor: 0,
            held: HashSet::new(),
            previous: HashSet::new(),
        }
    }
}

impl Platform for ScriptedPlatform {
    fn poll_events(&mut self) {
        self.previous = std::mem::take(&mut self.held);
        if let Some(keys) = self.frames.get(self.cursor) {
            self.held.extend(keys.iter().copied());
        }
        self.cursor += 1;
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.held.contains(&key) && !self.previous.contains(&key)
    }

    fn should_close(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

/// Frames between heading changes
const HEADING_HOLD_FRAMES: u64 = 12;
/// Frames between start-key taps
const START_TAP_FRAMES: u64 = 90;

/// Seeded random player for demos
///
/// Wanders in a random direction, re-rolled every few frames, and taps
/// Enter periodically so rounds restart on their own.
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    dt: f32,
    frame: u64,
    max_frames: u64,
    heading: [bool; 4],
    start_pressed: bool,
}

impl Autopilot {
    pub fn new(seed: u64, dt: f32, max_frames: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            dt,
            frame: 0,
            max_frames,
            heading: [false; 4],
            start_pressed: false,
        }
    }

    fn roll_heading(&mut self) {
        for held in &mut self.heading {
            *held = self.rng.random_bool(0.35);
        }
    }
}

impl Platform for Autopilot {
    fn poll_events(&mut self) {
        if self.frame % HEADING_HOLD_FRAMES == 0 {
            self.roll_heading();
        }
        self.start_pressed = self.frame % START_TAP_FRAMES == 0;
        self.frame += 1;
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn is_key_down(&self, key: Key) -> bool {
        let [up, down, left, right] = self.heading;
        match key {
            Key::W | Key::Up => up,
            Key::S | Key::Down => down,
            Key::A | Key::Left => left,
            Key::D | Key::Right => right,
            Key::Enter | Key::Space => self.start_pressed,
        }
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        matches!(key, Key::Enter | Key::Space) && self.start_pressed
    }

    fn should_close(&self) -> bool {
        self.frame >= self.max_frames
    }
}

/// Renderer that logs phase changes instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
    frames_drawn: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        self.frames_drawn += 1;
        if self.last_phase != Some(snapshot.phase) {
            log::info!("{}", snapshot.status_line());
            self.last_phase = Some(snapshot.phase);
        }
    }
}
