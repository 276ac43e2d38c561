//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in `GameState`, which owns the
//! player, the axe, the score tracker and the current phase.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::score::ScoreTracker;
use super::snapshot::Snapshot;
use super::tick::TickInput;
use crate::config::{Config, ConfigError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended by a collision, waiting for restart input
    GameOver,
}

/// The player-controlled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, radius }
    }

    /// Move along every held direction
    ///
    /// Each direction is applied only if the whole circle stays inside the
    /// arena afterwards. A step that would cross the wall is dropped for
    /// this frame rather than shortened.
    pub fn update(&mut self, input: &TickInput, dt: f32, speed: f32, arena: Vec2) {
        let step = speed * dt;
        let min = Vec2::splat(self.radius);
        let max = arena - min;

        if input.right && self.pos.x + step <= max.x {
            self.pos.x += step;
        }
        if input.left && self.pos.x - step >= min.x {
            self.pos.x -= step;
        }
        if input.up && self.pos.y - step >= min.y {
            self.pos.y -= step;
        }
        if input.down && self.pos.y + step <= max.y {
            self.pos.y += step;
        }
    }

    /// True if the circle lies fully inside the arena
    pub fn in_bounds(&self, arena: Vec2) -> bool {
        let min = Vec2::splat(self.radius);
        let max = arena - min;
        self.pos.cmpge(min).all() && self.pos.cmple(max).all()
    }
}

/// Which axes reflected during an obstacle update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// The bouncing axe (axis-aligned square)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    /// Side length
    pub size: f32,
    /// Pixels per second
    pub vel: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: f32, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    /// Advance by one frame, then reflect off any wall that was reached
    ///
    /// Reflection happens after the move, so the box may sit past a wall
    /// by up to one frame's displacement before heading back.
    pub fn update(&mut self, dt: f32, arena: Vec2) -> Bounce {
        self.pos += self.vel * dt;

        Bounce {
            x: reflect_axis(self.pos.x, self.size, arena.x, &mut self.vel.x),
            y: reflect_axis(self.pos.y, self.size, arena.y, &mut self.vel.y),
        }
    }
}

/// Flip `vel` if the span `[pos, pos + extent]` reached `[0, bound]` while moving outward
fn reflect_axis(pos: f32, extent: f32, bound: f32, vel: &mut f32) -> bool {
    // Outward-only: after an overshoot the box can still be past the wall
    // while heading back, and flipping again would pin it there
    let past_far = pos + extent >= bound && *vel > 0.0;
    let past_near = pos <= 0.0 && *vel < 0.0;
    if past_far || past_near {
        *vel = -*vel;
        true
    } else {
        false
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Constants this run was started with
    pub config: Config,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    pub axe: Obstacle,
    pub score: ScoreTracker,
    /// Frames ticked since process start
    pub frame: u64,
}

impl GameState {
    /// Create the state in the Menu phase
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            phase: GamePhase::Menu,
            player: Player::new(config.player_start(), config.player_radius),
            axe: Obstacle::new(config.axe_start, config.axe_size, config.axe_start_vel),
            score: ScoreTracker::default(),
            frame: 0,
        })
    }

    /// Arena size
    #[inline]
    pub fn arena(&self) -> Vec2 {
        self.config.arena()
    }

    /// Reset entities and round counters, then enter Playing
    pub fn start_round(&mut self) {
        self.player.pos = self.config.player_start();
        self.player.radius = self.config.player_radius;
        self.axe = Obstacle::new(
            self.config.axe_start,
            self.config.axe_size,
            self.config.axe_start_vel,
        );
        self.score.reset_round();
        self.phase = GamePhase::Playing;

        log::info!(
            "Round {} started at frame {} (high score {})",
            self.score.rounds_played + 1,
            self.frame,
            self.score.high_score
        );
    }

    /// Close the round: reconcile the high score and enter GameOver
    pub fn end_round(&mut self) {
        let new_best = self.score.reconcile_high_score();
        self.score.rounds_played += 1;
        self.phase = GamePhase::GameOver;

        if new_best {
            log::info!(
                "Game over at frame {}: score {} (new high score)",
                self.frame,
                self.score.score
            );
        } else {
            log::info!(
                "Game over at frame {}: score {} (high score {})",
                self.frame,
                self.score.score,
                self.score.high_score
            );
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena: self.arena(),
            player_pos: self.player.pos,
            player_radius: self.player.radius,
            axe_pos: self.axe.pos,
            axe_size: self.axe.size,
            phase: self.phase,
            score: self.score.score,
            high_score: self.score.high_score,
            rounds_played: self.score.rounds_played,
            frame: self.frame,
        }
    }
}
