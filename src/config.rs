//! Game configuration
//!
//! Every tunable constant the simulation reads. Loaded once at startup,
//! validated, and then owned by the game state for the rest of the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration cannot start a round
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena must have positive finite size, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },

    #[error("player radius must be positive, got {0}")]
    InvalidPlayerRadius(f32),

    #[error("player of radius {radius} does not fit in a {width}x{height} arena")]
    PlayerDoesNotFit { radius: f32, width: f32, height: f32 },

    #[error("player speed must be positive, got {0}")]
    InvalidPlayerSpeed(f32),

    #[error("axe size must be positive, got {0}")]
    InvalidAxeSize(f32),

    #[error("axe of size {size} at {pos:?} lies outside the arena")]
    AxeOutOfArena { pos: Vec2, size: f32 },

    #[error("axe speed caps must be non-negative and finite, got {0:?}")]
    InvalidSpeedCap(Vec2),

    #[error("axe start velocity {vel:?} exceeds speed cap {cap:?}")]
    VelocityAboveCap { vel: Vec2, cap: Vec2 },

    #[error("difficulty growth must be at least 1.0, got {0}")]
    InvalidGrowth(f32),

    #[error("score milestone must be non-zero")]
    ZeroMilestone,

    #[error("score interval must be at least {min} s, got {0}", min = MIN_SCORE_INTERVAL)]
    InvalidScoreInterval(f32),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fixed game constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Pixels per second along each held direction
    pub player_speed: f32,

    // === Axe ===
    /// Top-left corner at round start
    pub axe_start: Vec2,
    /// Side length of the square
    pub axe_size: f32,
    /// Velocity at round start (pixels/s)
    pub axe_start_vel: Vec2,
    /// Per-axis magnitude cap (pixels/s)
    pub axe_max_speed: Vec2,

    // === Scoring / difficulty ===
    pub difficulty_growth: f32,
    pub score_milestone: u32,
    /// Seconds of survival per point
    pub score_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,

            axe_start: Vec2::new(AXE_START_X, AXE_START_Y),
            axe_size: AXE_SIZE,
            axe_start_vel: Vec2::new(AXE_START_VEL_X, AXE_START_VEL_Y),
            axe_max_speed: Vec2::new(AXE_MAX_SPEED_X, AXE_MAX_SPEED_Y),

            difficulty_growth: DIFFICULTY_GROWTH,
            score_milestone: SCORE_MILESTONE,
            score_interval: SCORE_INTERVAL,
        }
    }
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

impl Config {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Arena size as a vector
    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.arena_width, self.arena_height)
    }

    /// Player spawn point (arena center)
    #[inline]
    pub fn player_start(&self) -> Vec2 {
        self.arena() / 2.0
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.arena_width) || !positive(self.arena_height) {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        if !positive(self.player_radius) {
            return Err(ConfigError::InvalidPlayerRadius(self.player_radius));
        }
        if self.player_radius * 2.0 > self.arena_width.min(self.arena_height) {
            return Err(ConfigError::PlayerDoesNotFit {
                radius: self.player_radius,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !positive(self.player_speed) {
            return Err(ConfigError::InvalidPlayerSpeed(self.player_speed));
        }

        if !positive(self.axe_size) {
            return Err(ConfigError::InvalidAxeSize(self.axe_size));
        }
        let far = self.axe_start + Vec2::splat(self.axe_size);
        if !self.axe_start.is_finite()
            || self.axe_start.min_element() < 0.0
            || far.x > self.arena_width
            || far.y > self.arena_height
        {
            return Err(ConfigError::AxeOutOfArena {
                pos: self.axe_start,
                size: self.axe_size,
            });
        }

        if !self.axe_max_speed.is_finite() || self.axe_max_speed.min_element() < 0.0 {
            return Err(ConfigError::InvalidSpeedCap(self.axe_max_speed));
        }
        let start_speed = self.axe_start_vel.abs();
        if !self.axe_start_vel.is_finite()
            || start_speed.x > self.axe_max_speed.x
            || start_speed.y > self.axe_max_speed.y
        {
            return Err(ConfigError::VelocityAboveCap {
                vel: self.axe_start_vel,
                cap: self.axe_max_speed,
            });
        }

        if !self.difficulty_growth.is_finite() || self.difficulty_growth < 1.0 {
            return Err(ConfigError::InvalidGrowth(self.difficulty_growth));
        }
        if self.score_milestone == 0 {
            return Err(ConfigError::ZeroMilestone);
        }
        if !positive(self.score_interval) || self.score_interval < MIN_SCORE_INTERVAL {
            return Err(ConfigError::InvalidScoreInterval(self.score_interval));
        }

        Ok(())
    }
}
