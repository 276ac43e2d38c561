//! Axe Dodge - A single-screen arcade dodging game
//!
//! Core modules:
//! - `sim`: Simulation (motion, collisions, scoring, difficulty, game phases)
//! - `config`: Validated game constants supplied at startup
//! - `platform`: Input/timing and renderer seams, frame loop, headless driver

pub mod config;
pub mod platform;
pub mod sim;

pub use config::{Config, ConfigError};
pub use platform::{Key, Platform, Renderer, RunStats, run};
pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Target frame step used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Pixels per second (10 px per frame at 60 Hz)
    pub const PLAYER_SPEED: f32 = 600.0;

    /// Axe defaults
    pub const AXE_START_X: f32 = 300.0;
    pub const AXE_START_Y: f32 = 0.0;
    pub const AXE_SIZE: f32 = 50.0;
    pub const AXE_START_VEL_X: f32 = 0.0;
    pub const AXE_START_VEL_Y: f32 = 200.0;
    /// Per-axis speed caps (pixels/s)
    pub const AXE_MAX_SPEED_X: f32 = 300.0;
    pub const AXE_MAX_SPEED_Y: f32 = 400.0;

    /// Speed multiplier applied at each score milestone
    pub const DIFFICULTY_GROWTH: f32 = 1.1;
    /// Score interval between difficulty increases
    pub const SCORE_MILESTONE: u32 = 10;
    /// Seconds of survival per point
    pub const SCORE_INTERVAL: f32 = 1.0;
    /// Shortest accepted scoring interval (seconds)
    pub const MIN_SCORE_INTERVAL: f32 = 0.01;
}
