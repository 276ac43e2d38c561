//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time arrives as an explicit `dt` per frame
//! - Input arrives as an already-sampled `TickInput`
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, circle_rect_overlap, collides};
pub use score::ScoreTracker;
pub use snapshot::Snapshot;
pub use state::{Bounce, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
