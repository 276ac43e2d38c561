//! Milestone difficulty scaling
//!
//! Every `score_milestone` points the axe speeds up by `difficulty_growth`,
//! capped per axis. Direction of travel is never changed.

use glam::Vec2;

use super::score::ScoreTracker;
use super::state::Obstacle;
use crate::config::Config;

/// Scale one velocity component, keeping its sign
#[inline]
fn scale_axis(vel: f32, growth: f32, cap: f32) -> f32 {
    if vel == 0.0 {
        return vel;
    }
    (vel.abs() * growth).min(cap).copysign(vel)
}

/// Multiply each nonzero axis by `growth`, clamping magnitudes to `cap`
pub fn scaled_velocity(vel: Vec2, growth: f32, cap: Vec2) -> Vec2 {
    Vec2::new(
        scale_axis(vel.x, growth, cap.x),
        scale_axis(vel.y, growth, cap.y),
    )
}

/// Speed up the axe if the score just reached a new milestone
///
/// Fires at most once per milestone value no matter how many frames the
/// score stays there. Returns true if the axe was sped up.
pub fn apply(score: &mut ScoreTracker, axe: &mut Obstacle, config: &Config) -> bool {
    if score.score <= score.last_increase || score.score % config.score_milestone != 0 {
        return false;
    }

    score.last_increase = score.score;
    axe.vel = scaled_velocity(axe.vel, config.difficulty_growth, config.axe_max_speed);

    log::debug!(
        "Difficulty up at score {}: axe velocity {:?}",
        score.score,
        axe.vel
    );
    true
}
