//! Survival scoring and the in-memory high score
//!
//! One point per whole scoring interval survived. The high score lives only
//! for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Score state for the current round plus the process-wide best
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Points this round
    pub score: u32,
    /// Seconds accumulated toward the next point, in `[0, interval)`
    pub timer: f32,
    /// Best score of any completed round
    pub high_score: u32,
    /// Score at which difficulty last increased
    pub last_increase: u32,
    /// Completed rounds
    pub rounds_played: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed time, converting whole intervals into points
    ///
    /// The remainder carries over so variable frame times do not drift.
    /// Returns the number of points gained.
    pub fn accumulate(&mut self, dt: f32, interval: f32) -> u32 {
        self.timer += dt;
        if self.timer < interval {
            return 0;
        }

        // Whole intervals in one step; a repeated subtraction stalls once
        // `interval` drops below the timer's precision
        let whole = (self.timer / interval).floor();
        let remainder = self.timer - whole * interval;
        self.timer = if (0.0..interval).contains(&remainder) {
            remainder
        } else {
            0.0
        };

        // Float to int casts saturate
        let gained = whole as u32;
        self.score = self.score.saturating_add(gained);
        gained
    }

    /// Fold the current score into the high score
    ///
    /// Returns true if the high score was raised. Calling again with the
    /// same score changes nothing.
    pub fn reconcile_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }

    /// Clear per-round counters, keeping the high score
    pub fn reset_round(&mut self) {
        self.score = 0;
        self.timer = 0.0;
        self.last_increase = 0;
    }
}
