//! Render-ready view of one frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GamePhase;

/// Everything a renderer needs to draw a frame
///
/// Score and high score only mean something in `Playing` and `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Vec2,
    /// Player center
    pub player_pos: Vec2,
    pub player_radius: f32,
    /// Axe top-left corner
    pub axe_pos: Vec2,
    pub axe_size: f32,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub rounds_played: u32,
    /// Frames ticked since process start
    pub frame: u64,
}

impl Snapshot {
    /// Whether the score line should be shown
    pub fn shows_score(&self) -> bool {
        self.phase != GamePhase::Menu
    }

    /// Short status text for the current phase
    pub fn status_line(&self) -> String {
        match self.phase {
            GamePhase::Menu => "Press Enter to start".to_string(),
            GamePhase::Playing => format!("Score: {}  Best: {}", self.score, self.high_score),
            GamePhase::GameOver => format!(
                "Game Over! Score: {}  Best: {}  (Enter to restart)",
                self.score, self.high_score
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::GameState;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(Config::default()).unwrap();
        state.start_round();
        state.score.score = 4;
        state.score.high_score = 9;

        let snap = state.snapshot();
        assert_eq!(snap.player_pos, state.player.pos);
        assert_eq!(snap.player_radius, 25.0);
        assert_eq!(snap.axe_pos, state.axe.pos);
        assert_eq!(snap.axe_size, 50.0);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.score, 4);
        assert_eq!(snap.high_score, 9);
        assert_eq!(snap.arena, Vec2::new(800.0, 450.0));
        assert_eq!(snap.frame, state.frame);
    }

    #[test]
    fn test_status_line() {
        let state = GameState::new(Config::default()).unwrap();
        let snap = state.snapshot();
        assert!(!snap.shows_score());
        assert_eq!(snap.status_line(), "Press Enter to start");

        let over = Snapshot {
            phase: GamePhase::GameOver,
            score: 12,
            high_score: 12,
            ..snap
        };
        assert!(over.shows_score());
        assert!(over.status_line().starts_with("Game Over! Score: 12"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Config::default()).unwrap();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Menu\""));
    }
}
