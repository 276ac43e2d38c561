//! Per-frame simulation tick
//!
//! Dispatches to the active phase. Only `Playing` moves entities or checks
//! collisions; `Menu` and `GameOver` just wait for the start key.

use super::collision::collides;
use super::difficulty;
use super::state::{GamePhase, GameState};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held directions (any combination)
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Start/restart pressed this frame (edge-triggered)
    pub start: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}");
        0.0
    };

    state.frame += 1;

    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Playing => tick_playing(state, input, dt),
        GamePhase::GameOver => tick_game_over(state, input),
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.start_round();
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    let arena = state.arena();

    state.player.update(input, dt, state.config.player_speed, arena);

    let bounce = state.axe.update(dt, arena);
    if bounce.any() {
        log::trace!("Axe bounced {:?}, velocity now {:?}", bounce, state.axe.vel);
    }

    state.score.accumulate(dt, state.config.score_interval);
    difficulty::apply(&mut state.score, &mut state.axe, &state.config);

    // Checked against post-move positions
    if collides(&state.player, &state.axe) {
        state.end_round();
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput) {
    // High score was reconciled on entry
    if input.start {
        state.start_round();
    }
}
