//! Round lifecycle and the per-frame simulation tick
//!
//! idle → playing ⇄ paused, playing → gameover (countdown), gameover → playing
//! (restart) or → idle (reset). Every transition is total.

use glam::Vec2;

use super::physics::{Difficulty, step_target};
use super::scoring::{register_hit, register_miss};
use super::state::{DeferredAction, GameEvent, GameState, RoundState, RoundStatus, Target};

/// Semantic input actions from the input adapter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Click/tap at a stage-local point
    PointerHit { x: f32, y: f32 },
    /// Begin a round from idle or game over
    Start,
    /// Playing ⇄ paused
    TogglePause,
    /// Begin a fresh round from any status
    Restart,
    /// Drop back to idle from any status
    Reset,
}

/// Apply one input action immediately
pub fn apply_action(state: &mut GameState, action: Action) {
    match action {
        Action::PointerHit { x, y } => pointer_hit(state, Vec2::new(x, y)),
        Action::Start => {
            if !state.round.status.is_live() {
                start_round(state);
            }
        }
        Action::TogglePause => toggle_pause(state),
        Action::Restart => start_round(state),
        Action::Reset => reset(state),
    }
}

/// Reset every round counter, reseed the target and begin playing
pub fn start_round(state: &mut GameState) {
    reinitialize(state);
    state.round.status = RoundStatus::Playing;
    log::info!("Round {} started", state.generation);
    state.events.push(GameEvent::RoundStarted);
}

/// Reset every round counter and go idle
pub fn reset(state: &mut GameState) {
    reinitialize(state);
    log::info!("Round reset to idle");
}

fn reinitialize(state: &mut GameState) {
    state.generation += 1;
    state.round = RoundState::default();
    state.timer.reset();
    let id = state.next_entity_id();
    state.target = Target::spawn(id, state.stage);
}

/// Playing ⇄ paused; no-op from idle or game over
pub fn toggle_pause(state: &mut GameState) {
    match state.round.status {
        RoundStatus::Playing => {
            state.round.status = RoundStatus::Paused;
            state.events.push(GameEvent::Paused);
        }
        RoundStatus::Paused => {
            state.round.status = RoundStatus::Playing;
            state.events.push(GameEvent::Resumed);
        }
        RoundStatus::Idle | RoundStatus::GameOver => {}
    }
}

/// Resolve a click against the most recently committed target position
pub fn pointer_hit(state: &mut GameState, point: Vec2) {
    if state.round.status != RoundStatus::Playing {
        return;
    }
    if state.target.contains(point) {
        register_hit(state);
    } else {
        register_miss(state);
    }
}

/// Apply work queued by previous ticks. Call once per frame boundary.
pub fn run_deferred(state: &mut GameState) {
    for action in std::mem::take(&mut state.deferred) {
        match action {
            DeferredAction::EndRound { generation } => end_round(state, generation),
        }
    }
}

fn end_round(state: &mut GameState, generation: u64) {
    if generation != state.generation {
        log::debug!("Dropping stale end-of-round from round {}", generation);
        return;
    }
    match state.round.status {
        RoundStatus::Playing | RoundStatus::Paused => {
            state.round.status = RoundStatus::GameOver;
            log::info!(
                "Round over: score {}, level {}, accuracy {}%",
                state.round.score,
                state.round.level,
                state.round.accuracy()
            );
            state.events.push(GameEvent::RoundOver {
                score: state.round.score,
            });
        }
        _ => {}
    }
}

/// Advance the round by `dt` seconds.
///
/// Does nothing unless a round is playing. Countdown expiry is queued, not
/// applied: the round ends at the next `run_deferred`.
pub fn tick(state: &mut GameState, dt: f32, motion: f32) {
    if state.round.status != RoundStatus::Playing {
        return;
    }

    let difficulty = Difficulty::for_level(state.round.level);
    step_target(&mut state.target, dt, state.stage, difficulty, motion);

    if state.timer.advance(&mut state.round.time_left, dt) {
        state.deferred.push(DeferredAction::EndRound {
            generation: state.generation,
        });
    }
}
