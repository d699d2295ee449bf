//! Scoring and level progression
//!
//! Hits pay more under time pressure, on long combos and on higher levels.
//! Level is a pure function of cumulative score.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Multiplier that grows as the countdown runs down (1.0 at full time)
pub fn urgency(time_left: u32) -> f32 {
    let remaining = time_left.min(ROUND_SECONDS) as f32 / ROUND_SECONDS as f32;
    1.0 + (1.0 - remaining) * URGENCY_WEIGHT
}

/// Combo multiplier; the counter itself is uncapped but the bonus is not
pub fn combo_bonus(combo: u32) -> f32 {
    1.0 + combo.min(COMBO_BONUS_CAP) as f32 * COMBO_BONUS_STEP
}

pub fn level_bonus(level: u32) -> f32 {
    1.0 + level.saturating_sub(1) as f32 * LEVEL_BONUS_STEP
}

/// Points for one hit
pub fn score_delta(combo: u32, level: u32, time_left: u32) -> u64 {
    let raw = BASE_HIT_POINTS * urgency(time_left) * combo_bonus(combo) * level_bonus(level);
    raw.round() as u64
}

/// Level for a cumulative score: thresholds at 0, 120, 480, 1080, ...
pub fn level_for_score(score: u64) -> u32 {
    let steps = (score as f64 / LEVEL_SCORE_UNIT).sqrt().floor() as u32;
    steps.saturating_add(1).max(1)
}

/// Rounded hit percentage, 0 when nothing was attempted
pub fn accuracy(hits: u32, misses: u32) -> u32 {
    let attempts = hits as u64 + misses as u64;
    if attempts == 0 {
        return 0;
    }
    (100.0 * hits as f64 / attempts as f64).round() as u32
}

/// Score a hit on the target and respawn it elsewhere.
///
/// Returns the points awarded.
pub fn register_hit(state: &mut GameState) -> u64 {
    let round = &mut state.round;
    let level = round.level;
    let points = score_delta(round.combo, round.level, round.time_left);
    round.score += points;
    round.hits += 1;
    round.combo += 1;
    let combo = round.combo;

    apply_progression(state);
    relocate_target(state, level);

    log::debug!(
        "Hit +{} (combo {}, level {}, score {})",
        points,
        combo,
        state.round.level,
        state.round.score
    );
    state.events.push(GameEvent::Hit { points, combo });
    points
}

/// A click that missed: combo is lost, nothing else changes
pub fn register_miss(state: &mut GameState) {
    state.round.misses += 1;
    state.round.combo = 0;
    state.events.push(GameEvent::Miss);
}

/// Re-derive the level from the score and update the high score
pub fn apply_progression(state: &mut GameState) {
    let level = level_for_score(state.round.score);
    if level != state.round.level {
        state.round.level = level;
        state.round.time_left = (state.round.time_left + LEVEL_TIME_BONUS).min(ROUND_SECONDS);
        state.target.shift_hue(LEVEL_HUE_SHIFT);
        log::info!("Level up: {} (score {})", level, state.round.score);
        state.events.push(GameEvent::LevelUp { level });
    }

    if state.round.score > state.high_score {
        state.high_score = state.round.score;
        log::debug!("High score now {}", state.high_score);
        state.events.push(GameEvent::NewHighScore {
            score: state.high_score,
        });
    }
}

/// Move the target to a random spot with a fresh random heading.
///
/// `level` is the level the hit was scored at.
fn relocate_target(state: &mut GameState, level: u32) {
    let pad = RESPAWN_PADDING + state.target.radius;
    let stage = state.stage;

    let x = random_between(state, pad, stage.w - pad);
    let y = random_between(state, pad, stage.h - pad);
    let jitter = state.rng.random_range(0.0..RESPAWN_SPEED_JITTER);
    let speed = RESPAWN_BASE_SPEED + jitter + (level - 1) as f32 * RESPAWN_SPEED_PER_LEVEL;
    let angle = state.rng.random_range(0.0..TAU);

    state.target.id = state.next_entity_id();
    state.target.pos = Vec2::new(x, y);
    state.target.vel = Vec2::from_angle(angle) * speed;
    state.target.shift_hue(HIT_HUE_SHIFT);
}

fn random_between(state: &mut GameState, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        state.rng.random_range(lo..=hi)
    } else {
        (lo + hi) / 2.0
    }
}
