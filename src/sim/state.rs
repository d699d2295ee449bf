//! Game state and core simulation types
//!
//! Round counters, the target, the stage bounds and the deferred-action queue
//! all live in one `GameState` so every transition reads and writes a single
//! explicit record.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::wrap_hue;

use super::timer::RoundTimer;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    /// No round yet (or explicitly reset)
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Round is paused
    Paused,
    /// Countdown expired, round state frozen for display
    GameOver,
}

impl RoundStatus {
    /// Whether a round is in progress (playing or paused)
    pub fn is_live(&self) -> bool {
        matches!(self, RoundStatus::Playing | RoundStatus::Paused)
    }
}

/// Playable bounds in stage-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSize {
    pub w: f32,
    pub h: f32,
}

impl StageSize {
    /// Create a stage size clamped to the supported range
    pub fn new(w: f32, h: f32) -> Self {
        let w = if w.is_finite() { w } else { STAGE_MIN_W };
        let h = if h.is_finite() { h } else { STAGE_MIN_H };
        Self {
            w: w.clamp(STAGE_MIN_W, STAGE_MAX_W),
            h: h.clamp(STAGE_MIN_H, STAGE_MAX_H),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.w / 2.0, self.h / 2.0)
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

impl Default for StageSize {
    fn default() -> Self {
        Self::new(800.0, 520.0)
    }
}

/// The moving target
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    /// Base velocity (before speed and motion multipliers)
    pub vel: Vec2,
    pub radius: f32,
    /// Colour angle in [0, 360)
    pub hue: f32,
}

impl Target {
    /// Canonical round-start target at the centre of the stage
    pub fn spawn(id: u32, stage: StageSize) -> Self {
        Self {
            id,
            pos: stage.center(),
            vel: Vec2::new(TARGET_START_VEL.0, TARGET_START_VEL.1),
            radius: TARGET_START_RADIUS,
            hue: TARGET_START_HUE,
        }
    }

    /// Whether a stage-local point lies on the target
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    /// Pull the target back inside the stage (after a resize)
    pub fn confine(&mut self, stage: StageSize) {
        let min = Vec2::splat(self.radius);
        let max = (stage.as_vec2() - min).max(min);
        self.pos = self.pos.clamp(min, max);
    }

    pub fn shift_hue(&mut self, degrees: f32) {
        self.hue = wrap_hue(self.hue + degrees);
    }
}

/// Round counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub status: RoundStatus,
    pub level: u32,
    pub score: u64,
    pub combo: u32,
    pub hits: u32,
    pub misses: u32,
    /// Whole seconds remaining
    pub time_left: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            status: RoundStatus::Idle,
            level: 1,
            score: 0,
            combo: 0,
            hits: 0,
            misses: 0,
            time_left: ROUND_SECONDS,
        }
    }
}

impl RoundState {
    /// Hit percentage, rounded (0 when nothing was attempted)
    pub fn accuracy(&self) -> u32 {
        super::scoring::accuracy(self.hits, self.misses)
    }
}

/// Work scheduled for the next tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Countdown hit zero in round `generation`
    EndRound { generation: u64 },
}

/// Notable things that happened, drained by the session each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    Hit { points: u64, combo: u32 },
    Miss,
    LevelUp { level: u32 },
    NewHighScore { score: u64 },
    Paused,
    Resumed,
    RoundOver { score: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub round: RoundState,
    pub target: Target,
    pub stage: StageSize,
    /// Best score seen by this process (seeded from storage)
    pub high_score: u64,
    pub timer: RoundTimer,
    /// Bumped on every start/reset; stale deferred actions are dropped
    pub generation: u64,
    pub deferred: Vec<DeferredAction>,
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(seed: u64, stage: StageSize, high_score: u64) -> Self {
        Self {
            round: RoundState::default(),
            target: Target::spawn(1, stage),
            stage,
            high_score,
            timer: RoundTimer::default(),
            generation: 0,
            deferred: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 2,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Replace the stage bounds and keep the target inside them
    pub fn resize(&mut self, w: f32, h: f32) {
        self.stage = StageSize::new(w, h);
        self.target.confine(self.stage);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_size_clamped() {
        let s = StageSize::new(100.0, 5000.0);
        assert_eq!(s.w, STAGE_MIN_W);
        assert_eq!(s.h, STAGE_MAX_H);

        let s = StageSize::new(f32::NAN, 300.0);
        assert_eq!(s.w, STAGE_MIN_W);
        assert_eq!(s.h, 300.0);
    }

    #[test]
    fn test_target_contains() {
        let t = Target::spawn(1, StageSize::new(400.0, 300.0));
        assert!(t.contains(Vec2::new(200.0, 150.0)));
        assert!(t.contains(Vec2::new(222.0, 150.0)));
        assert!(!t.contains(Vec2::new(223.0, 150.0)));
    }

    #[test]
    fn test_confine_after_shrink() {
        let mut t = Target::spawn(1, StageSize::new(1200.0, 900.0));
        t.pos = Vec2::new(1100.0, 800.0);
        t.confine(StageSize::new(400.0, 300.0));
        assert_eq!(t.pos, Vec2::new(400.0 - t.radius, 300.0 - t.radius));
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(7, StageSize::default(), 42);
        assert_eq!(state.round.status, RoundStatus::Idle);
        assert_eq!(state.round.level, 1);
        assert_eq!(state.round.time_left, ROUND_SECONDS);
        assert_eq!(state.high_score, 42);
        assert_eq!(state.round.accuracy(), 0);
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = GameState::new(7, StageSize::default(), 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
        assert!(a > state.target.id);
    }
}
