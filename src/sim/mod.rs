//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - Variable timestep, clamped by the frame clock
//! - Seeded RNG only
//! - Timer expiry is deferred to the next tick boundary

pub mod clock;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod timer;

pub use clock::FrameClock;
pub use physics::{Difficulty, bounce_axis, motion_multiplier, step_target};
pub use scoring::{accuracy, level_for_score, score_delta};
pub use state::{
    DeferredAction, GameEvent, GameState, RoundState, RoundStatus, StageSize, Target,
};
pub use tick::{Action, apply_action, run_deferred, tick};
pub use timer::RoundTimer;
