//! Orb Rush - A single-screen arcade clicker
//!
//! Core modules:
//! - `sim`: Simulation (target physics, round timer, scoring, round state machine)
//! - `session`: Frame driver binding the simulation to settings and storage
//! - `persistence`: Key-value storage for settings and the high score
//! - `input`: Raw pointer/keyboard events to semantic actions
//! - `hud`: Read-only HUD snapshot for the presentation layer

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscore;
pub mod hud;
pub mod input;
pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;

pub use highscore::HighScore;
pub use session::Session;
pub use settings::{Settings, Theme};

/// Game configuration constants
pub mod consts {
    /// Length of one round in whole seconds
    pub const ROUND_SECONDS: u32 = 60;
    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Stage bounds (pixels)
    pub const STAGE_MIN_W: f32 = 280.0;
    pub const STAGE_MAX_W: f32 = 1200.0;
    pub const STAGE_MIN_H: f32 = 240.0;
    pub const STAGE_MAX_H: f32 = 900.0;

    /// Target defaults at round start
    pub const TARGET_START_RADIUS: f32 = 22.0;
    pub const TARGET_START_VEL: (f32, f32) = (180.0, 140.0);
    pub const TARGET_START_HUE: f32 = 190.0;

    /// Target radius limits across levels
    pub const TARGET_MIN_RADIUS: f32 = 12.0;
    pub const TARGET_MAX_RADIUS: f32 = 24.0;

    /// Per-axis speed ceiling at speed multiplier 1.0 (pixels/s)
    pub const MAX_AXIS_SPEED: f32 = 520.0;
    /// Speed gain applied on each wall bounce (multiplicative)
    pub const BOUNCE_BOOST: f32 = 1.02;
    /// Speed multiplier gained per level above 1
    pub const SPEED_PER_LEVEL: f32 = 0.12;
    /// Motion multiplier when reduced motion is on
    pub const REDUCED_MOTION_FACTOR: f32 = 0.35;
    /// Cosmetic hue drift (degrees/s)
    pub const HUE_DRIFT: f32 = 30.0;

    /// Respawn speed: base + U(0, jitter) + per-level increment
    pub const RESPAWN_BASE_SPEED: f32 = 170.0;
    pub const RESPAWN_SPEED_JITTER: f32 = 120.0;
    pub const RESPAWN_SPEED_PER_LEVEL: f32 = 14.0;
    /// Respawn margin added to the radius on every side
    pub const RESPAWN_PADDING: f32 = 12.0;
    /// Hue shift on every hit / on a level change (degrees)
    pub const HIT_HUE_SHIFT: f32 = 55.0;
    pub const LEVEL_HUE_SHIFT: f32 = 35.0;

    /// Scoring
    pub const BASE_HIT_POINTS: f32 = 10.0;
    pub const URGENCY_WEIGHT: f32 = 0.35;
    pub const COMBO_BONUS_CAP: u32 = 25;
    pub const COMBO_BONUS_STEP: f32 = 0.08;
    pub const LEVEL_BONUS_STEP: f32 = 0.06;
    /// Points per quadratic level step: level = floor(sqrt(score / 120)) + 1
    pub const LEVEL_SCORE_UNIT: f64 = 120.0;
    /// Seconds granted on a level change
    pub const LEVEL_TIME_BONUS: u32 = 2;
}

/// Wrap a hue angle into [0, 360)
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(0.0), 0.0);
        assert_eq!(wrap_hue(370.0), 10.0);
        assert_eq!(wrap_hue(-10.0), 350.0);
        assert!(wrap_hue(-1e-9) < 360.0);
    }
}
