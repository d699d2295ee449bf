//! Target motion and wall bounces
//!
//! The target stores its *base* velocity. Each tick the level speed multiplier
//! and the reduced-motion multiplier are applied for integration and divided
//! back out afterwards, so toggling reduced motion never compounds.

use glam::Vec2;

use super::state::{StageSize, Target};
use crate::consts::*;
use crate::wrap_hue;

/// Level-derived target behaviour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub speed_multiplier: f32,
    pub radius: f32,
}

impl Difficulty {
    /// Faster and smaller as the level rises
    pub fn for_level(level: u32) -> Self {
        let level = level.max(1);
        Self {
            speed_multiplier: 1.0 + (level - 1) as f32 * SPEED_PER_LEVEL,
            radius: (TARGET_MAX_RADIUS - 2.0 * level as f32)
                .clamp(TARGET_MIN_RADIUS, TARGET_MAX_RADIUS),
        }
    }

    /// Per-axis cap on effective speed
    #[inline]
    pub fn speed_ceiling(&self) -> f32 {
        MAX_AXIS_SPEED * self.speed_multiplier
    }
}

/// Motion multiplier for the reduced-motion preference
#[inline]
pub fn motion_multiplier(reduced_motion: bool) -> f32 {
    if reduced_motion { REDUCED_MOTION_FACTOR } else { 1.0 }
}

/// Bounce one axis off the [0, extent] walls.
///
/// Returns the corrected position and velocity. A bounce forces the velocity
/// away from the wall and boosts it by `BOUNCE_BOOST`.
#[inline]
pub fn bounce_axis(pos: f32, vel: f32, radius: f32, extent: f32) -> (f32, f32) {
    let far = extent - radius;
    if pos < radius {
        (radius, vel.abs() * BOUNCE_BOOST)
    } else if pos > far {
        (far.max(radius), -vel.abs() * BOUNCE_BOOST)
    } else {
        (pos, vel)
    }
}

/// Advance the target by one tick
pub fn step_target(
    target: &mut Target,
    dt: f32,
    stage: StageSize,
    difficulty: Difficulty,
    motion: f32,
) {
    let scale = difficulty.speed_multiplier * motion;
    let ceiling = Vec2::splat(difficulty.speed_ceiling());

    let mut vel = (target.vel * scale).clamp(-ceiling, ceiling);
    target.radius = difficulty.radius;
    target.pos += vel * dt;

    let (x, vx) = bounce_axis(target.pos.x, vel.x, target.radius, stage.w);
    let (y, vy) = bounce_axis(target.pos.y, vel.y, target.radius, stage.h);
    target.pos = Vec2::new(x, y);
    vel = Vec2::new(vx, vy).clamp(-ceiling, ceiling);

    if scale > 0.0 {
        target.vel = vel / scale;
    }
    target.hue = wrap_hue(target.hue + dt * HUE_DRIFT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn target_at(pos: Vec2, vel: Vec2) -> Target {
        Target {
            id: 1,
            pos,
            vel,
            radius: 22.0,
            hue: 0.0,
        }
    }

    #[test]
    fn test_difficulty_curve() {
        let d1 = Difficulty::for_level(1);
        assert_eq!(d1.speed_multiplier, 1.0);
        assert_eq!(d1.radius, 22.0);

        let d3 = Difficulty::for_level(3);
        assert!(d3.speed_multiplier > d1.speed_multiplier);
        assert_eq!(d3.radius, 18.0);

        // Radius floors at the minimum
        assert_eq!(Difficulty::for_level(50).radius, TARGET_MIN_RADIUS);
    }

    #[test]
    fn test_free_motion() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(400.0, 300.0), Vec2::new(100.0, -50.0));
        step_target(&mut t, 0.05, stage, Difficulty::for_level(1), 1.0);
        assert!((t.pos.x - 405.0).abs() < 1e-4);
        assert!((t.pos.y - 297.5).abs() < 1e-4);
        assert_eq!(t.vel, Vec2::new(100.0, -50.0));
    }

    #[test]
    fn test_near_wall_bounce() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(23.0, 300.0), Vec2::new(-100.0, 0.0));
        step_target(&mut t, 0.05, stage, Difficulty::for_level(1), 1.0);
        assert_eq!(t.pos.x, 22.0);
        assert!((t.vel.x - 102.0).abs() < 1e-3);
    }

    #[test]
    fn test_far_wall_bounce() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(400.0, 577.0), Vec2::new(0.0, 100.0));
        step_target(&mut t, 0.05, stage, Difficulty::for_level(1), 1.0);
        assert_eq!(t.pos.y, 578.0);
        assert!((t.vel.y + 102.0).abs() < 1e-3);
    }

    #[test]
    fn test_speed_ceiling() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(400.0, 300.0), Vec2::new(2000.0, -2000.0));
        step_target(&mut t, 0.01, stage, Difficulty::for_level(1), 1.0);
        assert_eq!(t.vel, Vec2::new(MAX_AXIS_SPEED, -MAX_AXIS_SPEED));
    }

    #[test]
    fn test_bounce_boost_capped_by_ceiling() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(23.0, 300.0), Vec2::new(-MAX_AXIS_SPEED, 0.0));
        step_target(&mut t, 0.01, stage, Difficulty::for_level(1), 1.0);
        assert_eq!(t.vel.x, MAX_AXIS_SPEED);
    }

    #[test]
    fn test_reduced_motion_does_not_compound() {
        let stage = StageSize::new(1200.0, 900.0);
        let difficulty = Difficulty::for_level(2);
        let start = Vec2::new(60.0, 40.0);
        let mut t = target_at(Vec2::new(600.0, 450.0), start);

        for i in 0..20 {
            let reduced = i % 2 == 0;
            step_target(&mut t, 0.016, stage, difficulty, motion_multiplier(reduced));
        }
        // No bounces happened, so the base velocity is unchanged
        assert!((t.vel - start).length() < 1e-3);
    }

    #[test]
    fn test_reduced_motion_moves_slower() {
        let stage = StageSize::new(800.0, 600.0);
        let d = Difficulty::for_level(1);
        let mut normal = target_at(Vec2::new(400.0, 300.0), Vec2::new(100.0, 0.0));
        let mut reduced = normal.clone();
        step_target(&mut normal, 0.05, stage, d, motion_multiplier(false));
        step_target(&mut reduced, 0.05, stage, d, motion_multiplier(true));
        assert!((normal.pos.x - 405.0).abs() < 1e-4);
        assert!((reduced.pos.x - 401.75).abs() < 1e-4);
    }

    #[test]
    fn test_radius_follows_difficulty() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(400.0, 300.0), Vec2::ZERO);
        step_target(&mut t, 0.0, stage, Difficulty::for_level(4), 1.0);
        assert_eq!(t.radius, 16.0);
    }

    #[test]
    fn test_hue_drift_wraps() {
        let stage = StageSize::new(800.0, 600.0);
        let mut t = target_at(Vec2::new(400.0, 300.0), Vec2::ZERO);
        t.hue = 359.5;
        step_target(&mut t, 0.05, stage, Difficulty::for_level(1), 1.0);
        assert!((t.hue - 1.0).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_step_keeps_target_inside(
            w in STAGE_MIN_W..=STAGE_MAX_W,
            h in STAGE_MIN_H..=STAGE_MAX_H,
            fx in 0.0f32..=1.0,
            fy in 0.0f32..=1.0,
            vx in -3000.0f32..3000.0,
            vy in -3000.0f32..3000.0,
            level in 1u32..40,
            dt in 0.0f32..=MAX_FRAME_DT,
            reduced in any::<bool>(),
        ) {
            let stage = StageSize::new(w, h);
            let difficulty = Difficulty::for_level(level);
            let r = TARGET_START_RADIUS;
            let pos = Vec2::new(r + fx * (stage.w - 2.0 * r), r + fy * (stage.h - 2.0 * r));
            let mut t = target_at(pos, Vec2::new(vx, vy));

            step_target(&mut t, dt, stage, difficulty, motion_multiplier(reduced));

            prop_assert!(t.pos.x >= t.radius && t.pos.x <= stage.w - t.radius);
            prop_assert!(t.pos.y >= t.radius && t.pos.y <= stage.h - t.radius);
            prop_assert!(t.hue >= 0.0 && t.hue < 360.0);
        }
    }
}
