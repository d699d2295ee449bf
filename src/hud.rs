//! HUD snapshot for the presentation layer
//!
//! Everything the HUD shows, already formatted. Presentation reads this each
//! frame and owns no game logic.

use crate::sim::{GameState, RoundStatus};

/// Format whole seconds as mm:ss
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub status: RoundStatus,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
    pub time: String,
    pub accuracy: u32,
    pub combo: u32,
    pub hits: u32,
    pub misses: u32,
    /// Target in stage-local pixels
    pub target_x: f32,
    pub target_y: f32,
    pub target_radius: f32,
    pub target_hue: f32,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let round = &state.round;
        Self {
            status: round.status,
            score: round.score,
            high_score: state.high_score,
            level: round.level,
            time: format_clock(round.time_left),
            accuracy: round.accuracy(),
            combo: round.combo,
            hits: round.hits,
            misses: round.misses,
            target_x: state.target.pos.x,
            target_y: state.target.pos.y,
            target_radius: state.target.radius,
            target_hue: state.target.hue,
        }
    }

    /// CSS colour for the target
    pub fn target_color(&self) -> String {
        format!("hsl({:.0}, 85%, 55%)", self.target_hue)
    }

    /// Accuracy label, e.g. "75%"
    pub fn accuracy_label(&self) -> String {
        format!("{}%", self.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Action, StageSize, apply_action};

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(60), "01:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(125), "02:05");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(3, StageSize::new(600.0, 400.0), 77);
        apply_action(&mut state, Action::Start);
        apply_action(&mut state, Action::PointerHit { x: 0.0, y: 0.0 });

        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.status, RoundStatus::Playing);
        assert_eq!(hud.high_score, 77);
        assert_eq!(hud.time, "01:00");
        assert_eq!(hud.misses, 1);
        assert_eq!(hud.accuracy_label(), "0%");
        assert_eq!(hud.target_x, 300.0);
        assert_eq!(hud.target_color(), "hsl(190, 85%, 55%)");
    }
}
