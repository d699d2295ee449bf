//! Input adapter
//!
//! Raw pointer and keyboard events become semantic `Action`s. Coordinate
//! translation and shortcut suppression happen here so the simulation only
//! ever sees stage-local points and named actions.

use crate::sim::{Action, RoundStatus};

/// Translate a client-space pointer position into stage-local coordinates
pub fn to_stage_local(client_x: f32, client_y: f32, stage_left: f32, stage_top: f32) -> (f32, f32) {
    (client_x - stage_left, client_y - stage_top)
}

/// Pointer press inside the stage
pub fn pointer_action(client_x: f32, client_y: f32, stage_left: f32, stage_top: f32) -> Action {
    let (x, y) = to_stage_local(client_x, client_y, stage_left, stage_top);
    Action::PointerHit { x, y }
}

/// Map a `KeyboardEvent.key` value to an action.
///
/// Returns None while a text input has focus so typing never triggers
/// shortcuts.
pub fn key_action(key: &str, status: RoundStatus, text_input_focused: bool) -> Option<Action> {
    if text_input_focused {
        return None;
    }
    match key {
        " " | "Enter" => match status {
            RoundStatus::Idle | RoundStatus::GameOver => Some(Action::Start),
            RoundStatus::Paused => Some(Action::TogglePause),
            RoundStatus::Playing => None,
        },
        "p" | "P" | "Escape" => Some(Action::TogglePause),
        "r" | "R" => Some(Action::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_local_translation() {
        let action = pointer_action(150.0, 90.0, 100.0, 40.0);
        assert_eq!(action, Action::PointerHit { x: 50.0, y: 50.0 });
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(key_action(" ", RoundStatus::Idle, false), Some(Action::Start));
        assert_eq!(key_action("Enter", RoundStatus::GameOver, false), Some(Action::Start));
        assert_eq!(key_action(" ", RoundStatus::Playing, false), None);
        assert_eq!(key_action(" ", RoundStatus::Paused, false), Some(Action::TogglePause));
        assert_eq!(key_action("Escape", RoundStatus::Playing, false), Some(Action::TogglePause));
        assert_eq!(key_action("R", RoundStatus::Playing, false), Some(Action::Restart));
        assert_eq!(key_action("x", RoundStatus::Playing, false), None);
    }

    #[test]
    fn test_shortcuts_suppressed_while_typing() {
        assert_eq!(key_action("p", RoundStatus::Playing, true), None);
        assert_eq!(key_action(" ", RoundStatus::Idle, true), None);
    }
}
