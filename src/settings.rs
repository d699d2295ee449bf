//! Game settings and preferences
//!
//! Persisted separately from the high score, independent of any round.

use serde::{Deserialize, Serialize};

use crate::persistence::Record;
use crate::sim::motion_multiplier;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,

    // === Accessibility ===
    /// Reduced motion (slows the target down)
    pub reduced_motion: bool,

    // === Audio ===
    /// Procedural sound effects
    pub sound: bool,
}

impl Settings {
    /// Speed multiplier for the target (respects reduced_motion)
    pub fn motion_multiplier(&self) -> f32 {
        motion_multiplier(self.reduced_motion)
    }
}

impl Record for Settings {
    const KEY: &'static str = "settings";

    fn encode(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn decode(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
