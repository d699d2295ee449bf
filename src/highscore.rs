//! Best score across sessions
//!
//! Stored as plain integer text under its own key.

use crate::persistence::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct HighScore(pub u64);

impl HighScore {
    /// Raise the record to `score` if it is higher. Returns true if it changed.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

impl Record for HighScore {
    const KEY: &'static str = "highScore";

    fn encode(&self) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }

    fn decode(raw: &str) -> anyhow::Result<Self> {
        Ok(Self(raw.trim().parse()?))
    }
}
