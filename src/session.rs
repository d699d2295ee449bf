//! Frame driver for one game view
//!
//! Binds the frame clock, the simulation, the player's settings and a storage
//! backend. The shell calls `frame` once per display refresh, `dispatch` for
//! every input action and `resize` whenever the stage changes size.

use crate::highscore::HighScore;
use crate::hud::HudSnapshot;
use crate::persistence::{self, KeyValueStore};
use crate::settings::{Settings, Theme};
use crate::sim::{
    Action, FrameClock, GameEvent, GameState, StageSize, apply_action, run_deferred, tick,
};

pub struct Session<S: KeyValueStore> {
    state: GameState,
    clock: FrameClock,
    settings: Settings,
    high_score: HighScore,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Load settings and the high score from `store` and build an idle game
    pub fn new(store: S, seed: u64, stage_w: f32, stage_h: f32) -> Self {
        let settings = persistence::load(&store, Settings::default());
        let high_score = persistence::load(&store, HighScore::default());
        log::info!(
            "Session ready (seed {}, theme {}, high score {})",
            seed,
            settings.theme.as_str(),
            high_score.0
        );
        Self {
            state: GameState::new(seed, StageSize::new(stage_w, stage_h), high_score.0),
            clock: FrameClock::new(),
            settings,
            high_score,
            store,
        }
    }

    /// One display refresh: drain deferred work, then advance the round.
    ///
    /// Returns the events produced since the last call.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let dt = self.clock.advance(now_ms);
        run_deferred(&mut self.state);
        tick(&mut self.state, dt, self.settings.motion_multiplier());
        self.process_events()
    }

    /// Apply an input action immediately
    pub fn dispatch(&mut self, action: Action) -> Vec<GameEvent> {
        apply_action(&mut self.state, action);
        self.process_events()
    }

    /// Stage-size notification from the presentation layer
    pub fn resize(&mut self, w: f32, h: f32) {
        self.state.resize(w, h);
        log::debug!("Stage resized to {}x{}", self.state.stage.w, self.state.stage.h);
    }

    fn process_events(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            match *event {
                GameEvent::NewHighScore { score } => {
                    if self.high_score.submit(score) {
                        persistence::save(&mut self.store, &self.high_score);
                    }
                }
                GameEvent::RoundOver { score } => {
                    if score >= self.high_score.0 && score > 0 {
                        log::info!("Round ended on the high score: {}", score);
                    }
                }
                _ => {}
            }
        }
        events
    }

    pub fn set_settings(&mut self, settings: Settings) {
        if settings != self.settings {
            log::info!(
                "Settings changed: theme={}, reduced_motion={}, sound={}",
                settings.theme.as_str(),
                settings.reduced_motion,
                settings.sound
            );
            self.settings = settings;
            persistence::save(&mut self.store, &self.settings);
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let mut settings = self.settings.clone();
        settings.theme = settings.theme.toggled();
        self.set_settings(settings);
        self.settings.theme
    }

    pub fn toggle_reduced_motion(&mut self) -> bool {
        let mut settings = self.settings.clone();
        settings.reduced_motion = !settings.reduced_motion;
        self.set_settings(settings);
        self.settings.reduced_motion
    }

    pub fn toggle_sound(&mut self) -> bool {
        let mut settings = self.settings.clone();
        settings.sound = !settings.sound;
        self.set_settings(settings);
        self.settings.sound
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.0
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
