//! Audio system using Web Audio API
//!
//! Procedurally generated blips - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Target hit
    Hit,
    /// Click missed the target
    Miss,
    /// Level changed
    LevelUp,
    /// Round started
    Start,
    /// Countdown expired
    RoundOver,
    /// New high score
    HighScore,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Hit { .. } => Some(SoundEffect::Hit),
            GameEvent::Miss => Some(SoundEffect::Miss),
            GameEvent::LevelUp { .. } => Some(SoundEffect::LevelUp),
            GameEvent::RoundStarted => Some(SoundEffect::Start),
            GameEvent::RoundOver { .. } => Some(SoundEffect::RoundOver),
            GameEvent::NewHighScore { .. } => None,
            GameEvent::Paused | GameEvent::Resumed => None,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    volume: f32,
    muted: bool,
    /// Set once per round so the fanfare doesn't repeat on every hit
    high_score_played: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            volume: 0.6,
            muted: true,
            high_score_played: false,
        }
    }

    /// Mute/unmute all audio (follows `Settings::sound`)
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play whatever the frame's events call for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::RoundStarted => self.high_score_played = false,
                GameEvent::NewHighScore { .. } if !self.high_score_played => {
                    self.high_score_played = true;
                    self.play(SoundEffect::HighScore);
                }
                _ => {}
            }
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.muted || self.volume <= 0.0 {
            return;
        }
        let vol = self.volume;

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Hit => self.play_hit(ctx, vol),
            SoundEffect::Miss => self.play_miss(ctx, vol),
            SoundEffect::LevelUp => self.play_level_up(ctx, vol),
            SoundEffect::Start => self.play_start(ctx, vol),
            SoundEffect::RoundOver => self.play_round_over(ctx, vol),
            SoundEffect::HighScore => self.play_high_score(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Short rising chirp
    fn play_hit(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 520.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.35, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.09)
            .ok();
        osc.frequency().set_value_at_time(520.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(880.0, t + 0.06)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }

    /// Dull low thud
    fn play_miss(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 140.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.4, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.12)
            .ok();
        osc.frequency().set_value_at_time(140.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(70.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.15).ok();
    }

    /// Two-note step up
    fn play_level_up(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [660.0, 990.0].iter().enumerate() {
            let delay = i as f64 * 0.09;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.18, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.2).ok();
            }
        }
    }

    /// Whoosh up
    fn play_start(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.2)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(600.0, t + 0.15)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.25).ok();
    }

    /// Buzzer: two detuned saws gliding down
    fn play_round_over(&self, ctx: &AudioContext, vol: f32) {
        for freq in [220.0_f32, 226.0] {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Sawtooth) else {
                continue;
            };
            let t = ctx.current_time();
            gain.gain().set_value_at_time(vol * 0.14, t).ok();
            gain.gain().set_value_at_time(vol * 0.14, t + 0.45).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.7)
                .ok();
            osc.frequency().set_value_at_time(freq, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(freq * 0.5, t + 0.7)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.75).ok();
        }
    }

    /// Bright major arpeggio ending on a held octave
    fn play_high_score(&self, ctx: &AudioContext, vol: f32) {
        let notes = [(523.0, 0.0), (659.0, 0.06), (784.0, 0.12), (1047.0, 0.18)];
        for (i, (freq, delay)) in notes.iter().enumerate() {
            let hold = if i == notes.len() - 1 { 0.45 } else { 0.12 };
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.12, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + hold)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + hold + 0.05).ok();
            }
        }
    }
}
