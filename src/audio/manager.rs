//! Web Audio playback

use web_sys::{AudioBufferSourceNode, AudioContext, GainNode, OscillatorNode, OscillatorType};

use super::track;
use crate::platform::StartupError;
use crate::settings::Settings;

/// Audio manager for the game
pub struct AudioManager {
    ctx: AudioContext,
    /// Looping background track, once started
    music: Option<(AudioBufferSourceNode, GainNode)>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Result<Self, StartupError> {
        let ctx = AudioContext::new()
            .map_err(|e| StartupError::Audio(format!("AudioContext: {e:?}")))?;
        Ok(Self {
            ctx,
            music: None,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            music_volume: settings.music_volume.clamp(0.0, 1.0),
            muted: false,
        })
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if self.ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some((_, gain)) = &self.music {
            gain.gain().set_value(self.music_gain());
        }
    }

    fn effect_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn music_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Render the background track and start it looping. Plays as soon
    /// as the context is resumed.
    pub fn start_music(&mut self) -> Result<(), StartupError> {
        if self.music.is_some() {
            return Ok(());
        }
        let audio_err = |e: wasm_bindgen::JsValue| StartupError::Audio(format!("{e:?}"));

        let sample_rate = self.ctx.sample_rate();
        let mut samples = track::background_loop(sample_rate);
        log::info!(
            "Background loop: {:.1}s, peak {:.2}",
            track::loop_seconds(),
            track::peak(&samples)
        );

        let buffer = self
            .ctx
            .create_buffer(1, samples.len() as u32, sample_rate)
            .map_err(audio_err)?;
        buffer.copy_to_channel(&mut samples, 0).map_err(audio_err)?;

        let source = self.ctx.create_buffer_source().map_err(audio_err)?;
        source.set_buffer(Some(&buffer));
        source.set_loop(true);

        let gain = self.ctx.create_gain().map_err(audio_err)?;
        gain.gain().set_value(self.music_gain());
        source.connect_with_audio_node(&gain).map_err(audio_err)?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(audio_err)?;
        source.start().map_err(audio_err)?;

        self.music = Some((source, gain));
        Ok(())
    }

    /// Create an oscillator with gain envelope
    fn create_osc(&self, freq: f32, osc_type: OscillatorType) -> Option<(OscillatorNode, GainNode)> {
        let osc = self.ctx.create_oscillator().ok()?;
        let gain = self.ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&self.ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Bounce/hit - short square blip
    pub fn play_blip(&self) {
        let vol = self.effect_gain();
        if vol <= 0.0 {
            return;
        }
        self.resume();

        let Some((osc, gain)) = self.create_osc(440.0, OscillatorType::Square) else {
            return;
        };
        let t = self.ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.3, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }
}
