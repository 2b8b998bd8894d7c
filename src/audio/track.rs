//! Background music loop
//!
//! A short chiptune phrase rendered to mono samples. The buffer is meant
//! to be looped, so every note fades out before the next step and the
//! last sample lands near silence.

/// Tempo of the loop
pub const BPM: f32 = 120.0;
/// Eighth notes
pub const STEPS_PER_BEAT: usize = 2;

/// Bass line (MIDI note numbers, one per step)
const BASS: [u8; 32] = [
    45, 45, 57, 45, 45, 45, 57, 45, // A
    41, 41, 53, 41, 41, 41, 53, 41, // F
    43, 43, 55, 43, 43, 43, 55, 43, // G
    40, 40, 52, 40, 44, 44, 56, 44, // E .. G#
];

/// Lead arpeggio (0 = rest)
const LEAD: [u8; 32] = [
    69, 0, 72, 0, 76, 0, 72, 0, // Am
    65, 0, 69, 0, 72, 0, 69, 0, // F
    67, 0, 71, 0, 74, 0, 71, 0, // G
    64, 0, 68, 0, 71, 0, 76, 0, // E
];

const BASS_LEVEL: f32 = 0.22;
const LEAD_LEVEL: f32 = 0.18;
/// Attack time in seconds (avoids clicks at note starts)
const ATTACK: f32 = 0.005;

/// Equal-tempered frequency of a MIDI note
pub fn midi_to_hz(note: u8) -> f32 {
    440.0 * 2f32.powf((note as f32 - 69.0) / 12.0)
}

/// Seconds per step
pub fn step_seconds() -> f32 {
    60.0 / BPM / STEPS_PER_BEAT as f32
}

/// Loop length in seconds
pub fn loop_seconds() -> f32 {
    BASS.len() as f32 * step_seconds()
}

fn square(phase: f32) -> f32 {
    if phase.fract() < 0.5 { 1.0 } else { -1.0 }
}

fn triangle(phase: f32) -> f32 {
    let p = phase.fract();
    4.0 * (p - 0.5).abs() - 1.0
}

/// Attack, then a squared decay to zero at the end of the note
fn envelope(t: f32, length: f32) -> f32 {
    let attack = (t / ATTACK).min(1.0);
    let decay = (1.0 - t / length).max(0.0);
    attack * decay * decay
}

/// Render the whole loop at `sample_rate`
pub fn background_loop(sample_rate: f32) -> Vec<f32> {
    let step_len = (step_seconds() * sample_rate) as usize;
    let step_secs = step_len as f32 / sample_rate;
    let mut samples = vec![0.0; step_len * BASS.len()];

    for (step, (&bass, &lead)) in BASS.iter().zip(LEAD.iter()).enumerate() {
        let out = &mut samples[step * step_len..(step + 1) * step_len];
        let bass_hz = midi_to_hz(bass);
        let lead_hz = (lead != 0).then(|| midi_to_hz(lead));

        for (i, sample) in out.iter_mut().enumerate() {
            let t = i as f32 / sample_rate;
            let env = envelope(t, step_secs);
            let mut value = square(bass_hz * t) * BASS_LEVEL * env;
            if let Some(hz) = lead_hz {
                value += triangle(hz * t) * LEAD_LEVEL * env;
            }
            *sample = value;
        }
    }

    samples
}

/// Peak absolute amplitude (used to sanity-check the mix)
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |m, s| m.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midi_to_hz() {
        assert!((midi_to_hz(69) - 440.0).abs() < 1e-3);
        assert!((midi_to_hz(57) - 220.0).abs() < 1e-3);
        assert!((midi_to_hz(81) - 880.0).abs() < 1e-2);
    }

    #[test]
    fn test_loop_length() {
        let rate = 8000.0;
        let samples = background_loop(rate);
        let expected = (step_seconds() * rate) as usize * 32;
        assert_eq!(samples.len(), expected);
        assert!((loop_seconds() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_loop_is_audible_and_bounded() {
        let samples = background_loop(8000.0);
        let level = peak(&samples);
        assert!(level > 0.1);
        assert!(level <= 1.0);
    }

    #[test]
    fn test_loop_seam_is_quiet() {
        let samples = background_loop(8000.0);
        assert!(samples[0].abs() < 1e-6);
        assert!(samples[samples.len() - 1].abs() < 0.01);
    }
}
