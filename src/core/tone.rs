//! Sine tone synthesis for the click beep

use std::f64::consts::TAU;

/// Peak amplitude of synthesized tones, as a fraction of full scale.
pub const AMPLITUDE: f32 = 0.25;

/// A fixed-length sine beep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f32,
    /// Duration in seconds
    pub duration: f32,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency: 880.0,
            duration: 0.12,
        }
    }
}

impl Tone {
    /// Number of whole frames the tone spans at `sample_rate`; a partial frame is dropped.
    pub fn frames(&self, sample_rate: u32) -> usize {
        (self.duration * sample_rate as f32) as usize
    }
}

/// Renders `tone` into an interleaved buffer of `frames * channels` samples.
///
/// Every channel of a frame carries the same sample. The phase accumulates
/// across the whole buffer without wrapping.
pub fn synthesize(tone: Tone, sample_rate: u32, channels: u16) -> Vec<f32> {
    let channels = usize::from(channels);
    let frames = tone.frames(sample_rate);
    if sample_rate == 0 || channels == 0 {
        return Vec::new();
    }

    let mut buf = Vec::with_capacity(frames * channels);
    let inc = TAU * f64::from(tone.frequency) / f64::from(sample_rate);
    let mut phase = 0.0_f64;
    for _ in 0..frames {
        let sample = phase.sin() as f32 * AMPLITUDE;
        phase += inc;
        buf.extend(std::iter::repeat(sample).take(channels));
    }
    buf
}
