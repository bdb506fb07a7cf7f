//! Raw PCM decoding for synthesis responses.

use anyhow::{bail, Result};

/// Sample rate of all audio returned by the speech endpoint. The service
/// always emits 22050 Hz; this is a protocol invariant, not negotiated.
pub const SYNTH_SAMPLE_RATE: u32 = 22050;

/// Duration of the linear fade-in applied to decoded speech.
pub const FADE_IN_MS: u32 = 5;

/// Number of samples the fade-in ramp covers at the given rate.
pub fn fade_len(sample_rate: u32) -> usize {
    (sample_rate * FADE_IN_MS / 1000) as usize
}

/// Decode signed 16-bit little-endian PCM into normalized f32 samples.
///
/// Normalization divides by 32767.0, so i16::MIN maps to roughly -1.0000305.
/// The asymmetry must stay: downstream consumers expect it bit-for-bit.
pub fn decode_pcm16(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 2 != 0 {
        bail!("PCM payload has odd length {}", bytes.len());
    }
    Ok(bytes
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32767.0)
        .collect())
}

/// Multiply a linear 0.0..=1.0 ramp into the first `fade` samples.
///
/// Buffers shorter than the ramp are left untouched; a partial ramp would
/// attenuate the whole clip.
pub fn apply_fade_in(samples: &mut [f32], fade: usize) {
    if fade < 2 || samples.len() < fade {
        return;
    }
    let last = (fade - 1) as f32;
    for (i, sample) in samples.iter_mut().take(fade).enumerate() {
        *sample *= i as f32 / last;
    }
}
