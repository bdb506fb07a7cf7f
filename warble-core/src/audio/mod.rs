//! In-memory audio buffers exchanged with the TTS service and the host.

pub mod pcm;
pub mod wav;

#[cfg(test)]
mod tests;

use anyhow::{bail, Result};

/// An audio buffer of interleaved f32 samples plus a sample rate.
///
/// Samples are nominally in [-1.0, 1.0]. The host consumes waveforms as a
/// (batch, channels, samples) tensor; the batch dimension is always 1 inside
/// this crate, so multi-batch host tensors must be squeezed to their first
/// item before a `Waveform` is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    channels: u16,
    sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            bail!("Waveform must have at least one channel");
        }
        if samples.len() % channels as usize != 0 {
            bail!(
                "{} samples do not divide into {} channels",
                samples.len(),
                channels
            );
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Single-channel waveform; the shape of all synthesized speech.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    /// One zero sample. This is the placeholder the host receives on any
    /// failure so graph execution always gets a structurally valid result.
    pub fn silent(sample_rate: u32) -> Self {
        Self::mono(vec![0.0], sample_rate)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Samples per channel.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// The (batch, channels, samples) view the host consumes.
    pub fn shape(&self) -> (usize, usize, usize) {
        (1, self.channels as usize, self.frames())
    }
}
