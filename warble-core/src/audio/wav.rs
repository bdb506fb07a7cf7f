//! In-memory WAV encode/decode. Cloning uploads reference audio as a 16-bit
//! PCM WAV container built entirely in memory; nothing touches disk.

use std::io::Cursor;

use anyhow::{bail, Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use super::Waveform;

/// Encode a waveform as a 16-bit PCM WAV container, preserving its sample
/// rate and channel layout.
pub fn encode(waveform: &Waveform) -> Result<Vec<u8>> {
    let spec = WavSpec {
        channels: waveform.channels(),
        sample_rate: waveform.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec).context("Failed to start WAV writer")?;
    for &sample in waveform.samples() {
        let quantized = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer
            .write_sample(quantized)
            .context("Failed to write WAV sample")?;
    }
    writer.finalize().context("Failed to finalize WAV container")?;

    Ok(cursor.into_inner())
}

/// Decode a WAV container into a waveform, normalizing to f32.
pub fn decode(bytes: &[u8]) -> Result<Waveform> {
    let reader = WavReader::new(Cursor::new(bytes)).context("Failed to parse WAV container")?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Int => match spec.bits_per_sample {
            16 => reader
                .into_samples::<i16>()
                .map(|s| s.map(|v| v as f32 / 32767.0))
                .collect::<Result<_, _>>()?,
            8 => reader
                .into_samples::<i8>()
                .map(|s| s.map(|v| ((v as i16) << 8) as f32 / 32767.0))
                .collect::<Result<_, _>>()?,
            32 => reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| (v >> 16) as f32 / 32767.0))
                .collect::<Result<_, _>>()?,
            other => bail!("Unsupported bit depth: {other}"),
        },
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .context("Failed to read WAV samples")?,
    };

    Waveform::new(samples, spec.channels, spec.sample_rate)
}
