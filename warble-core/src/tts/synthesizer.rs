//! Speech synthesis requests and response decoding.

use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::audio::pcm::{self, SYNTH_SAMPLE_RATE};
use crate::audio::Waveform;
use crate::tts::error::SpeechError;
use crate::tts::types::GenerationParams;

#[derive(Serialize)]
pub(crate) struct SynthesisBody<'a> {
    pub model: &'a str,
    pub input: &'a str,
    pub voice: &'a str,
    pub generation_config: GenerationConfig,
}

/// Wire shape of the tuning parameters. `pace` travels as `cfg_weight`.
#[derive(Serialize)]
pub(crate) struct GenerationConfig {
    pub exaggeration: f32,
    pub cfg_weight: f32,
    pub temperature: f32,
}

impl From<GenerationParams> for GenerationConfig {
    fn from(params: GenerationParams) -> Self {
        Self {
            exaggeration: params.exaggeration,
            cfg_weight: params.pace,
            temperature: params.temperature,
        }
    }
}

/// Submits synthesis requests and decodes the PCM replies.
pub struct SpeechSynthesizer {
    client: Client,
}

impl SpeechSynthesizer {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// POST one synthesis request and decode the response.
    ///
    /// The service replies with headerless signed 16-bit little-endian PCM,
    /// mono, at 22050 Hz.
    pub async fn synthesize(
        &self,
        endpoint: &str,
        api_key: &str,
        model: &str,
        voice: &str,
        text: &str,
        params: GenerationParams,
    ) -> Result<Waveform, SpeechError> {
        let body = SynthesisBody {
            model,
            input: text,
            voice,
            generation_config: params.into(),
        };

        let response = self
            .client
            .post(endpoint)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout(anyhow!(e))
                } else {
                    SpeechError::Transport(anyhow!(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Rejected { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::Transport(anyhow!(e)))?;

        debug!(bytes = bytes.len(), "Decoding synthesized PCM");
        decode_response(&bytes)
    }
}

/// Decode raw PCM bytes into the mono output waveform with fade-in applied.
pub(crate) fn decode_response(bytes: &[u8]) -> Result<Waveform, SpeechError> {
    let mut samples = pcm::decode_pcm16(bytes).map_err(SpeechError::Decode)?;
    pcm::apply_fade_in(&mut samples, pcm::fade_len(SYNTH_SAMPLE_RATE));
    Ok(Waveform::mono(samples, SYNTH_SAMPLE_RATE))
}
