use std::time::Duration;

use crate::audio::Waveform;

/// Generation tuning forwarded verbatim to the speech endpoint.
///
/// Expected ranges: exaggeration in [0.25, 2.0], pace in [0.0, 1.0],
/// temperature in [0.05, 5.0]. The service interprets them; this crate only
/// transmits and assumes the host has validated the ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub exaggeration: f32,
    /// Guidance weight, sent as `cfg_weight` on the wire.
    pub pace: f32,
    pub temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            exaggeration: 0.5,
            pace: 0.5,
            temperature: 0.8,
        }
    }
}

/// Inputs to one `generate_speech` invocation. Built fresh per call; nothing
/// is cached between invocations.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Text to synthesize.
    pub text: String,
    /// Speech endpoint URL. The voice-registration URL is derived from this
    /// by swapping the path for `/v1/voices`.
    pub endpoint: String,
    /// Model identifier, passed through to the server.
    pub model: String,
    /// Preset voice, used directly when no cloning is requested and as the
    /// fallback when cloning fails.
    pub voice: String,
    /// Bearer token attached to every outbound request. Never logged.
    pub api_key: String,
    /// Reference clip to clone a voice from.
    pub reference_audio: Option<Waveform>,
    /// Library entry name for the cloned voice. Cloning only runs when this
    /// is non-empty and reference audio is present.
    pub library_name: Option<String>,
    pub params: GenerationParams,
    /// Upper bound on each of the two outbound HTTP calls.
    pub timeout: Duration,
}

impl Default for SpeechRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            endpoint: "http://localhost:4123/v1/audio/speech".to_string(),
            model: "hifigan".to_string(),
            voice: "en_US-ljspeech-medium".to_string(),
            api_key: String::new(),
            reference_audio: None,
            library_name: None,
            params: GenerationParams::default(),
            timeout: Duration::from_secs(30),
        }
    }
}
