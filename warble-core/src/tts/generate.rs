//! The `generate_speech` entry operation: voice resolution, then exactly one
//! synthesis call. No retries anywhere; each HTTP call runs at most once per
//! invocation.

use tracing::{error, info, warn};

use crate::audio::pcm::SYNTH_SAMPLE_RATE;
use crate::audio::Waveform;
use crate::tts::cloner::VoiceCloner;
use crate::tts::error::SpeechError;
use crate::tts::synthesizer::SpeechSynthesizer;
use crate::tts::types::SpeechRequest;

/// Generate speech for the host.
///
/// Never fails: every error is logged and collapsed into a single-sample
/// silent waveform, so graph execution always receives a structurally valid
/// result. Use [`try_generate_speech`] when the failure reason matters.
pub async fn generate_speech(request: &SpeechRequest) -> Waveform {
    match try_generate_speech(request).await {
        Ok(waveform) => waveform,
        Err(e) => {
            error!(error = %e, "Speech generation failed");
            Waveform::silent(SYNTH_SAMPLE_RATE)
        }
    }
}

/// Generate speech, surfacing the failure reason as a typed error.
pub async fn try_generate_speech(request: &SpeechRequest) -> Result<Waveform, SpeechError> {
    if request.api_key.is_empty() {
        return Err(SpeechError::MissingApiKey);
    }

    let voice = resolve_voice(request).await;
    info!(voice, "Generating speech");

    SpeechSynthesizer::new(request.timeout)
        .synthesize(
            &request.endpoint,
            &request.api_key,
            &request.model,
            voice,
            &request.text,
            request.params,
        )
        .await
}

/// Decide which voice identifier the synthesis call uses.
///
/// Cloning runs only when a reference clip and a non-empty library name are
/// both present. A clip without a name is ignored with a warning, so an
/// accidentally connected audio input cannot trigger cloning on its own.
/// Clone failures fall back to the caller-supplied voice.
async fn resolve_voice(request: &SpeechRequest) -> &str {
    let Some(audio) = &request.reference_audio else {
        return &request.voice;
    };

    let library_name = request.library_name.as_deref().unwrap_or_default();
    if library_name.is_empty() {
        warn!("Reference audio supplied without a library name; skipping voice cloning");
        return &request.voice;
    }

    let cloner = VoiceCloner::new(request.timeout);
    match cloner
        .clone_voice(&request.endpoint, &request.api_key, audio, library_name)
        .await
    {
        Ok(()) => library_name,
        Err(e) => {
            warn!(error = %e, "Voice cloning failed; falling back to configured voice");
            &request.voice
        }
    }
}
