//! Voice registration against the service's voice library.

use std::time::Duration;

use anyhow::anyhow;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use tracing::debug;

use crate::audio::{wav, Waveform};
use crate::tts::error::CloneError;

/// Registration path, fixed across deployments of the service.
const VOICES_PATH: &str = "/v1/voices";

/// Uploads reference audio to the service's voice library.
///
/// Stateless apart from the HTTP client; every call receives all of its
/// inputs as arguments, so concurrent invocations share nothing mutable.
pub struct VoiceCloner {
    client: Client,
}

impl VoiceCloner {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Register `audio` under `library_name` in the service's voice library.
    ///
    /// The WAV buffer built for the upload lives only for the duration of
    /// this call, whether it succeeds or fails.
    pub async fn clone_voice(
        &self,
        endpoint: &str,
        api_key: &str,
        audio: &Waveform,
        library_name: &str,
    ) -> Result<(), CloneError> {
        let url = voices_url(endpoint)?;
        let wav_bytes = wav::encode(audio).map_err(CloneError::Encode)?;

        debug!(url = %url, library_name, "Uploading reference audio for cloning");

        let file = Part::bytes(wav_bytes)
            .file_name("reference.wav")
            .mime_str("audio/wav")
            .map_err(|e| CloneError::Encode(anyhow!(e)))?;
        let form = Form::new()
            .part("files", file)
            .text("library_name", library_name.to_string());

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {api_key}"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CloneError::Timeout(anyhow!(e))
                } else {
                    CloneError::Transport(anyhow!(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, %body, "Voice endpoint rejected the upload");
            return Err(CloneError::Rejected { status, body });
        }

        Ok(())
    }
}

/// Derive the voice-registration URL from the synthesis endpoint: scheme,
/// host, and port are kept, the path is replaced, query and fragment drop.
pub(crate) fn voices_url(endpoint: &str) -> Result<Url, CloneError> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| CloneError::InvalidEndpoint(anyhow!("{endpoint}: {e}")))?;
    url.set_path(VOICES_PATH);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
