use reqwest::StatusCode;
use thiserror::Error;

/// Failure registering a reference voice with the service's voice library.
///
/// Cloning is best-effort: the orchestrator logs these and falls back to the
/// caller-supplied voice, so no variant ever aborts speech generation.
#[derive(Error, Debug)]
pub enum CloneError {
    #[error("Invalid synthesis endpoint: {0}")]
    InvalidEndpoint(anyhow::Error),

    #[error("Failed to encode reference audio: {0}")]
    Encode(anyhow::Error),

    #[error("Voice upload timed out: {0}")]
    Timeout(anyhow::Error),

    #[error("Voice upload failed: {0}")]
    Transport(anyhow::Error),

    #[error("Voice endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Failure producing speech. These abort the invocation; the infallible
/// `generate_speech` wrapper turns them into the silent placeholder.
#[derive(Error, Debug)]
pub enum SpeechError {
    /// Checked before any network traffic happens.
    #[error("API key is empty")]
    MissingApiKey,

    #[error("Synthesis request timed out: {0}")]
    Timeout(anyhow::Error),

    #[error("Synthesis request failed: {0}")]
    Transport(anyhow::Error),

    #[error("Speech endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("Failed to decode synthesized audio: {0}")]
    Decode(anyhow::Error),
}
