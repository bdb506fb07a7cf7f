//! Client for Chatterbox-compatible text-to-speech HTTP services: voice
//! cloning, speech synthesis, and the orchestration between them.

pub mod cloner;
pub mod error;
pub mod generate;
pub mod synthesizer;
pub mod types;

#[cfg(test)]
mod tests;

pub use cloner::VoiceCloner;
pub use error::{CloneError, SpeechError};
pub use generate::{generate_speech, try_generate_speech};
pub use synthesizer::SpeechSynthesizer;
pub use types::{GenerationParams, SpeechRequest};
