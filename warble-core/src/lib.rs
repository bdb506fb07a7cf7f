pub mod audio;
pub mod tts;

// Public library API - hosts embedding the node should only need these.
pub use audio::Waveform;
pub use tts::{
    generate_speech, try_generate_speech, CloneError, GenerationParams, SpeechError, SpeechRequest,
};
