use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use warble_core::audio::wav;
use warble_core::{try_generate_speech, GenerationParams, SpeechRequest};

#[derive(Parser, Debug)]
#[command(name = "warble")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate speech through a Chatterbox-compatible TTS server")]
struct Args {
    /// Text to synthesize
    text: String,

    /// Speech endpoint URL
    #[arg(long, default_value = "http://localhost:4123/v1/audio/speech")]
    endpoint: String,

    /// Model identifier passed through to the server
    #[arg(long, default_value = "hifigan")]
    model: String,

    /// Voice identifier; also the fallback when cloning fails
    #[arg(long, default_value = "en_US-ljspeech-medium")]
    voice: String,

    /// Bearer API key
    #[arg(long, env = "WARBLE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Reference WAV to clone a voice from
    #[arg(long, value_name = "FILE")]
    clone_from: Option<PathBuf>,

    /// Library name for the cloned voice; cloning needs both this and
    /// --clone-from
    #[arg(long)]
    library_name: Option<String>,

    /// Emotion exaggeration, 0.25 to 2.0
    #[arg(long, default_value_t = 0.5)]
    exaggeration: f32,

    /// Guidance weight, 0.0 to 1.0
    #[arg(long, default_value_t = 0.5)]
    pace: f32,

    /// Sampling temperature, 0.05 to 5.0
    #[arg(long, default_value_t = 0.8)]
    temperature: f32,

    /// Timeout in seconds for each HTTP call
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Output WAV path
    #[arg(long, short, default_value = "speech.wav")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let reference_audio = args
        .clone_from
        .as_ref()
        .map(|p| {
            let bytes =
                fs::read(p).with_context(|| format!("Failed to read {}", p.display()))?;
            wav::decode(&bytes).with_context(|| format!("Failed to decode {}", p.display()))
        })
        .transpose()?;

    let request = SpeechRequest {
        text: args.text,
        endpoint: args.endpoint,
        model: args.model,
        voice: args.voice,
        api_key: args.api_key,
        reference_audio,
        library_name: args.library_name,
        params: GenerationParams {
            exaggeration: args.exaggeration,
            pace: args.pace,
            temperature: args.temperature,
        },
        timeout: Duration::from_secs(args.timeout_secs),
    };

    let waveform = try_generate_speech(&request).await?;
    info!(
        frames = waveform.frames(),
        sample_rate = waveform.sample_rate(),
        "Synthesis complete"
    );

    let bytes = wav::encode(&waveform)?;
    fs::write(&args.output, bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
