use serde_json::json;

use super::cloner::voices_url;
use super::error::{CloneError, SpeechError};
use super::synthesizer::{decode_response, SynthesisBody};
use super::types::{GenerationParams, SpeechRequest};

#[test]
fn voices_url_replaces_path_and_strips_query() {
    let url = voices_url("https://tts.example.com/v1/audio/speech?fmt=pcm#frag").unwrap();
    assert_eq!(url.as_str(), "https://tts.example.com/v1/voices");
}

#[test]
fn voices_url_keeps_scheme_and_port() {
    let url = voices_url("http://localhost:4123/v1/audio/speech").unwrap();
    assert_eq!(url.as_str(), "http://localhost:4123/v1/voices");
}

#[test]
fn voices_url_rejects_unparseable_endpoint() {
    let err = voices_url("not a url").unwrap_err();
    assert!(matches!(err, CloneError::InvalidEndpoint(_)));
}

#[test]
fn synthesis_body_uses_wire_field_names() {
    let body = SynthesisBody {
        model: "m1",
        input: "Hi",
        voice: "v1",
        generation_config: GenerationParams {
            exaggeration: 1.5,
            pace: 0.25,
            temperature: 2.0,
        }
        .into(),
    };

    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(
        value,
        json!({
            "model": "m1",
            "input": "Hi",
            "voice": "v1",
            "generation_config": {
                "exaggeration": 1.5,
                "cfg_weight": 0.25,
                "temperature": 2.0,
            }
        })
    );
}

#[test]
fn decode_response_ramps_first_110_samples() {
    let mut samples = vec![0i16, 16384, 32767];
    samples.extend(std::iter::repeat(0).take(110));
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let waveform = decode_response(&bytes).unwrap();

    assert_eq!(waveform.shape(), (1, 1, 113));
    assert_eq!(waveform.sample_rate(), 22050);
    let out = waveform.samples();
    assert_eq!(out[0], 0.0);
    assert_eq!(out[1], 16384.0 / 32767.0 * (1.0 / 109.0));
    assert_eq!(out[2], 2.0 / 109.0);
    assert!(out[3..].iter().all(|&s| s == 0.0));
}

#[test]
fn decode_response_skips_fade_below_ramp_length() {
    let samples = vec![32767i16; 109];
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let waveform = decode_response(&bytes).unwrap();

    assert!(waveform.samples().iter().all(|&s| s == 1.0));
}

#[test]
fn decode_response_rejects_truncated_payload() {
    let err = decode_response(&[0u8, 1, 2]).unwrap_err();
    assert!(matches!(err, SpeechError::Decode(_)));
}

#[test]
fn request_defaults_target_local_server() {
    let request = SpeechRequest::default();

    assert_eq!(request.endpoint, "http://localhost:4123/v1/audio/speech");
    assert_eq!(request.model, "hifigan");
    assert_eq!(request.voice, "en_US-ljspeech-medium");
    assert!(request.api_key.is_empty());

    let params = GenerationParams::default();
    assert_eq!(params.exaggeration, 0.5);
    assert_eq!(params.pace, 0.5);
    assert_eq!(params.temperature, 0.8);
}
