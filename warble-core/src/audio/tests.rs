use rstest::rstest;

use super::pcm::{apply_fade_in, decode_pcm16, fade_len, SYNTH_SAMPLE_RATE};
use super::{wav, Waveform};

fn le_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

#[test]
fn fade_len_is_110_samples_at_service_rate() {
    assert_eq!(fade_len(SYNTH_SAMPLE_RATE), 110);
}

#[test]
fn decode_normalizes_by_32767() {
    let samples = decode_pcm16(&le_bytes(&[0, 16384, 32767, -32768])).unwrap();

    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[1], 16384.0 / 32767.0);
    assert_eq!(samples[2], 1.0);
    // i16::MIN overshoots -1.0; the asymmetry is part of the protocol.
    assert_eq!(samples[3], -32768.0 / 32767.0);
    assert!(samples[3] < -1.0);
}

#[test]
fn decode_rejects_odd_byte_count() {
    assert!(decode_pcm16(&[0u8, 1, 2]).is_err());
}

#[test]
fn decode_of_empty_payload_is_empty() {
    assert!(decode_pcm16(&[]).unwrap().is_empty());
}

#[rstest]
#[case(109, false)]
#[case(110, true)]
#[case(113, true)]
fn fade_applies_only_at_full_ramp_length(#[case] len: usize, #[case] faded: bool) {
    let mut samples = vec![1.0f32; len];
    apply_fade_in(&mut samples, 110);

    if faded {
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 1.0 / 109.0);
        assert_eq!(samples[109], 1.0);
        assert!(samples[110..].iter().all(|&s| s == 1.0));
    } else {
        assert!(samples.iter().all(|&s| s == 1.0));
    }
}

#[test]
fn fade_ramp_is_linearly_spaced() {
    let mut samples = vec![1.0f32; 110];
    apply_fade_in(&mut samples, 110);

    for (i, &sample) in samples.iter().enumerate() {
        assert_eq!(sample, i as f32 / 109.0);
    }
}

#[test]
fn wav_round_trip_preserves_count_and_channels() {
    let original = Waveform::new(vec![0.1, -0.1, 0.5, -0.5, 0.9, -0.9], 2, 44100).unwrap();

    let encoded = wav::encode(&original).unwrap();
    let decoded = wav::decode(&encoded).unwrap();

    assert_eq!(decoded.frames(), original.frames());
    assert_eq!(decoded.channels(), original.channels());
    assert_eq!(decoded.sample_rate(), original.sample_rate());
    for (a, b) in decoded.samples().iter().zip(original.samples()) {
        // 16-bit quantization loses at most one step.
        assert!((a - b).abs() < 1.0 / 32767.0);
    }
}

#[test]
fn wav_encode_clamps_out_of_range_samples() {
    let loud = Waveform::mono(vec![2.0, -2.0], 22050);

    let decoded = wav::decode(&wav::encode(&loud).unwrap()).unwrap();

    assert_eq!(decoded.samples(), &[1.0, -1.0]);
}

#[test]
fn waveform_rejects_ragged_channel_layout() {
    assert!(Waveform::new(vec![0.0; 5], 2, 22050).is_err());
    assert!(Waveform::new(vec![0.0; 4], 0, 22050).is_err());
}

#[test]
fn waveform_shape_reports_single_batch() {
    let stereo = Waveform::new(vec![0.0; 8], 2, 48000).unwrap();
    assert_eq!(stereo.shape(), (1, 2, 4));

    let placeholder = Waveform::silent(SYNTH_SAMPLE_RATE);
    assert_eq!(placeholder.shape(), (1, 1, 1));
    assert_eq!(placeholder.samples(), &[0.0]);
}
