//! Integration Tests
//!
//! End-to-end tests across the codec, the store, the format writers and
//! the playback engine.

use std::sync::Arc;

use brredit::codec;
use brredit::context::EditorContext;
use brredit::formats::{self, ExportOptions, SampleFormat};
use brredit::pitch::{detect_center_pitch, PitchDispatch, PitchTarget, C_FREQ};
use brredit::playback::{Interpolation, PlaybackEngine, PlaybackState};
use brredit::sample::{RateCell, Sample, BRR_NATIVE_RATE};
use brredit::store::{LoadedSample, SampleStore};

/// Helper to build a sine wave at a given period in samples.
fn sine(len: usize, period: f64, amp: f64) -> Vec<i16> {
    (0..len)
        .map(|i| ((i as f64 / period * std::f64::consts::TAU).sin() * amp) as i16)
        .collect()
}

fn load_store(data: Vec<i16>, rate: f64, loop_points: Option<(usize, usize)>) -> SampleStore {
    let mut store = SampleStore::new();
    let len = data.len();
    let (loop_start, loop_end) = loop_points.unwrap_or((0, len));
    store.load(LoadedSample {
        data,
        rate,
        looped: loop_points.is_some(),
        loop_start,
        loop_end,
    });
    store
}

// === Codec round trips ===

#[test]
fn test_brr_round_trip_preserves_waveform_shape() {
    let original = sine(256, 32.0, 8000.0);
    let stream = codec::encode(&original, None).unwrap();
    assert_eq!(stream.len() % 9, 0);

    let decoded = codec::decode(&stream).unwrap();
    // the stream front-pads to a block boundary; compare the tail
    let tail = &decoded.samples[decoded.samples.len() - original.len()..];
    let max_err = original
        .iter()
        .zip(tail)
        .map(|(a, b)| (*a as i32 - *b as i32).abs())
        .max()
        .unwrap();
    assert!(max_err <= 4096, "max error {}", max_err);
}

#[test]
fn test_brr_loop_round_trip_keeps_markers_block_aligned() {
    let original = sine(128, 16.0, 6000.0);
    let stream = codec::encode(&original, Some((32, 128))).unwrap();
    let decoded = codec::decode(&stream).unwrap();

    assert!(decoded.loop_enable);
    assert_eq!(decoded.loop_start % 16, 0);
    assert!(decoded.loop_start <= decoded.loop_end);
    assert!(decoded.loop_end <= decoded.samples.len());
}

// === File round trips through the context ===

#[test]
fn test_wav_file_round_trip_with_loop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("loop.wav");

    let data = sine(200, 25.0, 9000.0);
    let mut ctx = EditorContext::new();
    {
        let store = ctx.store_mut();
        *store = load_store(data.clone(), 16744.0, Some((50, 150)));
    }
    ctx.save_path(&path, ExportOptions::default()).unwrap();

    let mut ctx2 = EditorContext::new();
    ctx2.load_path(&path).unwrap();
    let p = ctx2.store().sample().params();
    assert_eq!(ctx2.store().sample().data(), &data[..]);
    assert!(p.is_looped());
    assert_eq!(p.loop_start(), 50);
    assert_eq!(p.loop_end(), 150);
}

#[test]
fn test_brr_file_round_trip_loads_at_native_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.brr");

    let mut ctx = EditorContext::new();
    *ctx.store_mut() = load_store(sine(160, 20.0, 7000.0), 32000.0, None);
    ctx.save_path(&path, ExportOptions::default()).unwrap();

    let mut ctx2 = EditorContext::new();
    ctx2.load_path(&path).unwrap();
    assert_eq!(ctx2.store().sample().params().rate(), BRR_NATIVE_RATE);
    assert_eq!(ctx2.store().sample().len() % 16, 0);
}

#[test]
fn test_export_trims_to_edit_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trimmed.wav");

    let data: Vec<i16> = (0..100).map(|i| i as i16).collect();
    let mut ctx = EditorContext::new();
    *ctx.store_mut() = load_store(data, 16744.0, Some((40, 90)));
    ctx.store().sample().params().set_samp_start(20);

    ctx.save_path(&path, ExportOptions::default()).unwrap();
    let loaded = formats::load_file(&path).unwrap();
    assert_eq!(loaded.data.len(), 80);
    assert_eq!(loaded.data[0], 20);
    // loop markers rebase against the trimmed start
    assert_eq!(loaded.loop_start, 20);
    assert_eq!(loaded.loop_end, 70);
}

#[test]
fn test_cross_format_conversion_chain() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("a.wav");
    let aiff = dir.path().join("a.aif");
    let iff = dir.path().join("a.iff");

    let data: Vec<i16> = (0..64).map(|i| (i as i16) << 8).collect();
    let mut ctx = EditorContext::new();
    *ctx.store_mut() = load_store(data.clone(), 22050.0, None);

    ctx.save_path(&wav, ExportOptions::default()).unwrap();
    let mut ctx = EditorContext::new();
    ctx.load_path(&wav).unwrap();
    ctx.save_path(&aiff, ExportOptions::default()).unwrap();

    let mut ctx = EditorContext::new();
    ctx.load_path(&aiff).unwrap();
    ctx.save_path(&iff, ExportOptions::default()).unwrap();

    // 8SVX drops to 8 bits; the high bytes survive the whole chain
    let loaded = formats::load_file(&iff).unwrap();
    assert_eq!(loaded.data.len(), 64);
    for (orig, got) in data.iter().zip(&loaded.data) {
        assert_eq!(orig >> 8, got >> 8);
    }
}

#[test]
fn test_sniffing_beats_wrong_extension_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mislabeled.brr");

    let mut ctx = EditorContext::new();
    *ctx.store_mut() = load_store(vec![100; 32], 32000.0, None);
    ctx.save_path(&dir.path().join("real.wav"), ExportOptions::default())
        .unwrap();
    std::fs::rename(dir.path().join("real.wav"), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(formats::sniff(&path, &bytes), SampleFormat::Wav);
    let loaded = formats::load_file(&path).unwrap();
    assert_eq!(loaded.data.len(), 32);
}

// === Edit and undo flows ===

#[test]
fn test_cut_paste_undo_cycle() {
    let mut store = load_store((0..50).collect(), 16744.0, None);

    store.copy_range(10, 20);
    assert_eq!(store.clipboard().unwrap().len(), 10);

    assert!(store.delete_range(10, 20));
    assert_eq!(store.sample().len(), 40);

    assert!(store.paste_at(10));
    assert_eq!(store.sample().len(), 50);
    assert_eq!(store.sample().data()[10], 10);

    // single-slot history: undo reverts only the paste
    assert!(store.undo());
    assert_eq!(store.sample().len(), 40);
    assert!(!store.can_undo());
}

#[test]
fn test_deep_history_restores_older_states() {
    let mut store = SampleStore::with_undo_capacity(4);
    store.load(LoadedSample {
        data: (0..50).collect(),
        rate: 16744.0,
        looped: false,
        loop_start: 0,
        loop_end: 50,
    });

    store.delete_range(40, 50);
    store.delete_range(30, 40);
    store.delete_range(20, 30);
    assert_eq!(store.sample().len(), 20);

    assert!(store.undo());
    assert!(store.undo());
    assert!(store.undo());
    assert_eq!(store.sample().len(), 50);
    assert!(!store.can_undo());
}

#[test]
fn test_crop_then_resample_keeps_markers_ordered() {
    let mut store = load_store(sine(400, 40.0, 8000.0), 32000.0, Some((100, 300)));

    assert!(store.crop(50, 350));
    let p = store.sample().params();
    assert!(p.markers_ordered());
    assert_eq!(p.loop_start(), 50);
    assert_eq!(p.loop_end(), 250);

    assert!(store.resample(16000.0));
    assert!(store.sample().params().markers_ordered());
    assert_eq!(store.sample().params().rate(), 16000.0);
}

// === Playback over real decoded material ===

#[test]
fn test_playback_renders_decoded_brr_until_the_end() {
    let stream = codec::encode(&sine(128, 16.0, 8000.0), None).unwrap();
    let decoded = codec::decode(&stream).unwrap();

    let mut sample = Sample::new();
    let len = decoded.samples.len();
    sample.replace_data(decoded.samples);
    let p = sample.params();
    p.set_markers(0, 0, len);
    p.set_rate(BRR_NATIVE_RATE);

    let mut engine = PlaybackEngine::new(48000.0);
    engine.set_kernel(Interpolation::Gaussian);
    engine.start(&sample);

    // enough frames to consume the sample at roughly a 1:3 step ratio
    let mut out = vec![0.0f32; len * 4];
    engine.render(&sample, &mut out);
    assert_eq!(engine.state(), PlaybackState::Stopped);
    assert!(out.iter().any(|&v| v != 0.0));
    assert!(out.iter().all(|&v| (-1.0..=1.0).contains(&v)));
}

#[test]
fn test_looped_playback_never_stops() {
    let mut sample = Sample::new();
    sample.replace_data(sine(64, 16.0, 8000.0));
    let p = sample.params();
    p.set_markers(0, 16, 64);
    p.set_looped(true);
    p.set_rate(BRR_NATIVE_RATE);

    let mut engine = PlaybackEngine::new(48000.0);
    engine.start(&sample);
    let mut out = vec![0.0f32; 4096];
    engine.render(&sample, &mut out);
    assert!(engine.is_playing());
}

// === Pitch detection over encoded material ===

#[test]
fn test_detected_pitch_is_octave_of_source_tone() {
    let mut sample = Sample::new();
    sample.replace_data(sine(4096, 32.0, 10000.0));
    let p = sample.params();
    p.set_markers(0, 0, 4096);
    let cell = Arc::new(RateCell::default());

    match detect_center_pitch(&sample, PitchTarget::SampleRate, cell, |_| {}) {
        PitchDispatch::Threaded(handle) => handle.join().unwrap(),
        other => panic!("expected threaded dispatch, got {:?}", other),
    }

    let rate = sample.params().rate();
    let base = 32.0 * C_FREQ;
    // the divider folds the detected frequency into a playable octave
    let folded = rate * (base / rate).round().max(1.0);
    assert!(
        (folded / base - 1.0).abs() < 0.15,
        "rate {} is not an octave of {}",
        rate,
        base
    );
}
