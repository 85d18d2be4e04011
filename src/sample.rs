//! Sample buffer and shared playback parameters
//!
//! A [`Sample`] is the single editable waveform: a mono 16-bit buffer plus
//! the marker/rate scalars that the playback engine and the pitch worker
//! read concurrently. The scalars are atomics; the buffer itself is *not*
//! locked. Callers must pause playback before any operation that changes
//! the buffer contents or length (the pause discipline).

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Playback rate assigned to a freshly cleared sample, in Hz.
pub const DEFAULT_RATE: f64 = 16726.0;

/// Native playback rate of BRR-encoded material, in Hz.
pub const BRR_NATIVE_RATE: f64 = 16744.0;

/// Marker and rate scalars shared across threads.
///
/// Every field is an atomic so the audio callback and the pitch worker can
/// read them without taking a lock. The marker setters clamp so that
/// `samp_start <= loop_start <= loop_end <= length` holds after every call,
/// no matter the argument.
#[derive(Debug)]
pub struct SampleParams {
    samp_start: AtomicUsize,
    loop_start: AtomicUsize,
    loop_end: AtomicUsize,
    length: AtomicUsize,
    looped: AtomicBool,
    /// Source sample rate in Hz, stored as f64 bits.
    rate: AtomicU64,
    /// Current playhead position in samples, stored as f64 bits.
    position: AtomicU64,
}

impl SampleParams {
    fn new() -> Self {
        Self {
            samp_start: AtomicUsize::new(0),
            loop_start: AtomicUsize::new(0),
            loop_end: AtomicUsize::new(0),
            length: AtomicUsize::new(1),
            looped: AtomicBool::new(false),
            rate: AtomicU64::new(DEFAULT_RATE.to_bits()),
            position: AtomicU64::new(0f64.to_bits()),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn samp_start(&self) -> usize {
        self.samp_start.load(Ordering::Acquire)
    }

    pub fn loop_start(&self) -> usize {
        self.loop_start.load(Ordering::Acquire)
    }

    pub fn loop_end(&self) -> usize {
        self.loop_end.load(Ordering::Acquire)
    }

    pub fn length(&self) -> usize {
        self.length.load(Ordering::Acquire)
    }

    pub fn is_looped(&self) -> bool {
        self.looped.load(Ordering::Acquire)
    }

    pub fn rate(&self) -> f64 {
        f64::from_bits(self.rate.load(Ordering::Acquire))
    }

    /// Current playhead position in samples (written by the engine).
    pub fn position(&self) -> f64 {
        f64::from_bits(self.position.load(Ordering::Acquire))
    }

    // ========================================================================
    // Clamping writes
    // ========================================================================

    /// Move the edit start marker. Clamped to `[0, loop_start]`.
    pub fn set_samp_start(&self, value: usize) {
        let clamped = value.min(self.loop_start());
        self.samp_start.store(clamped, Ordering::Release);
    }

    /// Move the loop start marker. Clamped to `[samp_start, loop_end]`.
    pub fn set_loop_start(&self, value: usize) {
        let clamped = value.clamp(self.samp_start(), self.loop_end());
        self.loop_start.store(clamped, Ordering::Release);
    }

    /// Move the loop end marker. Clamped to `[loop_start, length]`.
    pub fn set_loop_end(&self, value: usize) {
        let clamped = value.clamp(self.loop_start(), self.length());
        self.loop_end.store(clamped, Ordering::Release);
    }

    pub fn set_looped(&self, looped: bool) {
        self.looped.store(looped, Ordering::Release);
    }

    pub fn set_rate(&self, rate: f64) {
        self.rate.store(rate.to_bits(), Ordering::Release);
    }

    pub fn set_position(&self, position: f64) {
        self.position.store(position.to_bits(), Ordering::Release);
    }

    /// Replace all markers at once, re-establishing the ordering invariant
    /// against `length`. Applied in the order samp_start, loop_end,
    /// loop_start so each clamp sees the bound it depends on.
    pub fn set_markers(&self, samp_start: usize, loop_start: usize, loop_end: usize) {
        let length = self.length();
        self.samp_start.store(0, Ordering::Release);
        self.loop_start.store(0, Ordering::Release);
        self.loop_end.store(length, Ordering::Release);
        self.set_samp_start(samp_start);
        self.set_loop_end(loop_end);
        self.set_loop_start(loop_start);
    }

    fn set_length(&self, length: usize) {
        self.length.store(length, Ordering::Release);
    }

    /// Debug check of the marker ordering invariant.
    pub fn markers_ordered(&self) -> bool {
        let (s, ls, le, len) = (
            self.samp_start(),
            self.loop_start(),
            self.loop_end(),
            self.length(),
        );
        s <= ls && ls <= le && le <= len
    }
}

/// A rate value shared across threads, stored as f64 bits.
///
/// Holds the pending resample target so the pitch worker can publish
/// into it without touching the sample itself.
#[derive(Debug)]
pub struct RateCell(AtomicU64);

impl RateCell {
    pub fn new(rate: f64) -> Self {
        Self(AtomicU64::new(rate.to_bits()))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, rate: f64) {
        self.0.store(rate.to_bits(), Ordering::Release);
    }
}

impl Default for RateCell {
    fn default() -> Self {
        Self::new(BRR_NATIVE_RATE)
    }
}

/// The editable waveform: mono 16-bit PCM plus shared parameters.
///
/// The buffer is never empty; the degenerate state is a single zero sample
/// (see [`Sample::clear`]). Length-changing mutations go through
/// [`Sample::replace_data`] so `params.length` always mirrors `data.len()`.
#[derive(Debug)]
pub struct Sample {
    data: Vec<i16>,
    params: Arc<SampleParams>,
}

impl Default for Sample {
    fn default() -> Self {
        Self::new()
    }
}

impl Sample {
    pub fn new() -> Self {
        Self {
            data: vec![0],
            params: Arc::new(SampleParams::new()),
        }
    }

    /// Shared handle to the marker/rate scalars, for the playback engine
    /// and the pitch worker.
    pub fn params(&self) -> Arc<SampleParams> {
        Arc::clone(&self.params)
    }

    pub fn data(&self) -> &[i16] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        // Length 1 is the cleared state; treat it as empty content.
        self.data.len() <= 1
    }

    /// Swap in a new buffer, updating the shared length. Markers are left
    /// alone; callers re-establish them afterwards. Pause discipline
    /// applies.
    pub fn replace_data(&mut self, data: Vec<i16>) {
        debug_assert!(!data.is_empty());
        self.params.set_length(data.len());
        self.data = data;
    }

    /// Reset to the cleared state: one zero sample, default rate, loop off,
    /// all markers zero.
    pub fn clear(&mut self) {
        self.replace_data(vec![0]);
        self.params.set_markers(0, 0, 0);
        self.params.set_looped(false);
        self.params.set_rate(DEFAULT_RATE);
        self.params.set_position(0.0);
    }
}
