//! Pitch / rate estimation
//!
//! Estimates the source rate that would voice the sample at middle C.
//! Long buffers go through autocorrelation; short wavetable-sized ones
//! use zero-crossing cycle counting, which behaves better on single-cycle
//! material. Detection runs on a detached worker thread over a private
//! copy of the buffer and delivers its result through the shared atomic
//! rate cells, so the editor thread never blocks.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

use crate::sample::{RateCell, Sample, SampleParams, BRR_NATIVE_RATE};

/// Middle C reference frequency in Hz.
pub const C_FREQ: f64 = 523.251130601;

/// At most this many samples are copied for analysis.
const SNAPSHOT_MAX: usize = 0x2000;

/// Buffers longer than this use autocorrelation instead of
/// zero-crossing counting.
const AUTOCORR_THRESHOLD: usize = 1024;

/// Where a finished detection writes its rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchTarget {
    /// The sample's own playback rate.
    SampleRate,
    /// The pending resample target shown in the rate field.
    ResampleRate,
}

/// How a detection request was dispatched.
#[derive(Debug)]
pub enum PitchDispatch {
    /// Loop-length shortcut, applied before returning.
    Synchronous(f64),
    /// Worker thread started.
    Threaded(JoinHandle<()>),
    /// Nothing to analyze.
    Skipped,
}

fn sign(x: i16) -> i32 {
    if x < 0 {
        -1
    } else {
        1
    }
}

fn autocorrelation_lag(samples: &[i16], lag: usize) -> f32 {
    let mut sum = 0.0f32;
    for i in 0..samples.len() - lag {
        let a = samples[i] as f32 / i16::MAX as f32;
        let b = samples[i + lag] as f32 / i16::MAX as f32;
        sum += a * b;
    }
    sum
}

/// Walk the lags until the first peak past the zero-lag peak drops off,
/// counting samples per cycle along the way.
fn autocorrelation_rate(samples: &[i16]) -> f64 {
    let mut init_max = 0.0f32;
    let mut curr_max = 0.0f32;
    let mut last = 0.0f32;
    let mut samp_per_cycle = 0usize;

    for lag in 0..samples.len() {
        let curr = autocorrelation_lag(samples, lag);

        if lag == 0 {
            init_max = curr;
            last = curr;
            continue;
        }

        if curr > last {
            curr_max = curr;
        } else if last > curr && curr_max >= init_max * 0.9 {
            break;
        }

        samp_per_cycle += 1;
        last = curr;
    }

    debug!("autocorrelation: {} samples per cycle", samp_per_cycle);
    samp_per_cycle as f64 * C_FREQ
}

/// Count samples between sign changes, restarting until the remaining
/// buffer cannot hold two more cycles of the current estimate.
fn zero_crossing_rate(samples: &[i16]) -> f64 {
    let mut zero_cross = 0u32;
    let mut samp_per_cycle = 0usize;

    for i in 1..samples.len() {
        if sign(samples[i]) != sign(samples[i - 1]) {
            zero_cross += 1;
        }

        if zero_cross > 1 {
            if i + (samp_per_cycle << 1) >= samples.len() {
                break;
            }
            zero_cross = 0;
            samp_per_cycle = 0;
        }

        if zero_cross != 0 {
            samp_per_cycle += 1;
        }
    }

    debug!("zero-crossing: {} samples per cycle", samp_per_cycle);
    samp_per_cycle as f64 * C_FREQ
}

/// Round up to the next power of two, then halve. Values under 3 pin
/// the divider at 1 (or 2 for exactly 2).
fn nearest_power_of_two(val: u32) -> f64 {
    if val < 3 {
        return if val == 2 { 2.0 } else { 1.0 };
    }
    let v = val.next_power_of_two();
    if v < 3 {
        1.0
    } else {
        (v / 2) as f64
    }
}

/// Octave-correct a detected frequency into a playable rate.
fn rate_from_samples(samples: &[i16]) -> f64 {
    let freq = if samples.len() > AUTOCORR_THRESHOLD {
        autocorrelation_rate(samples)
    } else {
        zero_crossing_rate(samples)
    };
    let divider = nearest_power_of_two((freq / (C_FREQ * 8.0)).floor() as u32);
    debug!("detected frequency {:.2} Hz, divider {}", freq, divider);
    freq / divider
}

/// Rate straight from a known loop length, for short looped wavetables.
pub fn rate_from_loop_len(loop_len: usize) -> f64 {
    let freq = loop_len as f64 * C_FREQ;
    let divider = nearest_power_of_two((freq / (C_FREQ * 16.0)).floor() as u32);
    freq / divider
}

fn apply_rate(rate: f64, target: PitchTarget, params: &SampleParams, resample_cell: &RateCell) {
    match target {
        PitchTarget::SampleRate => params.set_rate(rate),
        PitchTarget::ResampleRate => resample_cell.set(rate),
    }
}

/// Detect the center pitch of the sample and write the resulting rate to
/// `target`.
///
/// Short looped wavetables (length <= 0x400, loop length <= 0x80) are
/// resolved synchronously from the loop length. Everything else spawns a
/// detached worker over a bounded private copy of the buffer;
/// `on_complete` runs on the worker with the final rate once it has been
/// stored.
pub fn detect_center_pitch<F>(
    sample: &Sample,
    target: PitchTarget,
    resample_cell: Arc<RateCell>,
    on_complete: F,
) -> PitchDispatch
where
    F: FnOnce(f64) + Send + 'static,
{
    let params = sample.params();
    let length = params.length();
    let loop_len = params.loop_end() - params.loop_start();

    if length <= 1 {
        return PitchDispatch::Skipped;
    }

    if length <= 0x400 && loop_len <= 0x80 {
        let rate = rate_from_loop_len(loop_len);
        info!("loop-length pitch: {:.0} Hz", rate);
        apply_rate(rate, target, &params, &resample_cell);
        on_complete(rate);
        return PitchDispatch::Synchronous(rate);
    }

    let snapshot: Vec<i16> = sample.data()[..length.min(SNAPSHOT_MAX)].to_vec();
    if snapshot.len() < 2 {
        warn!("pitch detection skipped: buffer too short");
        return PitchDispatch::Skipped;
    }

    let handle = thread::spawn(move || {
        let mut rate = rate_from_samples(&snapshot).round();
        if rate < C_FREQ * 2.0 {
            rate = BRR_NATIVE_RATE;
        }
        info!("detected pitch: {:.0} Hz", rate);
        apply_rate(rate, target, &params, &resample_cell);
        on_complete(rate);
    });

    PitchDispatch::Threaded(handle)
}
