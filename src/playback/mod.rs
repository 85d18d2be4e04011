//! Playback Engine Module
//!
//! Mono resampling playback with selectable interpolation kernels. The
//! engine owns no audio device: the external backend calls
//! [`PlaybackEngine::render`] from its output callback with the sample to
//! voice and a buffer of normalized f32 frames to fill.
//!
//! The playhead is published through the sample's shared parameters after
//! every render so UI threads can observe it without locking.

pub mod gaussian;

use std::fmt;

use log::debug;

use crate::sample::Sample;

use gaussian::GAUSSIAN_TABLE;

/// Volume decay factor applied per output sample while ramping down.
const RAMP_FACTOR: f32 = 0.999;

/// Volume below which a ramp-down is considered complete.
const RAMP_FLOOR: f32 = 0.001;

/// Interpolation kernel used by the resampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Most recent tap, no blending.
    Nearest,
    /// Two-point blend by fractional offset.
    Linear,
    /// Four-point cubic Hermite.
    Cubic,
    /// Four-point windowed sinc, S-DSP flavored.
    #[default]
    Gaussian,
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpolation::Nearest => write!(f, "Nearest"),
            Interpolation::Linear => write!(f, "Linear"),
            Interpolation::Cubic => write!(f, "Cubic"),
            Interpolation::Gaussian => write!(f, "Gaussian"),
        }
    }
}

/// Playback states. Pausing ramps the volume down to avoid clicks; the
/// transition to Stopped happens inside the render loop once the ramp
/// reaches the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    RampingDown,
}

fn interpolate(kernel: Interpolation, taps: &[f64; 4], offset: f64) -> f64 {
    match kernel {
        Interpolation::Nearest => taps[3],
        Interpolation::Linear => taps[2] + offset * (taps[3] - taps[2]),
        Interpolation::Cubic => {
            let a = (3.0 * (taps[1] - taps[2]) - taps[0] + taps[3]) / 2.0;
            let b = 2.0 * taps[2] + taps[0] - (5.0 * taps[1] + taps[3]) / 2.0;
            let c = (taps[2] - taps[0]) / 2.0;
            (((a * offset) + b) * offset + c) * offset + taps[1]
        }
        Interpolation::Gaussian => {
            let row = ((offset * 256.0) as usize) << 2;
            let t = &GAUSSIAN_TABLE[row..row + 4];
            taps[0] * t[0] + taps[1] * t[1] + taps[2] * t[2] + taps[3] * t[3]
        }
    }
}

/// Map a 16-bit-range value to a normalized float.
fn s16_to_f32(x: f64) -> f32 {
    if x > 0.0 {
        (x / 32767.0) as f32
    } else {
        (x / 32768.0) as f32
    }
}

/// Mono interpolating playback engine.
///
/// Renders one sample at its source rate against the configured device
/// rate. The four-tap history starts silent on every [`start`] so the
/// first frames fade in through the kernel window.
///
/// [`start`]: PlaybackEngine::start
#[derive(Debug)]
pub struct PlaybackEngine {
    kernel: Interpolation,
    taps: [f64; 4],
    state: PlaybackState,
    volume: f32,
    /// Source rate captured at start, in Hz.
    source_rate: f64,
    /// Output device rate, in Hz.
    device_rate: f64,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl PlaybackEngine {
    pub fn new(device_rate: f64) -> Self {
        Self {
            kernel: Interpolation::default(),
            taps: [0.0; 4],
            state: PlaybackState::Stopped,
            volume: 1.0,
            source_rate: crate::sample::BRR_NATIVE_RATE,
            device_rate,
        }
    }

    // ========================================================================
    // Transport
    // ========================================================================

    /// Begin playback from the sample's edit start marker.
    ///
    /// Clears the tap history, restores full volume, and captures the
    /// sample's current source rate for the whole run.
    pub fn start(&mut self, sample: &Sample) {
        let params = sample.params();
        self.taps = [0.0; 4];
        self.volume = 1.0;
        self.source_rate = params.rate();
        params.set_position(params.samp_start() as f64);
        self.state = PlaybackState::Playing;
        debug!(
            "playback started at sample {} ({} Hz -> {} Hz)",
            params.samp_start(),
            self.source_rate,
            self.device_rate
        );
    }

    /// Request a click-free stop: volume ramps down inside the render
    /// loop and the engine stops at the ramp floor.
    pub fn request_pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::RampingDown;
        }
    }

    /// Stop immediately, without ramping.
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn is_playing(&self) -> bool {
        self.state != PlaybackState::Stopped
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn kernel(&self) -> Interpolation {
        self.kernel
    }

    pub fn set_kernel(&mut self, kernel: Interpolation) {
        self.kernel = kernel;
    }

    pub fn device_rate(&self) -> f64 {
        self.device_rate
    }

    pub fn set_device_rate(&mut self, rate: f64) {
        self.device_rate = rate;
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Fill `out` with normalized mono frames.
    ///
    /// Safe to call in any state; a stopped engine writes silence. The
    /// caller must not mutate the sample buffer while renders are in
    /// flight (pause discipline).
    pub fn render(&mut self, sample: &Sample, out: &mut [f32]) {
        let params = sample.params();
        let data = sample.data();
        let length = params.length() as f64;
        let delta = self.source_rate / self.device_rate;
        let mut pos = params.position();

        for frame in out.iter_mut() {
            if self.state == PlaybackState::Stopped {
                *frame = 0.0;
                continue;
            }

            let pos_floor = pos.floor() as i64;
            let offset = pos - pos_floor as f64;
            let value = interpolate(self.kernel, &self.taps, offset);

            pos += delta;

            if pos.floor() > length {
                *frame = 0.0;
                self.state = PlaybackState::Stopped;
                continue;
            }

            if (pos.floor() as i64) > pos_floor {
                // Push the sample the playhead just crossed.
                self.taps.rotate_left(1);
                self.taps[3] = data[pos_floor as usize] as f64;
            }

            if params.is_looped() && pos > params.loop_end() as f64 {
                // Snap to the loop start; the fractional phase is
                // intentionally discarded, matching the hardware-era
                // behavior this mimics.
                pos = params.loop_start() as f64;
            }

            *frame = (s16_to_f32(value) * self.volume).clamp(-1.0, 1.0);

            if self.state == PlaybackState::RampingDown {
                self.volume *= RAMP_FACTOR;
            }
        }

        params.set_position(pos);

        if self.volume <= RAMP_FLOOR {
            self.state = PlaybackState::Stopped;
            debug!("ramp-down complete");
        }
    }
}
