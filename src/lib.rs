//! brredit - SNES BRR sample editor core
//!
//! An editing and conversion core for the bit-rate-reduced (BRR) 4-bit
//! ADPCM sample format used by the SNES sound chip, plus the PCM
//! containers samples usually arrive in.
//!
//! # Architecture
//!
//! - [`codec`]: BRR block encoder and decoder
//! - [`formats`]: container readers and writers (WAV, AIFF, 8SVX, raw)
//! - [`store`]: the editable sample, clipboard operations and undo
//! - [`playback`]: interpolating resampler that renders to an output rate
//! - [`pitch`]: center-pitch estimation for tuning samples to middle C
//! - [`audio`]: output device configuration with rollback
//!
//! [`context::EditorContext`] wires these together and enforces the
//! pause discipline between playback and edits.

pub mod audio;
pub mod cli;
pub mod codec;
pub mod context;
pub mod error;
pub mod formats;
pub mod pitch;
pub mod playback;
pub mod sample;
pub mod store;

pub use error::{BrrError, Result};
