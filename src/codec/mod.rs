//! BRR Codec Module
//!
//! The BRR wire format packs 16 PCM samples into 9-byte blocks: one header
//! byte (shift, filter id, loop flag, end flag) followed by sixteen signed
//! 4-bit residuals, high nibble first. Decoding runs a two-tap predictor
//! whose state carries across block boundaries; encoding searches every
//! (shift, filter) pair per block for the lowest RMS reconstruction error.

pub mod decode;
pub mod encode;

pub use decode::{decode, DecodedBrr};
pub use encode::encode;

/// Samples per BRR block.
pub const BLOCK_SAMPLES: usize = 16;

/// Bytes per BRR block.
pub const BLOCK_BYTES: usize = 9;

/// Maximum header shift amount; larger values are clamped on decode.
pub const MAX_SHIFT: u8 = 12;

/// Convert a byte position in BRR data to a sample position, rounding to
/// nearest via the 16:9 fixed-point ratio.
pub fn bytes_to_samples(bytes: usize) -> usize {
    (((bytes as i64) * ((16 << 16) / 9) + 0x8000) >> 16) as usize
}

/// Convert a sample position to a byte position in BRR data, rounding to
/// nearest. Inverse of [`bytes_to_samples`] on block boundaries.
pub fn samples_to_bytes(samples: usize) -> usize {
    ((9 * (((samples as i64) << 16) / 16) + 0x8000) >> 16) as usize
}

/// Saturate a 32-bit intermediate to the 16-bit sample range, preserving
/// the sign-directed saturation of the reference quantizer.
pub fn clamp16(n: i32) -> i16 {
    if n as i16 as i32 != n {
        (0x7FFF - (n >> 24)) as i16
    } else {
        n as i16
    }
}

/// Two-tap prediction coefficients for a decode filter id.
///
/// Each term is `history * ((num << 16) / den) >> 16` in integer math, so
/// the exact truncation of the fixed-point divide is preserved.
pub(crate) fn filter_terms(filter: u8, h0: i32, h1: i32) -> (i32, i32) {
    fn fixed(h: i32, num: i32, den: i32) -> i32 {
        ((h as i64 * ((num << 16) / den) as i64) >> 16) as i32
    }
    match filter {
        1 => (fixed(h0, 15, 16), 0),
        2 => (fixed(h0, 61, 32), fixed(h1, 15, 16)),
        3 => (fixed(h0, 115, 64), fixed(h1, 13, 16)),
        _ => (0, 0),
    }
}
