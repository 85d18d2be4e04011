//! Format writers
//!
//! Writers consume an [`ExportView`] (already trimmed and rebased by the
//! store) and produce the complete file as bytes. All containers are
//! assembled by hand so the loop chunks come out exactly where the
//! readers expect them.

use crate::codec;
use crate::error::Result;
use crate::formats::ExportDepth;
use crate::store::ExportView;

/// MIDI note number written into the WAV sampler chunk (middle C).
const UNITY_NOTE: u32 = 60;

fn push_u16_le(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_u32_le(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn push_u16_be(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_be_bytes());
}

fn push_u32_be(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_be_bytes());
}

/// Signed high byte of a 16-bit sample.
fn word_to_byte(s: i16) -> u8 {
    (s >> 8) as u8
}

// ============================================================================
// WAV
// ============================================================================

/// 68-byte `smpl` chunk: one loop descriptor, inclusive end marker.
fn wav_smpl_chunk(view: &ExportView) -> Vec<u8> {
    let mut out = Vec::with_capacity(68);
    out.extend_from_slice(b"smpl");
    push_u32_le(&mut out, 60);
    push_u32_le(&mut out, 0); // manufacturer
    push_u32_le(&mut out, 0); // product
    push_u32_le(&mut out, (1e9 / view.rate) as u32); // period in ns
    push_u32_le(&mut out, UNITY_NOTE);
    push_u32_le(&mut out, 0); // pitch fraction
    push_u32_le(&mut out, 0); // SMPTE format
    push_u32_le(&mut out, 0); // SMPTE offset
    push_u32_le(&mut out, 1); // loop count
    push_u32_le(&mut out, 0); // sampler data size
    push_u32_le(&mut out, 0); // cue id
    push_u32_le(&mut out, 0); // loop type: forward
    push_u32_le(&mut out, view.loop_start as u32);
    push_u32_le(&mut out, view.loop_end.saturating_sub(1) as u32);
    push_u32_le(&mut out, 0); // fraction
    push_u32_le(&mut out, 0); // play count
    out
}

pub fn write_wav(view: &ExportView, depth: ExportDepth) -> Result<Vec<u8>> {
    let bytes_per_sample = match depth {
        ExportDepth::Sixteen => 2u32,
        ExportDepth::Eight => 1u32,
    };
    let data_len = view.data.len() as u32 * bytes_per_sample;
    let smpl = if view.looped {
        wav_smpl_chunk(view)
    } else {
        Vec::new()
    };

    let mut out = Vec::with_capacity(44 + data_len as usize + smpl.len());
    out.extend_from_slice(b"RIFF");
    push_u32_le(&mut out, 36 + data_len + smpl.len() as u32);
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    push_u32_le(&mut out, 16);
    push_u16_le(&mut out, 1); // PCM
    push_u16_le(&mut out, 1); // mono
    push_u32_le(&mut out, view.rate as u32);
    push_u32_le(&mut out, view.rate as u32 * bytes_per_sample);
    push_u16_le(&mut out, bytes_per_sample as u16); // block align
    push_u16_le(&mut out, bytes_per_sample as u16 * 8);

    out.extend_from_slice(b"data");
    push_u32_le(&mut out, data_len);
    match depth {
        ExportDepth::Sixteen => {
            for &s in &view.data {
                push_u16_le(&mut out, s as u16);
            }
        }
        // 8-bit WAV is unsigned
        ExportDepth::Eight => out.extend(view.data.iter().map(|&s| word_to_byte(s) ^ 0x80)),
    }

    out.extend_from_slice(&smpl);
    Ok(out)
}

// ============================================================================
// AIFF
// ============================================================================

/// Encode a rate as Apple's 80-bit extended float.
pub(crate) fn f64_to_ieee_extended(v: f64) -> [u8; 10] {
    let mut out = [0u8; 10];
    if v == 0.0 {
        return out;
    }
    let bits = v.to_bits();
    let sign = ((bits >> 63) as u16) << 15;
    let raw_exp = ((bits >> 52) & 0x7FF) as i32;
    let frac = bits & 0x000F_FFFF_FFFF_FFFF;

    // Rebias from f64 (1023) to extended (16383); the integer bit is
    // explicit in the extended mantissa.
    let expon = sign | ((raw_exp - 1023 + 16383) as u16 & 0x7FFF);
    let mant = (1u64 << 63) | (frac << 11);

    out[0..2].copy_from_slice(&expon.to_be_bytes());
    out[2..10].copy_from_slice(&mant.to_be_bytes());
    out
}

pub fn write_aiff(view: &ExportView, depth: ExportDepth) -> Result<Vec<u8>> {
    let bytes_per_sample = match depth {
        ExportDepth::Sixteen => 2u32,
        ExportDepth::Eight => 1u32,
    };
    let frames = view.data.len() as u32;
    let data_len = frames * bytes_per_sample;
    // COMM (8+18) + SSND header (8+8) + data
    let form_len = 4 + 26 + 16 + data_len;

    let mut out = Vec::with_capacity(form_len as usize + 8);
    out.extend_from_slice(b"FORM");
    push_u32_be(&mut out, form_len);
    out.extend_from_slice(b"AIFF");

    out.extend_from_slice(b"COMM");
    push_u32_be(&mut out, 18);
    push_u16_be(&mut out, 1); // mono
    push_u32_be(&mut out, frames);
    push_u16_be(&mut out, bytes_per_sample as u16 * 8);
    out.extend_from_slice(&f64_to_ieee_extended(view.rate));

    out.extend_from_slice(b"SSND");
    push_u32_be(&mut out, data_len + 8);
    push_u32_be(&mut out, 0); // offset
    push_u32_be(&mut out, 0); // block size
    match depth {
        ExportDepth::Sixteen => {
            for &s in &view.data {
                push_u16_be(&mut out, s as u16);
            }
        }
        ExportDepth::Eight => out.extend(view.data.iter().map(|&s| word_to_byte(s))),
    }
    Ok(out)
}

// ============================================================================
// 8SVX
// ============================================================================

pub fn write_8svx(view: &ExportView) -> Result<Vec<u8>> {
    let data_len = view.data.len() as u32;
    let (one_shot, repeat) = if view.looped {
        (
            view.loop_start as u32,
            (view.loop_end - view.loop_start) as u32,
        )
    } else {
        (data_len, 0)
    };

    // VHDR (8+20) + BODY (8+data), padded to even
    let pad = (data_len & 1) as u32;
    let form_len = 4 + 28 + 8 + data_len + pad;

    let mut out = Vec::with_capacity(form_len as usize + 8);
    out.extend_from_slice(b"FORM");
    push_u32_be(&mut out, form_len);
    out.extend_from_slice(b"8SVX");

    out.extend_from_slice(b"VHDR");
    push_u32_be(&mut out, 20);
    push_u32_be(&mut out, one_shot);
    push_u32_be(&mut out, repeat);
    push_u32_be(&mut out, 32); // samples per high cycle
    push_u16_be(&mut out, view.rate as u16);
    out.push(1); // octave count
    out.push(0); // uncompressed
    push_u32_be(&mut out, 0x10000); // unity volume

    out.extend_from_slice(b"BODY");
    push_u32_be(&mut out, data_len);
    out.extend(view.data.iter().map(|&s| word_to_byte(s)));
    if pad != 0 {
        out.push(0);
    }
    Ok(out)
}

// ============================================================================
// BRR
// ============================================================================

pub fn write_brr(view: &ExportView) -> Result<Vec<u8>> {
    let loop_points = view
        .looped
        .then_some((view.loop_start, view.loop_end))
        .filter(|&(s, e)| e > s);
    codec::encode(&view.data, loop_points)
}

// ============================================================================
// µ-law and raw PCM
// ============================================================================

/// Logarithmic µ-law compression, mirroring the reader: bit 7 set marks a
/// positive sample.
pub fn write_mulaw(view: &ExportView) -> Result<Vec<u8>> {
    let out = view
        .data
        .iter()
        .map(|&s| {
            let mag = (s as f64).abs() / i16::MAX as f64;
            let b = (127.0 * (1.0 + 255.0 * mag).ln() / 256f64.ln()).round() as u8;
            if s >= 0 {
                b ^ 0x80
            } else {
                b
            }
        })
        .collect();
    Ok(out)
}

pub fn write_raw(view: &ExportView, depth: ExportDepth) -> Result<Vec<u8>> {
    let out = match depth {
        ExportDepth::Sixteen => {
            let mut out = Vec::with_capacity(view.data.len() * 2);
            for &s in &view.data {
                push_u16_le(&mut out, s as u16);
            }
            out
        }
        ExportDepth::Eight => view.data.iter().map(|&s| word_to_byte(s)).collect(),
    };
    Ok(out)
}
