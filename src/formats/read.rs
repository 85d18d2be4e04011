//! Format readers
//!
//! Each reader takes the whole file as bytes and produces a
//! [`LoadedSample`]. Stereo sources keep the left channel; loop chunks
//! that fail validation fall back to an unlooped full-length marker
//! pair rather than rejecting the file.

use std::io::Cursor;

use hound::SampleFormat as WavSampleFormat;
use log::warn;

use crate::codec;
use crate::error::{BrrError, Result};
use crate::formats::find_chunk;
use crate::sample::{BRR_NATIVE_RATE, DEFAULT_RATE};
use crate::store::LoadedSample;

/// µ-law streams carry no rate; this matches their usual source material.
const MULAW_RATE: f64 = 22050.0;

/// Expand an 8-bit sample to 16 bits by bit replication.
pub(crate) fn byte_to_word(b: u8) -> i16 {
    (((b as u16) << 8) | b as u16) as i16
}

fn be16(bytes: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([bytes[pos], bytes[pos + 1]])
}

fn be32(bytes: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes([
        bytes[pos],
        bytes[pos + 1],
        bytes[pos + 2],
        bytes[pos + 3],
    ])
}

fn le32(bytes: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([
        bytes[pos],
        bytes[pos + 1],
        bytes[pos + 2],
        bytes[pos + 3],
    ])
}

fn invalid(format: &'static str, reason: impl Into<String>) -> BrrError {
    BrrError::InvalidContainer {
        format,
        reason: reason.into(),
    }
}

fn unlooped(data: Vec<i16>, rate: f64) -> LoadedSample {
    let len = data.len();
    LoadedSample {
        data,
        rate,
        looped: false,
        loop_start: 0,
        loop_end: len,
    }
}

// ============================================================================
// WAV
// ============================================================================

/// Loop points from a `smpl` chunk, validated against the sample count.
///
/// The first loop descriptor starts 52 bytes into the chunk. The stored
/// end is inclusive, so it is bumped by one; markers that fall outside
/// the buffer disable the loop entirely.
fn wav_loop_points(bytes: &[u8], length: usize) -> (bool, usize, usize) {
    let pos = match find_chunk(bytes, b"smpl") {
        Some(pos) if pos + 60 <= bytes.len() => pos + 52,
        _ => return (false, 0, length),
    };

    let loop_start = le32(bytes, pos) as usize;
    let mut loop_end = le32(bytes, pos + 4) as usize + 1;

    if loop_end > length {
        loop_end = length;
    }
    if loop_start > length || loop_end == 0 {
        return (false, 0, length);
    }
    (true, loop_start, loop_end)
}

pub fn read_wav(bytes: &[u8]) -> Result<LoadedSample> {
    let mut reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.channels == 0 || spec.channels > 2 {
        return Err(BrrError::UnsupportedChannels {
            count: spec.channels,
        });
    }
    if spec.channels == 2 {
        warn!("stereo WAV detected, reading left channel only");
    }
    let step = spec.channels as usize;

    let data: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (WavSampleFormat::Int, 8) => reader
            .samples::<i16>()
            .step_by(step)
            .map(|s| Ok(byte_to_word(s? as i8 as u8)))
            .collect::<Result<_>>()?,
        (WavSampleFormat::Int, 16) => reader
            .samples::<i16>()
            .step_by(step)
            .map(|s| Ok(s?))
            .collect::<Result<_>>()?,
        (WavSampleFormat::Int, 24) => reader
            .samples::<i32>()
            .step_by(step)
            .map(|s| Ok((s? >> 8) as i16))
            .collect::<Result<_>>()?,
        (WavSampleFormat::Float, 32) => reader
            .samples::<f32>()
            .step_by(step)
            .map(|s| Ok((s? * 32767.5).floor() as i16))
            .collect::<Result<_>>()?,
        (_, bits) => return Err(BrrError::UnsupportedBitDepth { bits }),
    };

    if data.is_empty() {
        return Err(invalid("WAV", "no audio frames"));
    }

    let (looped, loop_start, loop_end) = wav_loop_points(bytes, data.len());
    Ok(LoadedSample {
        data,
        rate: spec.sample_rate as f64,
        looped,
        loop_start,
        loop_end,
    })
}

// ============================================================================
// AIFF
// ============================================================================

/// Decode Apple's 80-bit extended float (sign, 15-bit exponent, 64-bit
/// mantissa with explicit integer bit).
pub(crate) fn ieee_extended_to_f64(b: &[u8; 10]) -> f64 {
    let expon = (((b[0] & 0x7F) as i32) << 8) | b[1] as i32;
    let hi = u32::from_be_bytes([b[2], b[3], b[4], b[5]]) as f64;
    let lo = u32::from_be_bytes([b[6], b[7], b[8], b[9]]) as f64;

    let f = if expon == 0 && hi == 0.0 && lo == 0.0 {
        0.0
    } else if expon == 0x7FFF {
        f64::INFINITY
    } else {
        let e = expon - 16383;
        hi * 2f64.powi(e - 31) + lo * 2f64.powi(e - 63)
    };

    if b[0] & 0x80 != 0 {
        -f
    } else {
        f
    }
}

pub fn read_aiff(bytes: &[u8]) -> Result<LoadedSample> {
    let comm_pos =
        find_chunk(bytes, b"COMM").ok_or_else(|| invalid("AIFF", "COMM chunk not found"))?;
    let ssnd_pos =
        find_chunk(bytes, b"SSND").ok_or_else(|| invalid("AIFF", "SSND chunk not found"))?;
    let data_pos = ssnd_pos + 16;

    if bytes.len() < comm_pos + 26 || bytes.len() < data_pos {
        return Err(invalid("AIFF", "truncated header"));
    }

    let num_chan = be16(bytes, comm_pos + 8);
    let bit_depth = be16(bytes, comm_pos + 14);
    let mut rate_bytes = [0u8; 10];
    rate_bytes.copy_from_slice(&bytes[comm_pos + 16..comm_pos + 26]);
    let rate = ieee_extended_to_f64(&rate_bytes);

    if num_chan == 0 || num_chan > 2 {
        return Err(BrrError::UnsupportedChannels { count: num_chan });
    }
    if num_chan == 2 {
        warn!("stereo AIFF detected, reading left channel only");
    }
    if bit_depth != 8 && bit_depth != 16 {
        return Err(BrrError::UnsupportedBitDepth { bits: bit_depth });
    }

    let data_len = (be32(bytes, data_pos - 12) as usize).saturating_sub(8);
    let frame_bytes = (bit_depth as usize / 8) * num_chan as usize;
    let length = data_len / frame_bytes;

    if length < 2 || data_pos + length * frame_bytes > bytes.len() {
        return Err(invalid("AIFF", "SSND data out of bounds"));
    }

    let mut data = Vec::with_capacity(length);
    for i in 0..length {
        let n = i * num_chan as usize;
        if bit_depth == 8 {
            data.push(byte_to_word(bytes[data_pos + n]));
        } else {
            data.push(be16(bytes, data_pos + n * 2) as i16);
        }
    }

    Ok(unlooped(data, rate))
}

// ============================================================================
// 8SVX
// ============================================================================

pub fn read_8svx(bytes: &[u8]) -> Result<LoadedSample> {
    let body_pos =
        find_chunk(bytes, b"BODY").ok_or_else(|| invalid("8SVX", "BODY chunk not found"))?;
    let data_pos = body_pos + 8;

    if bytes.len() < 0x22 || bytes.len() < data_pos {
        return Err(invalid("8SVX", "truncated header"));
    }

    let rate = be16(bytes, 0x20) as f64;
    let length = be32(bytes, data_pos - 4) as usize;

    if length < 2 || data_pos + length > bytes.len() {
        return Err(invalid("8SVX", "BODY data out of bounds"));
    }

    let data: Vec<i16> = bytes[data_pos..data_pos + length]
        .iter()
        .map(|&b| byte_to_word(b))
        .collect();

    // VHDR: oneShotHiSamples doubles as the loop start, repeatHiSamples
    // as the loop length.
    let loop_start = be32(bytes, 20) as usize;
    let repeat_len = be32(bytes, 24) as usize;

    let (looped, loop_start, loop_end) = if loop_start > length || repeat_len == 0 {
        (false, 0, length)
    } else {
        (true, loop_start, loop_start + repeat_len)
    };

    Ok(LoadedSample {
        data,
        rate,
        looped,
        loop_start,
        loop_end,
    })
}

// ============================================================================
// VC
// ============================================================================

/// Fixed-layout ROM sample dump: 0x4000 8-bit samples at 0x1500, loop
/// configuration bytes near 0x1330.
pub fn read_vc(bytes: &[u8]) -> Result<LoadedSample> {
    const DATA_POS: usize = 0x1500;
    const LENGTH: usize = 0x4000;

    if DATA_POS + LENGTH >= bytes.len() {
        return Err(invalid("VC", "file too short for sample bank"));
    }

    let data: Vec<i16> = bytes[DATA_POS..DATA_POS + LENGTH]
        .iter()
        .map(|&b| byte_to_word(b))
        .collect();

    let (mut looped, mut loop_start, mut loop_end) = (false, 0usize, LENGTH);
    if bytes[0x133B] != 0 {
        looped = true;
        loop_start = ((bytes[0x1332] as usize) + 1) << 7;
        loop_end = ((bytes[0x1333] as usize) + 2) << 7;

        if loop_end > LENGTH {
            loop_end = LENGTH;
        }
        if loop_start > LENGTH || loop_end == 0 {
            looped = false;
            loop_start = 0;
            loop_end = LENGTH;
        }
    }

    Ok(LoadedSample {
        data,
        rate: BRR_NATIVE_RATE,
        looped,
        loop_start,
        loop_end,
    })
}

// ============================================================================
// BRR
// ============================================================================

pub fn read_brr(bytes: &[u8]) -> Result<LoadedSample> {
    let decoded = codec::decode(bytes)?;
    Ok(LoadedSample {
        data: decoded.samples,
        rate: BRR_NATIVE_RATE,
        looped: decoded.loop_enable,
        loop_start: decoded.loop_start,
        loop_end: decoded.loop_end,
    })
}

// ============================================================================
// µ-law and raw PCM
// ============================================================================

/// Logarithmic µ-law expansion; bit 7 carries the sign (set = positive).
pub fn read_mulaw(bytes: &[u8]) -> Result<LoadedSample> {
    if bytes.len() < 2 {
        return Err(invalid("mu-law", "stream too short"));
    }
    let data: Vec<i16> = bytes
        .iter()
        .map(|&b| {
            let sign = if b & 0x80 != 0 { 1.0 } else { -1.0 };
            let mag = (256f64.powf((b & 0x7F) as f64 / 127.0) - 1.0) / 255.0;
            codec::clamp16((sign * mag * i16::MAX as f64).round() as i32)
        })
        .collect();
    Ok(unlooped(data, MULAW_RATE))
}

pub fn read_raw(bytes: &[u8]) -> Result<LoadedSample> {
    if bytes.len() < 2 {
        return Err(invalid("raw PCM", "stream too short"));
    }
    let data: Vec<i16> = bytes.iter().map(|&b| byte_to_word(b)).collect();
    Ok(unlooped(data, DEFAULT_RATE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_byte_to_word_replicates_bits() {
        assert_eq!(byte_to_word(0x00), 0x0000);
        assert_eq!(byte_to_word(0x7F), 0x7F7F);
        assert_eq!(byte_to_word(0x80), -0x7F80); // 0x8080 as i16
        assert_eq!(byte_to_word(0xFF), -1); // 0xFFFF
    }

    #[test]
    fn test_ieee_extended_round_values() {
        // 44100 Hz as written by common AIFF tools
        let bytes = [0x40, 0x0E, 0xAC, 0x44, 0, 0, 0, 0, 0, 0];
        assert_relative_eq!(ieee_extended_to_f64(&bytes), 44100.0, epsilon = 1e-6);

        let bytes = [0x40, 0x0C, 0xFA, 0, 0, 0, 0, 0, 0, 0];
        assert_relative_eq!(ieee_extended_to_f64(&bytes), 16000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mulaw_is_signed_and_monotonic() {
        let loaded = read_mulaw(&[0x00, 0x7F, 0x80, 0xFF]).unwrap();
        // 0x00: maximum negative magnitude is full scale negative
        assert!(loaded.data[0] == 0);
        assert!(loaded.data[1] < -30000);
        assert_eq!(loaded.data[2], 0);
        assert!(loaded.data[3] > 30000);
        assert_relative_eq!(loaded.rate, 22050.0);
    }

    #[test]
    fn test_raw_read_defaults() {
        let loaded = read_raw(&[0x00, 0x40, 0x80, 0xC0]).unwrap();
        assert_eq!(loaded.data.len(), 4);
        assert!(!loaded.looped);
        assert_eq!(loaded.loop_end, 4);
        assert_relative_eq!(loaded.rate, DEFAULT_RATE);
    }

    #[test]
    fn test_vc_requires_full_bank() {
        assert!(read_vc(&[0u8; 0x2000]).is_err());

        let mut bytes = vec![0u8; 0x1500 + 0x4000 + 1];
        bytes[0x133B] = 1;
        bytes[0x1332] = 3; // loop start (3+1)<<7 = 512
        bytes[0x1333] = 7; // loop end (7+2)<<7 = 1152
        let loaded = read_vc(&bytes).unwrap();
        assert!(loaded.looped);
        assert_eq!(loaded.loop_start, 512);
        assert_eq!(loaded.loop_end, 1152);
        assert_eq!(loaded.data.len(), 0x4000);
    }

    #[test]
    fn test_8svx_loop_fields() {
        // minimal FORM/8SVX with VHDR loop fields and a BODY chunk
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"FORM");
        bytes.extend_from_slice(&0u32.to_be_bytes());
        bytes.extend_from_slice(b"8SVX");
        bytes.extend_from_slice(b"VHDR");
        bytes.extend_from_slice(&20u32.to_be_bytes());
        bytes.extend_from_slice(&8u32.to_be_bytes()); // loop start @20
        bytes.extend_from_slice(&4u32.to_be_bytes()); // loop length @24
        bytes.extend_from_slice(&32u32.to_be_bytes()); // samples per cycle
        bytes.extend_from_slice(&8000u16.to_be_bytes()); // rate @0x20
        bytes.push(1); // octaves
        bytes.push(0); // compression
        bytes.extend_from_slice(&0x10000u32.to_be_bytes()); // volume
        bytes.extend_from_slice(b"BODY");
        bytes.extend_from_slice(&16u32.to_be_bytes());
        bytes.extend_from_slice(&[0x40u8; 16]);

        let loaded = read_8svx(&bytes).unwrap();
        assert_eq!(loaded.data.len(), 16);
        assert_relative_eq!(loaded.rate, 8000.0);
        assert!(loaded.looped);
        assert_eq!(loaded.loop_start, 8);
        assert_eq!(loaded.loop_end, 12);
        assert_eq!(loaded.data[0], byte_to_word(0x40));
    }

    #[test]
    fn test_wav_round_trip_via_hound() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 32000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..64i16 {
                writer.write_sample(i * 100).unwrap();
            }
            writer.finalize().unwrap();
        }
        let loaded = read_wav(cursor.get_ref()).unwrap();
        assert_eq!(loaded.data.len(), 64);
        assert_eq!(loaded.data[10], 1000);
        assert_relative_eq!(loaded.rate, 32000.0);
        assert!(!loaded.looped);
        assert_eq!(loaded.loop_end, 64);
    }

    #[test]
    fn test_wav_stereo_keeps_left_channel() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for i in 0..32i16 {
                writer.write_sample(i).unwrap(); // left
                writer.write_sample(-i).unwrap(); // right
            }
            writer.finalize().unwrap();
        }
        let loaded = read_wav(cursor.get_ref()).unwrap();
        assert_eq!(loaded.data.len(), 32);
        assert_eq!(loaded.data[5], 5);
    }

    #[test]
    fn test_wav_rejects_garbage() {
        assert!(read_wav(b"not a wav file").is_err());
    }
}
