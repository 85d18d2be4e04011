//! BRR stream decoding
//!
//! Accepts the two stream shapes found in the wild: a bare sequence of
//! 9-byte blocks, or the same prefixed with a 2-byte little-endian loop
//! start byte offset. Anything else is malformed.

use log::debug;

use crate::codec::{bytes_to_samples, clamp16, filter_terms, BLOCK_BYTES, MAX_SHIFT};
use crate::error::{BrrError, Result};

/// Result of decoding a BRR stream.
#[derive(Debug, Clone)]
pub struct DecodedBrr {
    /// Decoded 16-bit PCM, one entry per encoded nibble.
    pub samples: Vec<i16>,
    /// Whether the stream declared a playable loop (loop + end flags set).
    pub loop_enable: bool,
    /// Loop start in samples.
    pub loop_start: usize,
    /// Loop end in samples.
    pub loop_end: usize,
}

/// Decode a complete BRR stream.
///
/// The predictor history starts at zero and carries across blocks. The
/// end flag marks the final used block; any samples decoded past it are
/// written as silence. An end flag without the loop flag yields an
/// unlooped sample with default markers covering the whole buffer.
///
/// # Errors
/// [`BrrError::MalformedStream`] when the stream length fits neither
/// shape or decodes to no samples.
pub fn decode(stream: &[u8]) -> Result<DecodedBrr> {
    let (data, data_offset, mut loop_start, mut loop_enable) = if stream.len() % BLOCK_BYTES == 0 {
        (stream, 0usize, 0usize, false)
    } else if stream.len() >= 2 && (stream.len() - 2) % BLOCK_BYTES == 0 {
        let header = u16::from_le_bytes([stream[0], stream[1]]) as usize;
        (&stream[2..], 2, bytes_to_samples(header), true)
    } else {
        return Err(BrrError::MalformedStream {
            reason: format!("stream length {} fits no BRR shape", stream.len()),
        });
    };

    let length = bytes_to_samples(data.len());
    if length == 0 {
        return Err(BrrError::MalformedStream {
            reason: "stream contains no blocks".to_string(),
        });
    }

    let mut samples = vec![0i16; length];
    let mut loop_end = length;

    let mut shift = 0u8;
    let mut filter = 0u8;
    let mut end_pos = data.len();
    let mut end_seen = false;
    let mut loop_flag_seen = false;
    let mut h0: i32 = 0;
    let mut h1: i32 = 0;
    let mut out = 0usize;

    for (i, &byte) in data.iter().enumerate() {
        if i % BLOCK_BYTES == 0 {
            shift = (byte >> 4).min(MAX_SHIFT);
            filter = (byte >> 2) & 0x03;
            loop_flag_seen |= byte & 0x02 != 0;

            // The first end flag wins; later blocks decode as silence.
            // Encoders differ on where the loop flag lives (every block,
            // or just the block holding the loop start), so any flag up
            // to the end block keeps the loop alive.
            if byte & 0x01 != 0 && !end_seen {
                end_seen = true;
                end_pos = i;
                if loop_flag_seen {
                    // +7 measured from the stream start lands on the last
                    // byte of the end block once the loop header is counted.
                    loop_enable = true;
                    loop_end = bytes_to_samples(end_pos + data_offset + 7);
                } else {
                    // End without loop: unlooped, markers cover everything.
                    loop_enable = false;
                    loop_start = 0;
                    loop_end = length;
                }
            }
        } else {
            for nib in [(byte >> 4) as i8, (byte & 0x0F) as i8] {
                let nibble = if nib > 7 { nib - 16 } else { nib } as i32;
                let (a, b) = filter_terms(filter, h0, h1);
                let decoded = clamp16((nibble << shift) + a - b);
                h1 = h0;
                h0 = decoded as i32;
                samples[out] = if i <= end_pos + 8 { decoded } else { 0 };
                out += 1;
            }
        }
    }

    debug!(
        "decoded {} BRR bytes to {} samples (loop={})",
        stream.len(),
        length,
        loop_enable
    );

    Ok(DecodedBrr {
        samples,
        loop_enable,
        loop_start,
        loop_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BLOCK_BYTES;

    fn zero_block(flags: u8) -> [u8; BLOCK_BYTES] {
        let mut block = [0u8; BLOCK_BYTES];
        block[0] = flags;
        block
    }

    #[test]
    fn test_rejects_bad_stream_lengths() {
        for len in [1usize, 3, 5, 8, 10, 12] {
            let stream = vec![0u8; len];
            assert!(decode(&stream).is_err(), "length {} accepted", len);
        }
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn test_headerless_stream_decodes_sixteen_per_block() {
        let mut stream = Vec::new();
        stream.extend_from_slice(&zero_block(0x00));
        stream.extend_from_slice(&zero_block(0x01));
        let decoded = decode(&stream).unwrap();
        assert_eq!(decoded.samples.len(), 32);
        assert!(!decoded.loop_enable);
        assert_eq!(decoded.loop_start, 0);
        assert_eq!(decoded.loop_end, 32);
    }

    #[test]
    fn test_loop_header_sets_loop_start() {
        let mut stream = vec![9u8, 0u8]; // loop starts at byte 9 = sample 16
        stream.extend_from_slice(&zero_block(0x00));
        stream.extend_from_slice(&zero_block(0x03)); // loop + end
        let decoded = decode(&stream).unwrap();
        assert!(decoded.loop_enable);
        assert_eq!(decoded.loop_start, 16);
        // end block starts at data byte 9; +2 header +7 = byte 18 = sample 32
        assert_eq!(decoded.loop_end, 32);
    }

    #[test]
    fn test_end_without_loop_defaults_markers() {
        let mut stream = vec![0u8, 0u8];
        stream.extend_from_slice(&zero_block(0x01)); // end, no loop
        stream.extend_from_slice(&zero_block(0x00));
        let decoded = decode(&stream).unwrap();
        assert!(!decoded.loop_enable);
        assert_eq!(decoded.loop_start, 0);
        assert_eq!(decoded.loop_end, 32);
    }

    #[test]
    fn test_samples_past_end_block_are_silenced() {
        let mut stream = Vec::new();
        stream.extend_from_slice(&zero_block(0x01)); // end in first block
        let mut noisy = [0x7Fu8; BLOCK_BYTES];
        noisy[0] = 0xC0; // shift 12, filter 0
        stream.extend_from_slice(&noisy);
        let decoded = decode(&stream).unwrap();
        assert!(decoded.samples[16..].iter().all(|&s| s == 0));
    }

    #[test]
    fn test_filter_zero_direct_samples() {
        // shift 4, filter 0: nibble 7 decodes to 7 << 4 = 112
        let mut block = [0u8; BLOCK_BYTES];
        block[0] = 0x40;
        block[1] = 0x70; // high nibble 7, low nibble 0
        let decoded = decode(&block).unwrap();
        assert_eq!(decoded.samples[0], 112);
        assert_eq!(decoded.samples[1], 0);
    }

    #[test]
    fn test_negative_nibbles_sign_extend() {
        // nibble 0xF is -1; shift 1 gives -2
        let mut block = [0u8; BLOCK_BYTES];
        block[0] = 0x10;
        block[1] = 0xF0;
        let decoded = decode(&block).unwrap();
        assert_eq!(decoded.samples[0], -2);
    }

    #[test]
    fn test_predictor_history_carries_across_blocks() {
        // First block ends with a nonzero sample under filter 0; second
        // block uses filter 1 so its first sample leans on that history.
        let mut stream = Vec::new();
        let mut first = [0u8; BLOCK_BYTES];
        first[0] = 0x80; // shift 8
        first[8] = 0x07; // last nibble 7 -> 7 << 8 = 1792
        stream.extend_from_slice(&first);
        let mut second = [0u8; BLOCK_BYTES];
        second[0] = 0x04; // shift 0, filter 1
        stream.extend_from_slice(&second);
        let decoded = decode(&stream).unwrap();
        assert_eq!(decoded.samples[15], 1792);
        // filter 1 predicts 15/16 of previous: 1792 * 61440 >> 16 = 1680
        assert_eq!(decoded.samples[16], 1680);
    }
}
