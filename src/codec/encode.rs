//! BRR encoding
//!
//! Exhaustive per-block search over all (shift, filter) pairs, scoring
//! each candidate by RMS reconstruction error from a half-scale residual
//! quantizer (after kode54's converter). Prediction state carries across
//! blocks so each block is scored in context.

use log::debug;

use crate::codec::{clamp16, samples_to_bytes, BLOCK_BYTES, BLOCK_SAMPLES, MAX_SHIFT};
use crate::error::{BrrError, Result};

/// Prediction history for the mash quantizer, shared across blocks.
#[derive(Debug, Clone, Copy, Default)]
struct MashState {
    v0: i16,
    v1: i16,
}

/// Quantize one 16-sample block with a fixed (filter, shift) pair.
///
/// Returns the RMS reconstruction error. When `output` is given, the
/// sixteen nibbles are packed into it (high nibble first) and the
/// prediction history in `state` is advanced; scoring passes leave the
/// caller's state untouched.
fn mash_block(
    state: &mut MashState,
    filter: u8,
    input: &[i16; BLOCK_SAMPLES],
    shift: u8,
    mut output: Option<&mut [u8; 8]>,
) -> f64 {
    let mut v0 = state.v0 as i32;
    let mut v1 = state.v1 as i32;
    let step = 1i32 << shift;
    let mut sq_err = 0.0f64;

    for (n, &sample) in input.iter().enumerate() {
        // Half-scale linear prediction of this sample from history.
        let vlin = match filter {
            1 => (v0 >> 1) + ((-v0) >> 5),
            2 => v0 + ((-(v0 + (v0 >> 1))) >> 5) - (v1 >> 1) + (v1 >> 5),
            3 => v0 + ((-(v0 + (v0 << 2) + (v0 << 3))) >> 7) - (v1 >> 1) + ((v1 + (v1 >> 1)) >> 4),
            _ => 0,
        };

        let mut d = ((sample as i32) >> 1) - vlin;
        let da = d.abs();
        if da > 16384 && da < 32768 {
            // Exploit 16-bit wraparound to reach the sample the short way.
            d -= 32768 * (d >> 24);
        }

        let mut dp = d + (step << 2) + (step >> 2);
        let mut c = 0i32;
        if dp > 0 {
            c = if step > 1 { dp / (step / 2) } else { dp * 2 };
            c = c.min(15);
        }
        c -= 8;
        dp = (c << shift) >> 1;

        v1 = v0;
        v0 = (clamp16(vlin + dp) as i32).wrapping_mul(2) as i16 as i32;

        let err = sample as i32 - v0;
        sq_err += (err as f64) * (err as f64);

        if let Some(out) = output.as_deref_mut() {
            out[n >> 1] |= ((c & 0x0F) as u8) << (4 - 4 * (n & 1));
        }
    }

    if output.is_some() {
        state.v0 = v0 as i16;
        state.v1 = v1 as i16;
    }

    (sq_err / BLOCK_SAMPLES as f64).sqrt()
}

/// Encode one block, searching every shift/filter pair and keeping the
/// first candidate with the strictly lowest RMS error. Writes 9 bytes
/// (header plus packed nibbles); loop/end flags are XORed in later.
fn encode_block(state: &mut MashState, input: &[i16; BLOCK_SAMPLES], block: &mut [u8]) {
    let mut best = (0u8, 0u8);
    let mut best_err = 0.0f64;

    for shift in 0..=MAX_SHIFT {
        for filter in 0..4u8 {
            let mut probe = *state;
            let err = mash_block(&mut probe, filter, input, shift, None);
            if (shift == 0 && filter == 0) || err < best_err {
                best = (shift, filter);
                best_err = err;
            }
        }
    }

    let (shift, filter) = best;
    block[0] = (shift << 4) | (filter << 2);
    let mut packed = [0u8; 8];
    mash_block(state, filter, input, shift, Some(&mut packed));
    block[1..BLOCK_BYTES].copy_from_slice(&packed);
}

/// Encode PCM into a complete BRR stream.
///
/// With `loop_points = Some((start, end))` the output is trimmed to the
/// loop end, prefixed with the 2-byte loop header, and the block holding
/// the loop start sample gets its loop flag set. The first block is
/// front-padded with zeros so the total length is a multiple of 16, and
/// a whole silent block is prepended unless the sample already starts
/// with 16 zeros.
///
/// # Errors
/// [`BrrError::EmptySample`] when fewer than 16 meaningful samples would
/// be written (streams under 10 bytes are unplayable).
pub fn encode(samples: &[i16], loop_points: Option<(usize, usize)>) -> Result<Vec<u8>> {
    let (looped, loop_start) = match loop_points {
        Some((start, _)) => (true, start),
        None => (false, 0),
    };
    let header_bytes = if looped { 2usize } else { 0 };
    let sample_length = match loop_points {
        Some((_, end)) => end.min(samples.len()),
        None => samples.len(),
    };

    // Front-pad so the stream holds whole blocks.
    let block_offset = match sample_length % BLOCK_SAMPLES {
        0 => 0,
        rem => BLOCK_SAMPLES - rem,
    };

    // A silent lead-in block protects the predictor warm-up unless the
    // sample already opens with silence.
    let pad_bytes = if samples
        .iter()
        .take(BLOCK_SAMPLES)
        .any(|&s| s != 0)
    {
        BLOCK_BYTES
    } else {
        0
    };

    let data_len = samples_to_bytes(sample_length + block_offset) + pad_bytes;
    let total_len = data_len + header_bytes;
    if total_len < 10 {
        return Err(BrrError::EmptySample);
    }

    let mut out = vec![0u8; total_len];
    let mut state = MashState::default();
    let mut write_pos = header_bytes + pad_bytes;

    let mut block_in = [0i16; BLOCK_SAMPLES];
    for base in (0..sample_length + block_offset).step_by(BLOCK_SAMPLES) {
        for (j, slot) in block_in.iter_mut().enumerate() {
            let src = (base + j) as i64 - block_offset as i64;
            *slot = if (0..sample_length as i64).contains(&src) {
                samples[src as usize]
            } else {
                0
            };
        }
        encode_block(&mut state, &block_in, &mut out[write_pos..write_pos + BLOCK_BYTES]);
        write_pos += BLOCK_BYTES;
    }

    // End flag on the final block.
    let last = total_len - BLOCK_BYTES;
    out[last] ^= 0x01;

    if looped {
        // Loop flag only on the block holding the loop start sample.
        let loop_block = (loop_start + block_offset) / BLOCK_SAMPLES;
        let flag_pos = header_bytes + pad_bytes + loop_block * BLOCK_BYTES;
        out[flag_pos.min(last)] ^= 0x02;

        let loop_byte = pad_bytes + samples_to_bytes(loop_start + block_offset);
        out[0..2].copy_from_slice(&(loop_byte as u16).to_le_bytes());
    }

    debug!(
        "encoded {} samples to {} BRR bytes (loop={})",
        sample_length, total_len, looped
    );

    Ok(out)
}
