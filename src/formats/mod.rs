//! Container format readers and writers
//!
//! Detection prefers magic chunks at fixed offsets (RIFF/WAVE, FORM/AIFF,
//! FORM/8SVX) and falls back to the file extension for the headerless
//! formats; anything unrecognized loads as raw 8-bit PCM. Readers never
//! touch the editor state: they return a [`LoadedSample`] that the store
//! commits only on success.

pub mod read;
pub mod write;

use std::fs;
use std::path::Path;

use log::info;

use crate::error::{BrrError, Result};
use crate::store::{ExportView, LoadedSample};

/// Recognized sample containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Wav,
    Aiff,
    Svx8,
    Vc,
    Brr,
    MuLaw,
    Raw,
}

/// Exported PCM width for the writers that support both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportDepth {
    #[default]
    Sixteen,
    Eight,
}

/// Writer settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    pub depth: ExportDepth,
}

/// Scan for a 4-byte chunk id at any (unaligned) offset.
pub(crate) fn find_chunk(haystack: &[u8], needle: &[u8; 4]) -> Option<usize> {
    haystack.windows(4).position(|w| w == needle)
}

fn has_ext(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Identify the container for a loaded byte buffer.
pub fn sniff(path: &Path, bytes: &[u8]) -> SampleFormat {
    let at = |pos: usize, id: &[u8; 4]| bytes.len() >= pos + 4 && &bytes[pos..pos + 4] == id;

    if at(0, b"RIFF") && at(8, b"WAVE") && (at(12, b"fmt ") || at(12, b"JUNK")) {
        SampleFormat::Wav
    } else if at(0, b"FORM") && at(8, b"AIFF") {
        SampleFormat::Aiff
    } else if at(0, b"FORM") && at(8, b"8SVX") && at(12, b"VHDR") {
        SampleFormat::Svx8
    } else if has_ext(path, "vc") {
        SampleFormat::Vc
    } else if has_ext(path, "brr") {
        SampleFormat::Brr
    } else if has_ext(path, "bin") || has_ext(path, "eii") {
        SampleFormat::MuLaw
    } else {
        SampleFormat::Raw
    }
}

/// Pick a writer from the target extension; unknown extensions export
/// raw PCM.
pub fn format_for_export(path: &Path) -> SampleFormat {
    if has_ext(path, "wav") {
        SampleFormat::Wav
    } else if has_ext(path, "aif") || has_ext(path, "aiff") {
        SampleFormat::Aiff
    } else if has_ext(path, "iff") {
        SampleFormat::Svx8
    } else if has_ext(path, "brr") {
        SampleFormat::Brr
    } else if has_ext(path, "bin") {
        SampleFormat::MuLaw
    } else {
        SampleFormat::Raw
    }
}

/// Decode an in-memory buffer with the given format's reader.
pub fn load_bytes(format: SampleFormat, bytes: &[u8]) -> Result<LoadedSample> {
    match format {
        SampleFormat::Wav => read::read_wav(bytes),
        SampleFormat::Aiff => read::read_aiff(bytes),
        SampleFormat::Svx8 => read::read_8svx(bytes),
        SampleFormat::Vc => read::read_vc(bytes),
        SampleFormat::Brr => read::read_brr(bytes),
        SampleFormat::MuLaw => read::read_mulaw(bytes),
        SampleFormat::Raw => read::read_raw(bytes),
    }
}

/// Read and decode a sample file.
pub fn load_file(path: &Path) -> Result<LoadedSample> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BrrError::FileNotFound {
                path: path.display().to_string(),
                source: Some(e),
            }
        } else {
            BrrError::Io(e)
        }
    })?;
    let format = sniff(path, &bytes);
    info!("loading {} as {:?}", path.display(), format);
    load_bytes(format, &bytes)
}

/// Encode an export view with the given format's writer.
pub fn encode_bytes(
    format: SampleFormat,
    view: &ExportView,
    options: ExportOptions,
) -> Result<Vec<u8>> {
    match format {
        SampleFormat::Wav => write::write_wav(view, options.depth),
        SampleFormat::Aiff => write::write_aiff(view, options.depth),
        SampleFormat::Svx8 => write::write_8svx(view),
        SampleFormat::Brr => write::write_brr(view),
        SampleFormat::MuLaw => write::write_mulaw(view),
        // No dedicated VC writer exists; fall through to raw.
        SampleFormat::Vc | SampleFormat::Raw => write::write_raw(view, options.depth),
    }
}

/// Encode and write an export view to disk, picking the writer from the
/// file extension.
pub fn save_file(path: &Path, view: &ExportView, options: ExportOptions) -> Result<()> {
    let format = format_for_export(path);
    let bytes = encode_bytes(format, view, options)?;
    info!("saving {} as {:?} ({} bytes)", path.display(), format, bytes.len());
    fs::write(path, bytes)?;
    Ok(())
}
