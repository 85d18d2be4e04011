//! CLI command implementations.

use std::path::Path;

use anyhow::{bail, Context as _};
use log::info;

use crate::cli::DepthArg;
use crate::context::EditorContext;
use crate::formats::{self, ExportOptions};
use crate::pitch::{PitchDispatch, PitchTarget};

/// Convert a sample between formats.
pub fn convert(input: &Path, output: &Path, depth: DepthArg) -> anyhow::Result<()> {
    let mut ctx = EditorContext::new();
    ctx.load_path(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let sample = ctx.store().sample();
    info!(
        "{}: {} samples at {:.0} Hz",
        input.display(),
        sample.len(),
        sample.params().rate()
    );

    ctx.save_path(
        output,
        ExportOptions {
            depth: depth.into(),
        },
    )
    .with_context(|| format!("failed to write {}", output.display()))?;

    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

/// Print sample metadata.
pub fn info(path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let format = formats::sniff(path, &bytes);
    let loaded = formats::load_bytes(format, &bytes)?;

    println!("File:       {}", path.display());
    println!("Format:     {:?}", format);
    println!("Length:     {} samples", loaded.data.len());
    println!("Rate:       {:.0} Hz", loaded.rate);
    if loaded.looped {
        println!(
            "Loop:       {}..{} ({} samples)",
            loaded.loop_start,
            loaded.loop_end,
            loaded.loop_end - loaded.loop_start
        );
    } else {
        println!("Loop:       none");
    }
    Ok(())
}

/// Estimate the sample's center pitch, optionally writing the rate back.
pub fn detect_pitch(path: &Path, apply: bool) -> anyhow::Result<()> {
    let mut ctx = EditorContext::new();
    ctx.load_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    match ctx.detect_pitch(PitchTarget::SampleRate) {
        PitchDispatch::Synchronous(rate) => println!("Detected rate: {:.0} Hz", rate),
        PitchDispatch::Threaded(handle) => {
            handle
                .join()
                .map_err(|_| anyhow::anyhow!("pitch worker panicked"))?;
            println!(
                "Detected rate: {:.0} Hz",
                ctx.store().sample().params().rate()
            );
        }
        PitchDispatch::Skipped => bail!("sample is empty, nothing to analyze"),
    }

    if apply {
        ctx.save_path(path, ExportOptions::default())
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Updated {}", path.display());
    }
    Ok(())
}

/// Resample a file to a new rate.
pub fn resample(input: &Path, output: &Path, rate: f64) -> anyhow::Result<()> {
    let mut ctx = EditorContext::new();
    ctx.load_path(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let before = ctx.store().sample().len();
    ctx.resample_rate().set(rate);
    if !ctx.apply_resample() {
        bail!("cannot resample to {} Hz", rate);
    }
    let after = ctx.store().sample().len();
    info!("resampled {} -> {} samples", before, after);

    ctx.save_path(output, ExportOptions::default())
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{} resampled to {:.0} Hz -> {}", input.display(), rate, output.display());
    Ok(())
}
