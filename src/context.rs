//! Editor context
//!
//! Ties the store, the playback engine and the shared resample target
//! together, and enforces the pause discipline: playback is stopped
//! before any operation that can replace or resize the sample buffer.

use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::error::{BrrError, Result};
use crate::formats::{self, ExportOptions};
use crate::pitch::{self, PitchDispatch, PitchTarget};
use crate::playback::PlaybackEngine;
use crate::sample::RateCell;
use crate::store::SampleStore;

pub struct EditorContext {
    store: SampleStore,
    engine: PlaybackEngine,
    /// Pending resample target, shared with the pitch worker.
    resample_rate: Arc<RateCell>,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorContext {
    pub fn new() -> Self {
        Self::with_undo_capacity(1)
    }

    pub fn with_undo_capacity(capacity: usize) -> Self {
        Self {
            store: SampleStore::with_undo_capacity(capacity),
            engine: PlaybackEngine::default(),
            resample_rate: Arc::new(RateCell::default()),
        }
    }

    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// Mutable store access. Stops playback first; every mutation can
    /// move or resize the buffer under the render loop otherwise.
    pub fn store_mut(&mut self) -> &mut SampleStore {
        self.engine.stop();
        &mut self.store
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlaybackEngine {
        &mut self.engine
    }

    pub fn resample_rate(&self) -> Arc<RateCell> {
        Arc::clone(&self.resample_rate)
    }

    /// Read a sample file and commit it, syncing the resample target to
    /// the new source rate.
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let loaded = formats::load_file(path)?;
        let rate = loaded.rate;
        self.store_mut().load(loaded);
        self.resample_rate.set(rate);
        Ok(())
    }

    /// Export the sample, trimmed to the edit start marker, picking the
    /// writer from the extension.
    pub fn save_path(&mut self, path: &Path, options: ExportOptions) -> Result<()> {
        let view = self.store.export_view().ok_or(BrrError::EmptySample)?;
        formats::save_file(path, &view, options)
    }

    pub fn play(&mut self) {
        let sample = self.store.sample();
        if !sample.is_empty() {
            self.engine.start(sample);
        }
    }

    pub fn pause(&mut self) {
        self.engine.request_pause();
    }

    /// Kick off pitch detection against the chosen target rate.
    pub fn detect_pitch(&mut self, target: PitchTarget) -> PitchDispatch {
        self.engine.stop();
        pitch::detect_center_pitch(
            self.store.sample(),
            target,
            Arc::clone(&self.resample_rate),
            |rate| debug!("pitch detection finished at {:.0} Hz", rate),
        )
    }

    /// Resample to the pending target rate.
    pub fn apply_resample(&mut self) -> bool {
        let target = self.resample_rate.get();
        self.store_mut().resample(target)
    }
}
