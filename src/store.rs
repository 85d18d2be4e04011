//! Sample Store
//!
//! Owns the editable sample, the clipboard, and the undo history, and
//! implements the edit algebra over them. Every operation is total:
//! out-of-range arguments are clamped or refused with a `false` return,
//! never an error. Mutations that change the buffer snapshot into the
//! undo history first; copies and undo itself do not.
//!
//! All of these operations resize or rewrite the sample buffer, so the
//! pause discipline applies: stop playback before calling them.

use log::{debug, info};

use crate::sample::Sample;

/// Valid resample target range in Hz.
const RESAMPLE_MIN: f64 = 1000.0;
const RESAMPLE_MAX: f64 = 48000.0;

/// A sample produced by a format reader, ready to commit to the store.
#[derive(Debug, Clone)]
pub struct LoadedSample {
    pub data: Vec<i16>,
    pub rate: f64,
    pub looped: bool,
    pub loop_start: usize,
    pub loop_end: usize,
}

/// A trimmed copy of the sample for the writers: everything before the
/// edit start marker is dropped and the loop markers are rebased.
#[derive(Debug, Clone)]
pub struct ExportView {
    pub data: Vec<i16>,
    pub rate: f64,
    pub looped: bool,
    pub loop_start: usize,
    pub loop_end: usize,
}

/// Full restorable snapshot of the editable sample.
#[derive(Debug, Clone)]
struct Snapshot {
    data: Vec<i16>,
    samp_start: usize,
    loop_start: usize,
    loop_end: usize,
    looped: bool,
    rate: f64,
}

/// Bounded undo history. Capacity 1 reproduces the classic single-slot
/// behavior; larger capacities change nothing about the contracts.
#[derive(Debug)]
pub struct UndoHistory {
    stack: Vec<Snapshot>,
    capacity: usize,
}

impl UndoHistory {
    fn new(capacity: usize) -> Self {
        Self {
            stack: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    fn push(&mut self, snapshot: Snapshot) {
        if self.stack.len() == self.capacity {
            self.stack.remove(0);
        }
        self.stack.push(snapshot);
    }

    fn pop(&mut self) -> Option<Snapshot> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// The editor's working state: sample, clipboard, history.
#[derive(Debug)]
pub struct SampleStore {
    sample: Sample,
    clipboard: Option<Vec<i16>>,
    history: UndoHistory,
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleStore {
    pub fn new() -> Self {
        Self::with_undo_capacity(1)
    }

    pub fn with_undo_capacity(capacity: usize) -> Self {
        Self {
            sample: Sample::new(),
            clipboard: None,
            history: UndoHistory::new(capacity),
        }
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn clipboard(&self) -> Option<&[i16]> {
        self.clipboard.as_deref()
    }

    fn snapshot(&self) -> Snapshot {
        let p = self.sample.params();
        Snapshot {
            data: self.sample.data().to_vec(),
            samp_start: p.samp_start(),
            loop_start: p.loop_start(),
            loop_end: p.loop_end(),
            looped: p.is_looped(),
            rate: p.rate(),
        }
    }

    fn push_undo(&mut self) {
        let snap = self.snapshot();
        self.history.push(snap);
    }

    fn restore(&mut self, snap: Snapshot) {
        self.sample.replace_data(snap.data);
        let p = self.sample.params();
        p.set_markers(snap.samp_start, snap.loop_start, snap.loop_end);
        p.set_looped(snap.looped);
        p.set_rate(snap.rate);
        p.set_position(0.0);
    }

    /// Clamp a range into the buffer, swapping reversed endpoints.
    fn normalize_range(&self, start: usize, end: usize) -> (usize, usize) {
        let len = self.sample.len();
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        (lo.min(len), hi.min(len))
    }

    // ========================================================================
    // Loading and clearing
    // ========================================================================

    /// Commit a freshly read sample. Markers apply in the order
    /// samp_start, loop_end, loop_start so the clamps land right.
    pub fn load(&mut self, loaded: LoadedSample) {
        debug_assert!(!loaded.data.is_empty());
        info!(
            "loading sample: {} samples at {} Hz (loop={})",
            loaded.data.len(),
            loaded.rate,
            loaded.looped
        );
        self.sample.replace_data(loaded.data);
        let p = self.sample.params();
        p.set_looped(loaded.looped);
        p.set_markers(0, loaded.loop_start, loaded.loop_end);
        p.set_rate(loaded.rate);
        p.set_position(0.0);
    }

    /// Reset to the cleared state (one zero sample, defaults).
    /// Snapshots first, like every other mutator, so a clear is
    /// undoable.
    pub fn clear(&mut self) {
        self.push_undo();
        self.collapse();
    }

    /// Cleared state without a snapshot, for mutators that have already
    /// snapshotted and then collapse to a degenerate result.
    fn collapse(&mut self) {
        info!("sample cleared");
        self.sample.clear();
    }

    // ========================================================================
    // Clipboard operations
    // ========================================================================

    /// Copy a range to the clipboard. Never snapshots. A degenerate
    /// range still copies one sample.
    pub fn copy_range(&mut self, start: usize, end: usize) {
        if self.sample.is_empty() {
            return;
        }
        let (start, end) = self.normalize_range(start, end);
        let start = start.min(self.sample.len() - 1);
        let count = (end - start).max(1).min(self.sample.len() - start);
        self.clipboard = Some(self.sample.data()[start..start + count].to_vec());
        debug!("copied {} samples", count);
    }

    /// Copy one sample at the cursor, then delete it.
    pub fn cut_at(&mut self, index: usize) -> bool {
        self.copy_range(index, index);
        self.delete_single(index)
    }

    /// Copy a range, then delete it.
    pub fn cut_range(&mut self, start: usize, end: usize) -> bool {
        self.copy_range(start, end);
        self.delete_range(start, end)
    }

    /// Insert the clipboard at `index`, shifting markers past the
    /// insertion point. An index past the end appends; pasting into a
    /// cleared sample replaces it.
    pub fn paste_at(&mut self, index: usize) -> bool {
        self.paste_at_inner(index, true)
    }

    fn paste_at_inner(&mut self, index: usize, set_undo: bool) -> bool {
        let clip = match &self.clipboard {
            Some(clip) if !clip.is_empty() => clip.clone(),
            _ => return false,
        };
        let index = index.min(self.sample.len());

        if set_undo {
            self.push_undo();
        }

        let clip_len = clip.len();
        let mut merged;
        if self.sample.is_empty() {
            // Cleared buffer: the clipboard becomes the whole sample.
            merged = clip;
        } else {
            let old = self.sample.data();
            merged = Vec::with_capacity(old.len() + clip_len);
            merged.extend_from_slice(&old[..index]);
            merged.extend_from_slice(&clip);
            merged.extend_from_slice(&old[index..]);
        }

        let p = self.sample.params();
        let samp_start = p.samp_start();
        let loop_start = p.loop_start();
        let loop_end = p.loop_end();
        self.sample.replace_data(merged);

        let shift = |m: usize| if m > index { m + clip_len } else { m };
        self.sample
            .params()
            .set_markers(shift(samp_start), shift(loop_start), shift(loop_end));
        true
    }

    /// Replace a range with the clipboard contents: one snapshot, then
    /// a delete and a paste that share it.
    pub fn paste_over(&mut self, start: usize, end: usize) -> bool {
        if self.clipboard.is_none() {
            return false;
        }
        self.push_undo();
        if !self.delete_range_inner(start, end, false) {
            // Nothing changed; drop the speculative snapshot.
            self.history.pop();
            return false;
        }
        self.paste_at_inner(start, false)
    }

    // ========================================================================
    // Destructive edits
    // ========================================================================

    /// Keep only `[start, end)`, dropping everything else. A result of
    /// one sample or fewer collapses to the cleared state.
    pub fn crop(&mut self, start: usize, end: usize) -> bool {
        if self.sample.is_empty() {
            return false;
        }
        let (start, end) = self.normalize_range(start, end);

        if end - start <= 1 {
            self.push_undo();
            self.collapse();
            return true;
        }

        self.push_undo();

        let kept = self.sample.data()[start..end].to_vec();
        let new_len = kept.len();
        let p = self.sample.params();
        let loop_start = p.loop_start();
        let loop_end = p.loop_end();
        self.sample.replace_data(kept);

        // Markers translate into the kept window; a loop start past the
        // window resets, a loop end inside it translates.
        let new_loop_start = if loop_start > end { 0 } else { loop_start.saturating_sub(start) };
        let new_loop_end = if loop_end < end { loop_end.saturating_sub(start) } else { new_len };
        self.sample.params().set_markers(0, new_loop_start, new_loop_end);
        true
    }

    /// Delete the sample at `index`. Markers at or beyond it slide down.
    pub fn delete_single(&mut self, index: usize) -> bool {
        self.delete_single_inner(index, true)
    }

    fn delete_single_inner(&mut self, index: usize, set_undo: bool) -> bool {
        if self.sample.is_empty() || index >= self.sample.len() {
            return false;
        }

        if set_undo {
            self.push_undo();
        }

        if self.sample.len() - 1 <= 1 {
            self.collapse();
            return true;
        }

        let mut data = self.sample.data().to_vec();
        data.remove(index);
        let p = self.sample.params();
        let samp_start = p.samp_start();
        let loop_start = p.loop_start();
        let loop_end = p.loop_end();
        self.sample.replace_data(data);

        let new_samp_start = if index < samp_start { samp_start - 1 } else { samp_start };
        let new_loop_start = if index < loop_start { loop_start - 1 } else { loop_start };
        let new_loop_end = if index <= loop_end { loop_end.saturating_sub(1) } else { loop_end };
        self.sample
            .params()
            .set_markers(new_samp_start, new_loop_start, new_loop_end);
        true
    }

    /// Delete `[start, end)`. An empty range deletes the single sample
    /// at `start`. A result of one sample or fewer collapses to the
    /// cleared state.
    pub fn delete_range(&mut self, start: usize, end: usize) -> bool {
        self.delete_range_inner(start, end, true)
    }

    fn delete_range_inner(&mut self, start: usize, end: usize, set_undo: bool) -> bool {
        if self.sample.is_empty() {
            return false;
        }
        if start == end {
            return self.delete_single_inner(start, set_undo);
        }
        let (start, end) = self.normalize_range(start, end);
        let range = end - start;

        if set_undo {
            self.push_undo();
        }

        if self.sample.len() - range <= 1 {
            self.collapse();
            return true;
        }

        let mut data = Vec::with_capacity(self.sample.len() - range);
        data.extend_from_slice(&self.sample.data()[..start]);
        data.extend_from_slice(&self.sample.data()[end..]);
        let p = self.sample.params();
        let samp_start = p.samp_start();
        let loop_start = p.loop_start();
        let loop_end = p.loop_end();
        self.sample.replace_data(data);

        // Markers past the span slide down by its width; markers inside
        // it land on its left edge.
        let shift = |m: usize| {
            if m > end {
                m - range
            } else if m > start {
                start
            } else {
                m
            }
        };
        self.sample
            .params()
            .set_markers(shift(samp_start), shift(loop_start), shift(loop_end));
        true
    }

    // ========================================================================
    // Undo
    // ========================================================================

    /// Roll back to the most recent snapshot. Returns false when the
    /// history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snap) => {
                debug!("undo: restoring {} samples", snap.data.len());
                self.restore(snap);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // ========================================================================
    // Resampling
    // ========================================================================

    /// Nearest-sample resample to `target` Hz. Markers and length scale
    /// by `ceil(x / ratio)` where `ratio = rate / target`.
    pub fn resample(&mut self, target: f64) -> bool {
        let p = self.sample.params();
        let rate = p.rate();
        if target == rate || !(RESAMPLE_MIN..=RESAMPLE_MAX).contains(&target) {
            return false;
        }
        if self.sample.len() < 2 {
            return false;
        }

        self.push_undo();

        let ratio = rate / target;
        let scale = |x: usize| (x as f64 / ratio).ceil() as usize;

        let new_len = scale(self.sample.len());
        let mut data = vec![0i16; new_len];
        let src = self.sample.data();
        let mut pos = 0.0f64;
        for slot in data.iter_mut() {
            let idx = pos.floor() as usize;
            if idx >= src.len() {
                break;
            }
            *slot = src[idx];
            pos += ratio;
        }

        let samp_start = scale(p.samp_start());
        let loop_start = scale(p.loop_start());
        let loop_end = scale(p.loop_end());

        info!("resampled {} Hz -> {} Hz ({} samples)", rate, target, new_len);

        self.sample.replace_data(data);
        let p = self.sample.params();
        p.set_markers(samp_start, loop_start, loop_end);
        p.set_rate(target);
        p.set_position(0.0);
        true
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Trimmed copy for the format writers. `None` when nothing useful
    /// would be written.
    pub fn export_view(&self) -> Option<ExportView> {
        if self.sample.is_empty() {
            return None;
        }
        let p = self.sample.params();
        let samp_start = p.samp_start();
        let data = self.sample.data()[samp_start..].to_vec();
        if data.len() <= 1 {
            return None;
        }
        Some(ExportView {
            data,
            rate: p.rate(),
            looped: p.is_looped(),
            loop_start: p.loop_start() - samp_start,
            loop_end: p.loop_end() - samp_start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::DEFAULT_RATE;
    use pretty_assertions::assert_eq;

    fn store_with(data: Vec<i16>) -> SampleStore {
        let mut store = SampleStore::new();
        let len = data.len();
        store.load(LoadedSample {
            data,
            rate: 16744.0,
            looped: false,
            loop_start: 0,
            loop_end: len,
        });
        store
    }

    fn ramp(len: usize) -> Vec<i16> {
        (0..len as i16).collect()
    }

    // ------------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------------

    #[test]
    fn test_copy_then_paste_grows_by_clip_len() {
        let mut store = store_with(ramp(32));
        store.copy_range(4, 12);
        assert_eq!(store.clipboard().unwrap().len(), 8);

        assert!(store.paste_at(16));
        assert_eq!(store.sample().len(), 40);
        assert_eq!(&store.sample().data()[16..24], &ramp(32)[4..12]);
        assert_eq!(store.sample().data()[24], 16);
    }

    #[test]
    fn test_copy_reversed_range_normalizes() {
        let mut store = store_with(ramp(32));
        store.copy_range(12, 4);
        assert_eq!(store.clipboard().unwrap().len(), 8);
        assert_eq!(store.clipboard().unwrap()[0], 4);
    }

    #[test]
    fn test_degenerate_copy_takes_one_sample() {
        let mut store = store_with(ramp(32));
        store.copy_range(5, 5);
        assert_eq!(store.clipboard().unwrap(), &[5]);
    }

    #[test]
    fn test_paste_without_clipboard_is_refused() {
        let mut store = store_with(ramp(8));
        assert!(!store.paste_at(0));
    }

    #[test]
    fn test_paste_into_cleared_sample_replaces_it() {
        let mut store = store_with(ramp(16));
        store.copy_range(0, 8);
        store.clear();
        assert!(store.paste_at(0));
        assert_eq!(store.sample().data(), &ramp(16)[0..8]);
    }

    #[test]
    fn test_paste_shifts_markers_strictly_past_index() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(4, 8, 24);
        store.copy_range(0, 4);

        assert!(store.paste_at(8));
        let p = store.sample().params();
        // loop_start == index stays; loop_end moves
        assert_eq!(p.samp_start(), 4);
        assert_eq!(p.loop_start(), 8);
        assert_eq!(p.loop_end(), 28);
    }

    #[test]
    fn test_cut_range_fills_clipboard_and_deletes() {
        let mut store = store_with(ramp(32));
        assert!(store.cut_range(8, 16));
        assert_eq!(store.sample().len(), 24);
        assert_eq!(store.clipboard().unwrap(), &ramp(32)[8..16]);
    }

    #[test]
    fn test_paste_past_end_appends() {
        let mut store = store_with(ramp(16));
        store.copy_range(0, 4);
        assert!(store.paste_at(500));
        assert_eq!(store.sample().len(), 20);
        assert_eq!(&store.sample().data()[16..], &[0, 1, 2, 3]);
    }

    #[test]
    fn test_cut_at_takes_one_sample() {
        let mut store = store_with(ramp(16));
        let p = store.sample().params();
        p.set_markers(0, 4, 12);

        assert!(store.cut_at(2));
        assert_eq!(store.clipboard().unwrap(), &[2]);
        assert_eq!(store.sample().len(), 15);
        assert_eq!(store.sample().data()[2], 3);
        let p = store.sample().params();
        assert_eq!(p.loop_start(), 3);
        assert_eq!(p.loop_end(), 11);
    }

    #[test]
    fn test_paste_over_replaces_range_with_one_undo() {
        let mut store = store_with(ramp(32));
        store.copy_range(0, 4);
        assert!(store.paste_over(8, 16));
        assert_eq!(store.sample().len(), 28);
        assert_eq!(&store.sample().data()[8..12], &[0, 1, 2, 3]);

        assert!(store.undo());
        assert_eq!(store.sample().data(), &ramp(32)[..]);
        assert!(!store.can_undo());
    }

    // ------------------------------------------------------------------------
    // Deletion
    // ------------------------------------------------------------------------

    #[test]
    fn test_delete_single_slides_markers() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(4, 8, 24);

        assert!(store.delete_single(2));
        let p = store.sample().params();
        assert_eq!(store.sample().len(), 31);
        assert_eq!(p.samp_start(), 3);
        assert_eq!(p.loop_start(), 7);
        assert_eq!(p.loop_end(), 23);
        assert!(p.markers_ordered());
    }

    #[test]
    fn test_empty_range_delete_equals_single_delete() {
        let mut a = store_with(ramp(32));
        let mut b = store_with(ramp(32));
        assert!(a.delete_range(5, 5));
        assert!(b.delete_single(5));
        assert_eq!(a.sample().data(), b.sample().data());
    }

    #[test]
    fn test_delete_range_marker_arithmetic() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(2, 12, 28);

        assert!(store.delete_range(8, 16));
        let p = store.sample().params();
        assert_eq!(store.sample().len(), 24);
        assert_eq!(p.samp_start(), 2); // before span: unchanged
        assert_eq!(p.loop_start(), 8); // inside span: left edge
        assert_eq!(p.loop_end(), 20); // past span: minus width
    }

    #[test]
    fn test_delete_everything_collapses_to_cleared() {
        let mut store = store_with(ramp(16));
        assert!(store.delete_range(0, 16));
        assert_eq!(store.sample().len(), 1);
        assert_eq!(store.sample().params().rate(), DEFAULT_RATE);
    }

    #[test]
    fn test_delete_on_cleared_sample_is_refused() {
        let mut store = SampleStore::new();
        assert!(!store.delete_single(0));
        assert!(!store.delete_range(0, 1));
    }

    // ------------------------------------------------------------------------
    // Crop
    // ------------------------------------------------------------------------

    #[test]
    fn test_crop_translates_markers() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(0, 12, 20);
        p.set_looped(true);

        assert!(store.crop(8, 24));
        let p = store.sample().params();
        assert_eq!(store.sample().len(), 16);
        assert_eq!(p.samp_start(), 0);
        assert_eq!(p.loop_start(), 4);
        assert_eq!(p.loop_end(), 12);
    }

    #[test]
    fn test_crop_to_single_sample_clears() {
        let mut store = store_with(ramp(32));
        assert!(store.crop(10, 11));
        assert_eq!(store.sample().len(), 1);
        assert_eq!(store.sample().params().rate(), DEFAULT_RATE);
        // and it can be undone
        assert!(store.undo());
        assert_eq!(store.sample().len(), 32);
    }

    // ------------------------------------------------------------------------
    // Undo
    // ------------------------------------------------------------------------

    #[test]
    fn test_cut_then_undo_restores_exactly() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(2, 8, 30);
        p.set_looped(true);

        assert!(store.cut_range(4, 20));
        assert!(store.undo());

        let p = store.sample().params();
        assert_eq!(store.sample().data(), &ramp(32)[..]);
        assert_eq!(p.samp_start(), 2);
        assert_eq!(p.loop_start(), 8);
        assert_eq!(p.loop_end(), 30);
        assert!(p.is_looped());
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut store = store_with(ramp(64));
        let p = store.sample().params();
        p.set_markers(0, 8, 48);
        p.set_looped(true);

        store.clear();
        assert_eq!(store.sample().len(), 1);

        assert!(store.undo());
        let p = store.sample().params();
        assert_eq!(store.sample().data(), &ramp(64)[..]);
        assert_eq!(p.loop_start(), 8);
        assert_eq!(p.loop_end(), 48);
        assert!(p.is_looped());
    }

    #[test]
    fn test_degenerate_collapse_snapshots_once() {
        let mut store = SampleStore::with_undo_capacity(4);
        store.load(LoadedSample {
            data: ramp(8),
            rate: 16744.0,
            looped: false,
            loop_start: 0,
            loop_end: 8,
        });

        // crop to nothing collapses to the cleared state
        assert!(store.crop(3, 4));
        assert_eq!(store.sample().len(), 1);

        // exactly one snapshot was taken for the whole collapse
        assert!(store.undo());
        assert_eq!(store.sample().data(), &ramp(8)[..]);
        assert!(!store.can_undo());
    }

    #[test]
    fn test_undo_on_empty_history_returns_false() {
        let mut store = store_with(ramp(8));
        assert!(!store.undo());
    }

    #[test]
    fn test_single_slot_history_keeps_latest() {
        let mut store = store_with(ramp(32));
        assert!(store.delete_single(0));
        assert!(store.delete_single(0));
        assert!(store.undo());
        // Only the second delete can be rolled back.
        assert_eq!(store.sample().len(), 31);
        assert!(!store.undo());
    }

    #[test]
    fn test_deeper_history_when_configured() {
        let mut store = SampleStore::with_undo_capacity(4);
        store.load(LoadedSample {
            data: ramp(32),
            rate: 16744.0,
            looped: false,
            loop_start: 0,
            loop_end: 32,
        });
        assert!(store.delete_single(0));
        assert!(store.delete_single(0));
        assert!(store.undo());
        assert!(store.undo());
        assert_eq!(store.sample().len(), 32);
    }

    // ------------------------------------------------------------------------
    // Resample
    // ------------------------------------------------------------------------

    #[test]
    fn test_resample_scales_length_and_markers() {
        let mut store = store_with(ramp(100));
        let p = store.sample().params();
        p.set_markers(10, 20, 80);

        assert!(store.resample(33488.0)); // exactly double
        let p = store.sample().params();
        assert_eq!(store.sample().len(), 200);
        assert_eq!(p.samp_start(), 20);
        assert_eq!(p.loop_start(), 40);
        assert_eq!(p.loop_end(), 160);
        assert_eq!(p.rate(), 33488.0);
    }

    #[test]
    fn test_resample_rejects_bad_targets() {
        let mut store = store_with(ramp(100));
        assert!(!store.resample(16744.0)); // unchanged
        assert!(!store.resample(999.0));
        assert!(!store.resample(48001.0));

        let mut cleared = SampleStore::new();
        assert!(!cleared.resample(22050.0));
    }

    #[test]
    fn test_resample_is_undoable() {
        let mut store = store_with(ramp(100));
        assert!(store.resample(8372.0));
        assert_eq!(store.sample().len(), 50);
        assert!(store.undo());
        assert_eq!(store.sample().len(), 100);
        assert_eq!(store.sample().params().rate(), 16744.0);
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    #[test]
    fn test_export_view_trims_and_rebases() {
        let mut store = store_with(ramp(32));
        let p = store.sample().params();
        p.set_markers(4, 8, 24);
        p.set_looped(true);

        let view = store.export_view().unwrap();
        assert_eq!(view.data.len(), 28);
        assert_eq!(view.data[0], 4);
        assert_eq!(view.loop_start, 4);
        assert_eq!(view.loop_end, 20);
        assert!(view.looped);

        let mut cleared = SampleStore::new();
        cleared.clear();
        assert!(cleared.export_view().is_none());
    }

    // ------------------------------------------------------------------------
    // Invariant chaining
    // ------------------------------------------------------------------------

    #[test]
    fn test_markers_ordered_through_operation_chain() {
        let mut store = store_with(ramp(64));
        let p = store.sample().params();
        p.set_markers(4, 16, 48);
        p.set_looped(true);

        store.copy_range(0, 10);
        assert!(store.paste_at(20));
        assert!(store.sample().params().markers_ordered());

        assert!(store.delete_range(5, 30));
        assert!(store.sample().params().markers_ordered());

        assert!(store.crop(2, 30));
        assert!(store.sample().params().markers_ordered());

        assert!(store.resample(24000.0));
        assert!(store.sample().params().markers_ordered());

        assert!(store.undo());
        assert!(store.sample().params().markers_ordered());
    }
}
