//! Gallery collection, selection, and reordering state
//!
//! `GalleryState` owns the ordered record collection, the set of checked
//! record ids, and the loading flag. All mutation happens synchronously
//! through the methods here; the rendering layer is a read-only observer.
//!
//! Two orders exist: the *natural* stored order, which reorder operations
//! work against, and the derived *display* order from [`GalleryState::ordered_view`],
//! which puts the featured record first.

use std::collections::HashSet;

use crate::loader::LoadError;
use crate::models::ImageRecord;

/// Owned gallery state: record collection, selection set, loading flag
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GalleryState {
    records: Vec<ImageRecord>,
    selected: HashSet<i64>,
    loading: bool,
}

impl GalleryState {
    /// Create an empty gallery (populated later by a load)
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in natural stored order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record currently holding the featured slot, if any
    pub fn featured(&self) -> Option<&ImageRecord> {
        self.records.iter().find(|r| r.featured)
    }

    /// Whether a load is currently in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Mark a load as started
    ///
    /// Returns `false` if a load is already in flight; the caller must then
    /// skip the fetch entirely.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            log::warn!("Load requested while another load is in flight");
            return false;
        }
        self.loading = true;
        true
    }

    /// Finish a load with the loader's result
    ///
    /// On success the fetched records replace the collection and the
    /// selection is reset. On failure the collection and selection stay
    /// untouched and the error is handed back for logging. The loading
    /// flag clears either way.
    pub fn complete_load(
        &mut self,
        result: Result<Vec<ImageRecord>, LoadError>,
    ) -> Result<(), LoadError> {
        self.loading = false;
        let mut records = result?;

        // A payload may carry more than one featured flag; first one wins.
        let mut seen_featured = false;
        for record in &mut records {
            if record.featured {
                if seen_featured {
                    log::warn!("Record {} also marked featured; clearing", record.id);
                    record.featured = false;
                } else {
                    seen_featured = true;
                }
            }
        }

        self.records = records;
        self.selected.clear();
        Ok(())
    }

    /// Add `id` to the selection
    ///
    /// No-op if the id is absent from the collection or already selected.
    pub fn select(&mut self, id: i64) {
        if self.records.iter().any(|r| r.id == id) {
            self.selected.insert(id);
        }
    }

    /// Remove `id` from the selection; no-op if it is not selected
    pub fn deselect(&mut self, id: i64) {
        self.selected.remove(&id);
    }

    /// Apply a checkbox toggle event from the rendering layer
    pub fn set_selected(&mut self, id: i64, checked: bool) {
        if checked {
            self.select(id);
        } else {
            self.deselect(id);
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Number of currently selected records
    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    /// Delete every selected record, preserving the order of the rest
    ///
    /// No-op on an empty selection. The selection is cleared afterwards, so
    /// it never refers to a deleted id.
    pub fn delete_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        let before = self.records.len();
        self.records.retain(|r| !self.selected.contains(&r.id));
        log::debug!("Deleted {} records", before - self.records.len());
        self.selected.clear();
    }

    /// Move the record at `source` to `dest` in natural order
    ///
    /// `dest` is interpreted against the sequence after removal (list-splice
    /// semantics): moving index 2 to 0 in `[a,b,c,d]` yields `[c,a,b,d]`.
    ///
    /// With `into_featured_slot` set, a non-featured moved record takes over
    /// the featured flag from whichever record held it and is relocated to
    /// the front of the stored order, overriding the plain placement. A
    /// record that is already featured keeps its flags and the plain move.
    ///
    /// Out-of-range indices leave the state untouched; a cancelled drag
    /// legitimately resolves to no target.
    pub fn reorder(&mut self, source: usize, dest: usize, into_featured_slot: bool) {
        let len = self.records.len();
        if source >= len || dest >= len {
            log::debug!("Reorder {} -> {} out of range (len {}), ignoring", source, dest, len);
            return;
        }

        let record = self.records.remove(source);
        self.records.insert(dest, record);

        if into_featured_slot && !self.records[dest].featured {
            for record in &mut self.records {
                record.featured = false;
            }
            let mut promoted = self.records.remove(dest);
            promoted.featured = true;
            log::debug!("Promoted record {} to the featured slot", promoted.id);
            self.records.insert(0, promoted);
        }
    }

    /// Records in display order: the featured record first, then the rest
    /// in stored order
    ///
    /// Pure and lazy; with no featured record the view is simply the stored
    /// order of the non-featured records.
    pub fn ordered_view(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records
            .iter()
            .filter(|r| r.featured)
            .chain(self.records.iter().filter(|r| !r.featured))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, featured: bool) -> ImageRecord {
        ImageRecord::new(id, format!("images/{}.webp", id), featured)
    }

    fn loaded(records: Vec<ImageRecord>) -> GalleryState {
        let mut state = GalleryState::new();
        assert!(state.begin_load());
        state.complete_load(Ok(records)).unwrap();
        state
    }

    fn ids(state: &GalleryState) -> Vec<i64> {
        state.records().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_load_replaces_collection_and_clears_selection() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);
        state.select(1);

        assert!(state.begin_load());
        state.complete_load(Ok(vec![record(7, true)])).unwrap();

        assert_eq!(ids(&state), vec![7]);
        assert_eq!(state.selection_count(), 0);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_load_leaves_state_untouched() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);
        let before = state.clone();

        assert!(state.begin_load());
        let payload_err = crate::loader::decode_records(b"not json").unwrap_err();
        assert!(state.complete_load(Err(payload_err)).is_err());

        assert!(!state.is_loading());
        assert_eq!(state, before);
    }

    #[test]
    fn test_in_flight_guard() {
        let mut state = GalleryState::new();
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.complete_load(Ok(vec![])).unwrap();
        assert!(state.begin_load());
    }

    #[test]
    fn test_load_keeps_at_most_one_featured() {
        let state = loaded(vec![record(1, true), record(2, true), record(3, true)]);

        let featured: Vec<i64> = state
            .records()
            .iter()
            .filter(|r| r.featured)
            .map(|r| r.id)
            .collect();
        assert_eq!(featured, vec![1]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);

        state.select(1);
        state.select(1);
        assert_eq!(state.selection_count(), 1);
        assert!(state.is_selected(1));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let mut state = loaded(vec![record(1, false)]);

        state.select(99);
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_deselect_absent_id_is_noop() {
        let mut state = loaded(vec![record(1, false)]);

        state.deselect(1);
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_toggle_events() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);

        state.set_selected(2, true);
        assert!(state.is_selected(2));
        state.set_selected(2, false);
        assert!(!state.is_selected(2));
    }

    #[test]
    fn test_delete_selected() {
        let mut state = loaded(vec![record(1, false), record(2, true), record(3, false)]);
        state.select(1);
        state.select(3);

        state.delete_selected();

        assert_eq!(ids(&state), vec![2]);
        assert!(state.records()[0].featured);
        assert_eq!(state.selection_count(), 0);
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);

        state.delete_selected();
        assert_eq!(ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_deleting_featured_record_leaves_zero_featured() {
        let mut state = loaded(vec![record(1, false), record(2, true)]);
        state.select(2);

        state.delete_selected();

        assert_eq!(ids(&state), vec![1]);
        assert!(state.featured().is_none());
        let view: Vec<i64> = state.ordered_view().map(|r| r.id).collect();
        assert_eq!(view, vec![1]);
    }

    #[test]
    fn test_reorder_without_promotion() {
        let mut state = loaded(vec![
            record(10, false),
            record(11, false),
            record(12, false),
            record(13, false),
        ]);

        // [a,b,c,d] with c moved to the front
        state.reorder(2, 0, false);
        assert_eq!(ids(&state), vec![12, 10, 11, 13]);
    }

    #[test]
    fn test_reorder_to_end() {
        let mut state = loaded(vec![record(10, false), record(11, false), record(12, false)]);

        state.reorder(0, 2, false);
        assert_eq!(ids(&state), vec![11, 12, 10]);
    }

    #[test]
    fn test_promotion_moves_record_to_front_and_transfers_flag() {
        let mut state = loaded(vec![record(1, true), record(2, false), record(3, false)]);

        state.reorder(2, 0, true);

        assert_eq!(ids(&state), vec![3, 1, 2]);
        assert!(state.records()[0].featured);
        assert!(!state.records().iter().any(|r| r.id == 1 && r.featured));
        assert_eq!(
            state.records().iter().filter(|r| r.featured).count(),
            1
        );
    }

    #[test]
    fn test_promotion_destination_index_is_overridden() {
        let mut state = loaded(vec![record(1, true), record(2, false), record(3, false)]);

        // Drop index says "end of list" but the featured slot wins.
        state.reorder(1, 2, true);

        assert_eq!(ids(&state), vec![2, 1, 3]);
        assert_eq!(state.featured().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_moving_featured_record_keeps_its_flag() {
        let mut state = loaded(vec![record(1, true), record(2, false), record(3, false)]);

        state.reorder(0, 2, true);

        assert_eq!(ids(&state), vec![2, 3, 1]);
        assert_eq!(state.featured().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut state = loaded(vec![record(1, true), record(2, false)]);
        let before = state.clone();

        state.reorder(5, 0, false);
        assert_eq!(state, before);

        state.reorder(0, 5, true);
        assert_eq!(state, before);
    }

    #[test]
    fn test_ordered_view_puts_featured_first() {
        let state = loaded(vec![record(1, false), record(2, true), record(3, false)]);

        let view: Vec<i64> = state.ordered_view().map(|r| r.id).collect();
        assert_eq!(view, vec![2, 1, 3]);
    }

    #[test]
    fn test_ordered_view_is_restartable() {
        let state = loaded(vec![record(1, false), record(2, true)]);

        assert_eq!(state.ordered_view().count(), 2);
        assert_eq!(state.ordered_view().count(), 2);
    }
}
