//! Dropdown state: selection, viewport, and the host-facing operations.
//!
//! [`DropdownState`] is what the host window/controller holds. It composes
//! the selection tracker with the scroll window and keeps a ratatui
//! `TableState` mirror in sync, so hosts that draw with ratatui get
//! auto-scrolling for free. The host's input dispatcher calls the
//! navigation operations; the candidate-data provider calls
//! [`resolve`](DropdownState::resolve) whenever it rebuilds the row list.

use std::ops::Range;

use ratatui::widgets::TableState as RatatuiTableState;
use tracing::{debug, trace};

use crate::config::DropdownConfig;
use crate::row::{CandidateRow, RowSource};
use crate::selection::{Direction, SelectionTracker};
use crate::viewport::Viewport;

/// Selection state for one autocomplete dropdown.
///
/// Owns no rows. The host keeps the candidate list behind a [`RowSource`]
/// and passes it into every call.
#[derive(Debug)]
pub struct DropdownState {
    config: DropdownConfig,
    tracker: SelectionTracker,
    viewport: Viewport,
    /// Highlight mirror for ratatui hosts (enables auto-scrolling).
    pub ratatui_state: RatatuiTableState,
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new(DropdownConfig::default())
    }
}

impl DropdownState {
    pub fn new(config: DropdownConfig) -> Self {
        let config = config.normalized();
        Self {
            config,
            tracker: SelectionTracker::new(),
            viewport: Viewport::new(config.max_visible),
            ratatui_state: RatatuiTableState::default(),
        }
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Row currently highlighted, or `None` when nothing is selected.
    pub fn selected(&self) -> Option<usize> {
        self.tracker.selected()
    }

    /// Most recently committed selection.
    pub fn saved_selected(&self) -> Option<usize> {
        self.tracker.saved_selected()
    }

    pub fn direction(&self) -> Direction {
        self.tracker.direction()
    }

    /// First visible row of the scroll window.
    pub fn offset(&self) -> usize {
        self.viewport.offset()
    }

    /// The slice of rows the host should draw.
    pub fn visible_range(&self, source: &dyn RowSource) -> Range<usize> {
        self.viewport.visible_range(source.row_count())
    }

    /// Moves the highlight down one selectable row.
    pub fn next_item(&mut self, source: &dyn RowSource) {
        self.tracker.next_item(source, self.config.boundary);
        self.sync(source);
    }

    /// Moves the highlight up one selectable row.
    pub fn previous_item(&mut self, source: &dyn RowSource) {
        self.tracker.previous_item(source, self.config.boundary);
        self.sync(source);
    }

    /// Highlights the first selectable row.
    pub fn select_first_row(&mut self, source: &dyn RowSource) {
        self.tracker.select_first_row(source);
        self.sync(source);
    }

    /// Sets and commits the highlight. `is_next` is the movement direction
    /// that led here; it decides which window edge the row is revealed at.
    pub fn set_current_selected(&mut self, source: &dyn RowSource, index: usize, is_next: bool) {
        self.tracker.set_current_selected(source, index, is_next);
        self.sync(source);
    }

    /// Clears the highlight. Called by the candidate-data provider right
    /// before it rebuilds the row list.
    pub fn reset_selected(&mut self) {
        self.tracker.reset_selected();
        self.ratatui_state.select(None);
    }

    /// Re-validates selection and window against a rebuilt row list.
    pub fn resolve(&mut self, source: &dyn RowSource) {
        let saved_before = self.tracker.saved_selected();
        self.tracker.resolve(source);
        if saved_before.is_some() && self.tracker.saved_selected().is_none() {
            debug!(saved = ?saved_before, "committed selection not present after rebuild");
        }

        self.viewport.clamp(source.row_count());
        match self.tracker.selected() {
            Some(row) => self.viewport.ensure_visible(row, self.tracker.direction()),
            None => self.viewport.reset(),
        }
        self.ratatui_state.select(self.tracker.selected());
    }

    /// Display cell at `row`, or `None` when `row` is out of bounds.
    pub fn cell<'a>(&self, source: &'a dyn RowSource, row: usize) -> Option<&'a CandidateRow> {
        source.row(row)
    }

    /// Display cell of the highlighted row, if any.
    pub fn selected_cell<'a>(&self, source: &'a dyn RowSource) -> Option<&'a CandidateRow> {
        self.tracker.selected().and_then(|row| source.row(row))
    }

    /// Scrolls the highlight into view and mirrors it into the ratatui state.
    fn sync(&mut self, source: &dyn RowSource) {
        if let Some(row) = self.tracker.selected() {
            self.viewport.ensure_visible(row, self.tracker.direction());
        }
        self.ratatui_state.select(self.tracker.selected());
        trace!(
            selected = ?self.tracker.selected(),
            offset = self.viewport.offset(),
            rows = source.row_count(),
            "selection moved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;
    use crate::row::VecSource;

    fn source(n: usize) -> VecSource {
        VecSource::new(
            (0..n)
                .map(|i| CandidateRow::item(i as u64, format!("row{i}")))
                .collect(),
        )
    }

    fn small_window() -> DropdownState {
        DropdownState::new(DropdownConfig {
            max_visible: 3,
            boundary: BoundaryPolicy::Clamp,
        })
    }

    #[test]
    fn ratatui_mirror_follows_the_highlight() {
        let rows = source(5);
        let mut dd = DropdownState::default();
        dd.select_first_row(&rows);
        assert_eq!(dd.ratatui_state.selected(), Some(0));
        dd.next_item(&rows);
        assert_eq!(dd.ratatui_state.selected(), Some(1));
        dd.reset_selected();
        assert_eq!(dd.ratatui_state.selected(), None);
    }

    #[test]
    fn window_follows_downward_navigation() {
        let rows = source(10);
        let mut dd = small_window();
        dd.select_first_row(&rows);
        for _ in 0..4 {
            dd.next_item(&rows);
        }
        assert_eq!(dd.selected(), Some(4));
        assert_eq!(dd.visible_range(&rows), 2..5);
        dd.set_current_selected(&rows, 0, false);
        assert_eq!(dd.visible_range(&rows), 0..3);
    }

    #[test]
    fn committed_selection_survives_a_rebuild() {
        let mut rows = source(6);
        let mut dd = small_window();
        dd.set_current_selected(&rows, 4, true);
        dd.reset_selected();
        rows.replace(
            (0..8)
                .map(|i| CandidateRow::item(i, format!("row{i}")))
                .collect(),
        );
        dd.resolve(&rows);
        assert_eq!(dd.selected(), Some(4));
        assert_eq!(dd.ratatui_state.selected(), Some(4));
        // Row 4 is visible again after the restore.
        assert!(dd.visible_range(&rows).contains(&4));
    }

    #[test]
    fn resolve_on_empty_rebuild_clears_state() {
        let mut rows = source(4);
        let mut dd = small_window();
        dd.set_current_selected(&rows, 3, true);
        rows.replace(Vec::new());
        dd.resolve(&rows);
        assert_eq!(dd.selected(), None);
        assert_eq!(dd.ratatui_state.selected(), None);
        assert_eq!(dd.offset(), 0);
        assert!(dd.visible_range(&rows).is_empty());
    }

    #[test]
    fn cell_access_out_of_range_yields_none() {
        let rows = source(3);
        let dd = DropdownState::default();
        assert!(dd.cell(&rows, 2).is_some());
        assert!(dd.cell(&rows, 3).is_none());
        assert!(dd.selected_cell(&rows).is_none());
    }

    #[test]
    fn selected_cell_returns_the_highlighted_row() {
        let rows = source(3);
        let mut dd = DropdownState::default();
        dd.set_current_selected(&rows, 1, true);
        let cell = dd.selected_cell(&rows).unwrap();
        assert_eq!(cell.id, 1);
    }
}
