//! Selection tracking for the dropdown list.
//!
//! [`SelectionTracker`] is a plain state value object: it holds the
//! transient highlight and the committed selection, and mutates them
//! against whatever row list the host currently shows. It keeps no
//! reference to the rows themselves; every operation reads bounds and
//! selectability through the [`RowSource`] seam.

use crate::config::BoundaryPolicy;
use crate::row::RowSource;

/// Direction of the most recent selection movement.
///
/// Used by the viewport to decide which edge of the visible window a row is
/// revealed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Up,
}

/// Tracks which row of an externally owned list is highlighted.
///
/// Two indices are kept: the transient highlight (`last_selected`, cleared
/// whenever the candidate list is about to change) and the committed
/// selection (`last_saved_selected`, written by
/// [`set_current_selected`](Self::set_current_selected) and used by
/// [`resolve`](Self::resolve) to restore the highlight after a rebuild).
/// `None` is the "no selection" sentinel for both.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    last_selected: Option<usize>,
    last_saved_selected: Option<usize>,
    direction: Direction,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row currently highlighted, or `None` when nothing is selected.
    pub fn selected(&self) -> Option<usize> {
        self.last_selected
    }

    /// Most recently committed selection, kept across list rebuilds.
    pub fn saved_selected(&self) -> Option<usize> {
        self.last_saved_selected
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves the highlight one selectable row toward the end of the list,
    /// skipping category headers. From the sentinel, selects the first
    /// selectable row. On the last selectable row, `Clamp` keeps the
    /// highlight in place and `Wrap` continues from the top.
    pub fn next_item(&mut self, source: &dyn RowSource, boundary: BoundaryPolicy) {
        self.direction = Direction::Down;
        self.last_selected = match self.last_selected {
            None => first_selectable(source),
            Some(cur) => match selectable_at_or_after(source, cur + 1) {
                Some(row) => Some(row),
                None => match boundary {
                    BoundaryPolicy::Clamp => Some(cur),
                    BoundaryPolicy::Wrap => first_selectable(source).or(Some(cur)),
                },
            },
        };
    }

    /// Symmetric to [`next_item`](Self::next_item), toward index 0.
    pub fn previous_item(&mut self, source: &dyn RowSource, boundary: BoundaryPolicy) {
        self.direction = Direction::Up;
        self.last_selected = match self.last_selected {
            None => first_selectable(source),
            Some(cur) => {
                let before = cur
                    .checked_sub(1)
                    .and_then(|row| selectable_at_or_before(source, row));
                match before {
                    Some(row) => Some(row),
                    None => match boundary {
                        BoundaryPolicy::Clamp => Some(cur),
                        BoundaryPolicy::Wrap => last_selectable(source).or(Some(cur)),
                    },
                }
            }
        };
    }

    /// Highlights the first selectable row, or the sentinel when the list
    /// is empty or holds only category headers.
    pub fn select_first_row(&mut self, source: &dyn RowSource) {
        self.direction = Direction::Down;
        self.last_selected = first_selectable(source);
    }

    /// Sets the highlight to `index` and commits it. `is_next` records the
    /// movement direction that led here, so the viewport reveals the row at
    /// the matching window edge. Out-of-range indices and category rows
    /// leave both the highlight and the committed selection untouched.
    pub fn set_current_selected(&mut self, source: &dyn RowSource, index: usize, is_next: bool) {
        self.direction = if is_next {
            Direction::Down
        } else {
            Direction::Up
        };
        if source.is_selectable(index) {
            self.last_selected = Some(index);
            self.last_saved_selected = Some(index);
        }
    }

    /// Clears the highlight back to the sentinel. The committed selection
    /// survives so [`resolve`](Self::resolve) can restore it after the
    /// candidate list is rebuilt.
    pub fn reset_selected(&mut self) {
        self.last_selected = None;
    }

    /// Re-validates both indices against a rebuilt row list.
    ///
    /// A committed index the new list no longer covers is discarded. A
    /// reset highlight is re-seeded from the committed selection; an
    /// out-of-range highlight is clamped and then snapped to the nearest
    /// selectable row (preferring the one above). An empty list clears
    /// everything.
    pub fn resolve(&mut self, source: &dyn RowSource) {
        let count = source.row_count();
        if count == 0 {
            self.last_selected = None;
            self.last_saved_selected = None;
            return;
        }

        if let Some(saved) = self.last_saved_selected
            && !source.is_selectable(saved)
        {
            self.last_saved_selected = None;
        }

        let candidate = self.last_selected.or(self.last_saved_selected);
        self.last_selected = candidate.and_then(|row| {
            let row = row.min(count - 1);
            selectable_at_or_before(source, row)
                .or_else(|| selectable_at_or_after(source, row + 1))
        });
    }
}

/// First selectable row, scanning from the top.
fn first_selectable(source: &dyn RowSource) -> Option<usize> {
    selectable_at_or_after(source, 0)
}

/// Last selectable row, scanning from the bottom.
fn last_selectable(source: &dyn RowSource) -> Option<usize> {
    selectable_at_or_before(source, source.row_count().saturating_sub(1))
}

fn selectable_at_or_after(source: &dyn RowSource, from: usize) -> Option<usize> {
    (from..source.row_count()).find(|&row| source.is_selectable(row))
}

fn selectable_at_or_before(source: &dyn RowSource, from: usize) -> Option<usize> {
    let count = source.row_count();
    if count == 0 {
        return None;
    }
    (0..=from.min(count - 1))
        .rev()
        .find(|&row| source.is_selectable(row))
}
