//! Candidate row model and the host-table seam.
//!
//! The dropdown never owns the rows it navigates. The host table control
//! keeps the ordered candidate list and exposes it through [`RowSource`];
//! selection state only reads counts and per-row cells through that trait.

use serde::{Deserialize, Serialize};

/// Content of a single dropdown row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowContent {
    /// Selectable autocomplete candidate.
    Item {
        /// Text inserted into the input field when the candidate is confirmed.
        text: String,
        /// Secondary label shown next to the text (project, client, ...).
        description: Option<String>,
    },
    /// Group header ("Time Entries", "Projects", ...). Never selectable.
    Category(String),
}

impl RowContent {
    /// Returns true when the highlight may land on this row.
    pub fn is_selectable(&self) -> bool {
        matches!(self, RowContent::Item { .. })
    }
}

/// One display row of the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRow {
    /// Identifier stable across list rebuilds.
    pub id: u64,
    pub content: RowContent,
}

impl CandidateRow {
    /// Creates a selectable candidate row without a description.
    pub fn item(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            content: RowContent::Item {
                text: text.into(),
                description: None,
            },
        }
    }

    /// Creates a non-selectable group header row.
    pub fn category(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            content: RowContent::Category(label.into()),
        }
    }
}

/// Host table/list control boundary.
///
/// Supplies the row count and the row-to-cell mapping. Object-safe so hosts
/// can hand the dropdown a `&dyn RowSource` regardless of how they store
/// candidates.
pub trait RowSource {
    /// Number of rows currently displayed.
    fn row_count(&self) -> usize;

    /// Returns the display cell at `index`, or `None` when out of bounds.
    fn row(&self, index: usize) -> Option<&CandidateRow>;

    /// Returns true when the row at `index` exists and can be highlighted.
    fn is_selectable(&self, index: usize) -> bool {
        self.row(index)
            .map(|r| r.content.is_selectable())
            .unwrap_or(false)
    }
}

/// In-memory row source backed by a `Vec`.
///
/// Covers hosts that materialize the candidate list per keystroke; also the
/// row source used throughout the tests.
#[derive(Debug, Clone, Default)]
pub struct VecSource {
    rows: Vec<CandidateRow>,
}

impl VecSource {
    pub fn new(rows: Vec<CandidateRow>) -> Self {
        Self { rows }
    }

    /// Replaces the candidate list. The caller is expected to resolve the
    /// dropdown selection against the new rows afterwards.
    pub fn replace(&mut self, rows: Vec<CandidateRow>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[CandidateRow] {
        &self.rows
    }
}

impl RowSource for VecSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Option<&CandidateRow> {
        self.rows.get(index)
    }
}
