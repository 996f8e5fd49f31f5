//! Dropdown configuration.

use serde::{Deserialize, Serialize};

/// Edge behavior for item navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Stay on the edge row when navigating past it (default).
    #[default]
    Clamp,
    /// Continue from the opposite edge.
    Wrap,
}

/// Configuration for one dropdown instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Maximum number of rows visible at once.
    pub max_visible: usize,
    /// Edge behavior for `next_item`/`previous_item`.
    pub boundary: BoundaryPolicy,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            max_visible: 10,
            boundary: BoundaryPolicy::Clamp,
        }
    }
}

impl DropdownConfig {
    /// Normalizes degenerate values. A window shorter than one row could
    /// never show the highlight, so `max_visible` is raised to 1.
    pub fn normalized(mut self) -> Self {
        if self.max_visible == 0 {
            self.max_visible = 1;
        }
        self
    }
}
