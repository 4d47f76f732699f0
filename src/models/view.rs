use serde::{Deserialize, Serialize};

use crate::models::status::StatusCounts;
use crate::models::stock_record::StockRecord;

/// Result of one `evaluate` pass: the requested page plus the aggregates the
/// dashboard renders around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewResult {
    /// Records on the requested page, sorted by expiration date ascending.
    pub items: Vec<StockRecord>,
    /// Count of records matching all active filters, across all pages.
    pub total_items: usize,
    /// Per-status counts over the fully filtered set. Sums to `total_items`;
    /// reflects the status filter itself when one is active.
    pub counts: StatusCounts,
    /// Page actually served, after clamping into `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
    /// Zero-based offset of the first item on the page.
    pub start_index: usize,
    /// Zero-based offset one past the last item on the page.
    pub end_index: usize,
}

impl ViewResult {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Human-oriented "showing X-Y of Z" bounds; 1-based, both inclusive.
    pub fn display_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            (0, 0)
        } else {
            (self.start_index + 1, self.end_index)
        }
    }
}
