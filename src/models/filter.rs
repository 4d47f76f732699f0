use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::StatusClass;

/// Default page size matching the stock list's items-per-page selector.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Filter and pagination parameters for one `evaluate` call.
///
/// Owned by the presentation layer and passed in fresh on every query; the
/// engine keeps no filter state between calls. Empty sets mean "no
/// restriction". `page_size` must be positive (caller contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub store_ids: HashSet<Uuid>,
    /// Matched against the location display name, not the id: locations are
    /// deduplicated by name across stores for filtering.
    #[serde(default)]
    pub location_names: HashSet<String>,
    #[serde(default)]
    pub status_classes: HashSet<StatusClass>,
    #[serde(default)]
    pub date_range_start: Option<NaiveDate>,
    #[serde(default)]
    pub date_range_end: Option<NaiveDate>,
    #[serde(default)]
    pub search_text: Option<String>,
    /// 1-based page index, clamped into range after filtering.
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            store_ids: HashSet::new(),
            location_names: HashSet::new(),
            status_classes: HashSet::new(),
            date_range_start: None,
            date_range_end: None,
            search_text: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl FilterState {
    /// True when at least one date bound is set, which disables the 30-day
    /// archive rule.
    pub fn has_date_range(&self) -> bool {
        self.date_range_start.is_some() || self.date_range_end.is_some()
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}
