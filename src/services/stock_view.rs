//! Filtered, paginated stock views.
//!
//! `evaluate` is a pure function over a snapshot: the presentation layer
//! builds a fresh [`FilterState`] on every control change and calls it again.
//! There is no hidden cross-call state.

use chrono::NaiveDate;
use tracing::debug;

use crate::models::filter::FilterState;
use crate::models::status::{ExpiryPolicy, StatusCounts};
use crate::models::stock_record::StockRecord;
use crate::models::view::ViewResult;

/// Records expired more than this many days ago are archived out of default
/// views; an explicit date range overrides the rule.
pub const ARCHIVE_WINDOW_DAYS: i64 = 30;

/// Produces the filtered, counted, sorted, paginated view of a snapshot.
///
/// Filter order: search text, archive rule, stores, location names, status
/// classes, date range. Counts are taken over the fully filtered set, then
/// the set is stably sorted by expiration date and the requested page cut
/// out, with `page` clamped into `[1, total_pages]`.
pub fn evaluate(
    records: &[StockRecord],
    filter: &FilterState,
    reference_date: NaiveDate,
    policy: ExpiryPolicy,
) -> ViewResult {
    let search = filter
        .search_text
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    let mut filtered: Vec<&StockRecord> = records
        .iter()
        .filter(|r| match &search {
            Some(needle) => matches_search(r, needle),
            None => true,
        })
        .filter(|r| {
            // Archive rule only applies without an explicit date range.
            filter.has_date_range()
                || r.days_remaining(reference_date) >= -ARCHIVE_WINDOW_DAYS
        })
        .filter(|r| filter.store_ids.is_empty() || filter.store_ids.contains(&r.store_id))
        .filter(|r| {
            filter.location_names.is_empty()
                || filter
                    .location_names
                    .contains(r.location_name.as_deref().unwrap_or(""))
        })
        .filter(|r| {
            filter.status_classes.is_empty()
                || filter
                    .status_classes
                    .contains(&r.status(reference_date, policy))
        })
        .filter(|r| match filter.date_range_start {
            Some(start) => r.expiration_date >= start,
            None => true,
        })
        .filter(|r| match filter.date_range_end {
            Some(end) => r.expiration_date <= end,
            None => true,
        })
        .collect();

    let mut counts = StatusCounts::default();
    for record in &filtered {
        counts.bump(record.status(reference_date, policy));
    }

    // Stable: ties keep snapshot order.
    filtered.sort_by_key(|r| r.expiration_date);

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(filter.page_size).max(1);
    let page = filter.page.clamp(1, total_pages);

    let start_index = (page - 1) * filter.page_size;
    let end_index = (start_index + filter.page_size).min(total_items);

    let items: Vec<StockRecord> = filtered[start_index..end_index]
        .iter()
        .map(|r| (*r).clone())
        .collect();

    debug!(
        total_items,
        page, total_pages, "evaluated stock view"
    );

    ViewResult {
        items,
        total_items,
        counts,
        page,
        total_pages,
        start_index,
        end_index,
    }
}

fn matches_search(record: &StockRecord, needle: &str) -> bool {
    let hit = |field: Option<&str>| {
        field
            .map(|v| v.to_lowercase().contains(needle))
            .unwrap_or(false)
    };
    hit(Some(&record.product_description))
        || hit(record.product_code.as_deref())
        || hit(record.batch_code.as_deref())
}
