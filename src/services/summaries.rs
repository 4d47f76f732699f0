//! Dashboard aggregations over a stock snapshot.
//!
//! All functions are pure; grouping preserves first-seen order so that
//! equal-count ties render deterministically.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::loss::LossRecord;
use crate::models::status::{ExpiryPolicy, StatusClass};
use crate::models::stock_record::StockRecord;

/// Bucket label for records without a category.
pub const FALLBACK_CATEGORY: &str = "Outros";
/// Display name for records whose store join is missing.
pub const FALLBACK_STORE_NAME: &str = "Desconhecida";

/// Chart variant keeps the six largest categories, summary list five.
const CATEGORY_CHART_LIMIT: usize = 6;
const CATEGORY_SUMMARY_LIMIT: usize = 5;
/// Alert feed length on the dashboard.
const ALERT_LIMIT: usize = 10;
/// Months covered by the expiration and loss charts.
const MONTH_SPAN: u32 = 6;
/// Flat per-item estimate (R$) for losses avoided by selling in time.
const AVOIDED_LOSS_PER_ITEM: i64 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Category breakdown of records expiring inside the window, expired
/// records excluded: `reference <= expiration <= reference + window_days`.
/// Feeds the category chart; truncated to the top six.
pub fn upcoming_by_category_within(
    records: &[StockRecord],
    reference_date: NaiveDate,
    window_days: i64,
) -> Vec<CategoryCount> {
    let counts = group_by_category(records.iter().filter(|r| {
        let days = r.days_remaining(reference_date);
        (0..=window_days).contains(&days)
    }));
    top_categories(counts, CATEGORY_CHART_LIMIT)
}

/// Category breakdown of everything expiring before the window's end,
/// already-expired records included: `expiration < reference + window_days`.
/// Feeds the category summary list; truncated to the top five.
pub fn upcoming_by_category_before(
    records: &[StockRecord],
    reference_date: NaiveDate,
    window_days: i64,
) -> Vec<CategoryCount> {
    let counts = group_by_category(
        records
            .iter()
            .filter(|r| r.days_remaining(reference_date) < window_days),
    );
    top_categories(counts, CATEGORY_SUMMARY_LIMIT)
}

fn group_by_category<'a>(records: impl Iterator<Item = &'a StockRecord>) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for record in records {
        let category = record
            .product_category
            .as_deref()
            .unwrap_or(FALLBACK_CATEGORY);
        match counts.iter().position(|c| c.category == category) {
            Some(idx) => counts[idx].count += 1,
            None => counts.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }
    counts
}

fn top_categories(mut counts: Vec<CategoryCount>, limit: usize) -> Vec<CategoryCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Per-store expiration situation, worst store first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub store_id: Uuid,
    pub store_name: String,
    pub total: usize,
    pub expired_count: usize,
    /// `round(100 * (total - expired) / total)`; 100 for an empty store.
    pub fulfillment_rate: u8,
}

/// Groups the whole snapshot by store (no expiration window) and sorts
/// descending by expired count.
pub fn store_breakdown(records: &[StockRecord], reference_date: NaiveDate) -> Vec<StoreSummary> {
    let mut stores: Vec<StoreSummary> = Vec::new();
    for record in records {
        let idx = match stores.iter().position(|s| s.store_id == record.store_id) {
            Some(idx) => idx,
            None => {
                stores.push(StoreSummary {
                    store_id: record.store_id,
                    store_name: if record.store_name.is_empty() {
                        FALLBACK_STORE_NAME.to_string()
                    } else {
                        record.store_name.clone()
                    },
                    total: 0,
                    expired_count: 0,
                    fulfillment_rate: 100,
                });
                stores.len() - 1
            }
        };
        let summary = &mut stores[idx];
        summary.total += 1;
        if record.expiration_date < reference_date {
            summary.expired_count += 1;
        }
    }

    for summary in &mut stores {
        summary.fulfillment_rate = rate(summary.total - summary.expired_count, summary.total, 100);
    }

    stores.sort_by(|a, b| b.expired_count.cmp(&a.expired_count));
    stores
}

/// One calendar month of the expiration chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    /// Uppercase Portuguese month abbreviation, as the dashboard renders it.
    pub label: String,
    pub count: usize,
}

const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

/// Counts expirations in each of the six calendar months starting at the
/// reference month.
pub fn expirations_by_month(records: &[StockRecord], reference_date: NaiveDate) -> Vec<MonthBucket> {
    let base = month_start(reference_date);
    (0..MONTH_SPAN)
        .map(|offset| {
            let start = base + Months::new(offset);
            let end = start + Months::new(1);
            let count = records
                .iter()
                .filter(|r| r.expiration_date >= start && r.expiration_date < end)
                .count();
            MonthBucket {
                year: start.year(),
                month: start.month(),
                label: MONTH_LABELS[start.month0() as usize].to_string(),
                count,
            }
        })
        .collect()
}

/// An entry in the urgent-attention feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    pub record: StockRecord,
    pub status: StatusClass,
    pub days_remaining: i64,
}

/// The ten most urgent records under the dashboard policy: expired first,
/// then critical, then warning, each group in snapshot order.
pub fn urgent_alerts(records: &[StockRecord], reference_date: NaiveDate) -> Vec<AlertEntry> {
    let mut alerts = Vec::new();
    for wanted in [StatusClass::Expired, StatusClass::Critical, StatusClass::Warning] {
        for record in records {
            if record.status(reference_date, ExpiryPolicy::DashboardSummary) == wanted {
                alerts.push(AlertEntry {
                    record: record.clone(),
                    status: wanted,
                    days_remaining: record.days_remaining(reference_date),
                });
            }
        }
    }
    alerts.truncate(ALERT_LIMIT);
    alerts
}

/// Month-level KPIs shown beside the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    pub total_collected: usize,
    /// `round(100 * ok / total)` under the dashboard policy; 0 when empty.
    pub utilization_rate: u8,
    /// Flat estimate of losses avoided by items still comfortably in date.
    pub estimated_avoided_loss: Decimal,
}

pub fn monthly_overview(records: &[StockRecord], reference_date: NaiveDate) -> MonthlyOverview {
    let total = records.len();
    let ok_count = records
        .iter()
        .filter(|r| r.status(reference_date, ExpiryPolicy::DashboardSummary) == StatusClass::Ok)
        .count();
    MonthlyOverview {
        total_collected: total,
        utilization_rate: rate(ok_count, total, 0),
        estimated_avoided_loss: Decimal::from(ok_count as i64 * AVOIDED_LOSS_PER_ITEM),
    }
}

/// One month of summed loss value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossMonth {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub total: Decimal,
}

/// Loss totals for the six months ending at the reference month, oldest
/// first (the loss trend chart).
pub fn monthly_loss_totals(losses: &[LossRecord], reference_date: NaiveDate) -> Vec<LossMonth> {
    let base = month_start(reference_date);
    (0..MONTH_SPAN)
        .rev()
        .map(|back| {
            let start = base - Months::new(back);
            let end = start + Months::new(1);
            let total = losses
                .iter()
                .filter(|l| {
                    let day = l.recorded_at.date_naive();
                    day >= start && day < end
                })
                .map(|l| l.loss_value)
                .sum();
            LossMonth {
                year: start.year(),
                month: start.month(),
                label: MONTH_LABELS[start.month0() as usize].to_string(),
                total,
            }
        })
        .collect()
}

/// Summed loss value since the start of the reference month (the losses KPI).
pub fn current_month_loss_total(losses: &[LossRecord], reference_date: NaiveDate) -> Decimal {
    let start = month_start(reference_date);
    losses
        .iter()
        .filter(|l| l.recorded_at.date_naive() >= start)
        .map(|l| l.loss_value)
        .sum()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid")
}

fn rate(numerator: usize, denominator: usize, when_empty: u8) -> u8 {
    if denominator == 0 {
        when_empty
    } else {
        (100.0 * numerator as f64 / denominator as f64).round() as u8
    }
}
