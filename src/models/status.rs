use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Expiration status of a stock record relative to a reference date.
///
/// Always derived from `(expiration_date, reference_date)` at evaluation
/// time, never persisted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusClass {
    Expired,
    Critical,
    Warning,
    Ok,
}

/// Named day-threshold scale mapping days-remaining to a [`StatusClass`].
///
/// The dashboard and the stock list ship different thresholds. Both scales
/// are preserved as-is; callers pick one explicitly and the engine never
/// guesses. Whether the divergence is intentional is an open product
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryPolicy {
    /// Dashboard KPI scale: critical up to 3 days out, warning up to 7.
    DashboardSummary,
    /// Stock list scale: critical up to 5 days out, warning up to 14.
    StockList,
}

impl ExpiryPolicy {
    /// Upper bounds (inclusive) of the critical and warning bands.
    pub fn thresholds(self) -> (i64, i64) {
        match self {
            ExpiryPolicy::DashboardSummary => (3, 7),
            ExpiryPolicy::StockList => (5, 14),
        }
    }
}

/// Per-status record counts for a filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub expired: usize,
    pub critical: usize,
    pub warning: usize,
    pub ok: usize,
}

impl StatusCounts {
    pub fn bump(&mut self, status: StatusClass) {
        match status {
            StatusClass::Expired => self.expired += 1,
            StatusClass::Critical => self.critical += 1,
            StatusClass::Warning => self.warning += 1,
            StatusClass::Ok => self.ok += 1,
        }
    }

    pub fn get(&self, status: StatusClass) -> usize {
        match status {
            StatusClass::Expired => self.expired,
            StatusClass::Critical => self.critical,
            StatusClass::Warning => self.warning,
            StatusClass::Ok => self.ok,
        }
    }

    pub fn total(&self) -> usize {
        self.expired + self.critical + self.warning + self.ok
    }
}
