//! Day-granularity expiration classification.
//!
//! All arithmetic is plain calendar-date subtraction, so daylight-saving
//! shifts can never produce an off-by-one. The reference date is normalized
//! by the caller (one reference per evaluation pass).

use chrono::NaiveDate;

use crate::models::status::{ExpiryPolicy, StatusClass};

/// Calendar days between the reference date and the expiration date.
/// Negative once the record is expired; zero on the expiration day itself.
pub fn days_remaining(expiration_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    (expiration_date - reference_date).num_days()
}

/// Buckets an expiration date into a [`StatusClass`] under the given policy.
pub fn classify(
    expiration_date: NaiveDate,
    reference_date: NaiveDate,
    policy: ExpiryPolicy,
) -> StatusClass {
    classify_days(days_remaining(expiration_date, reference_date), policy)
}

/// Same as [`classify`], starting from a precomputed day difference.
pub fn classify_days(days: i64, policy: ExpiryPolicy) -> StatusClass {
    if days < 0 {
        return StatusClass::Expired;
    }
    let (critical_max, warning_max) = policy.thresholds();
    if days <= critical_max {
        StatusClass::Critical
    } else if days <= warning_max {
        StatusClass::Warning
    } else {
        StatusClass::Ok
    }
}

/// Human-readable expiry label as printed on badges and exports.
pub fn expiry_label(days: i64) -> String {
    match days {
        d if d < 0 => "VENCIDO".to_string(),
        0 => "VENCE HOJE".to_string(),
        1 => "VENCE EM 1 DIA".to_string(),
        d => format!("VENCE EM {} DIAS", d),
    }
}
