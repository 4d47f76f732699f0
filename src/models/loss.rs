use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded stock loss (expired, damaged, discarded product).
///
/// Losses are write-once: recording one decrements or removes the source
/// stock record, and the loss row itself is never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossRecord {
    pub id: Uuid,
    pub company_id: Uuid,
    pub stock_id: Uuid,
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub location_id: Option<Uuid>,
    pub quantity: i32,
    /// `unit_value * quantity` at recording time.
    pub loss_value: Decimal,
    pub reason: String,
    pub note: Option<String>,
    pub recorded_by: Uuid,
    pub recorded_at: DateTime<Utc>,
}
