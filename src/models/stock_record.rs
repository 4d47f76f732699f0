use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::{ExpiryPolicy, StatusClass};
use crate::services::classifier;

/// A collected stock batch as the data layer hands it to the engine.
///
/// Records arrive denormalized: the product, store, and location display
/// fields are already joined in. The engine treats the whole record as a
/// read-only snapshot row; mutations go through the snapshot store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: Uuid,
    pub company_id: Uuid,
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub location_id: Option<Uuid>,
    pub quantity: i32,
    /// Unit value at collection time, used for loss valuation.
    pub unit_value: Option<Decimal>,
    pub expiration_date: NaiveDate,
    pub batch_code: Option<String>,
    pub created_by: Option<Uuid>,

    // Denormalized display fields joined in by the data layer.
    pub product_description: String,
    pub product_code: Option<String>,
    pub product_category: Option<String>,
    pub store_name: String,
    pub location_name: Option<String>,
}

impl StockRecord {
    /// Calendar days until expiration; negative once expired.
    pub fn days_remaining(&self, reference_date: NaiveDate) -> i64 {
        classifier::days_remaining(self.expiration_date, reference_date)
    }

    pub fn status(&self, reference_date: NaiveDate, policy: ExpiryPolicy) -> StatusClass {
        classifier::classify(self.expiration_date, reference_date, policy)
    }
}
