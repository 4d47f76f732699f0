#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use datacerta::models::StockRecord;

/// Fixed reference date used across tests (a Tuesday, nothing special).
pub fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

/// Date at `days` offset from the reference.
pub fn days_from_ref(days: i64) -> NaiveDate {
    reference() + Duration::days(days)
}

/// Builder for snapshot records with sensible defaults.
pub struct StockBuilder {
    record: StockRecord,
}

impl StockBuilder {
    pub fn new(description: &str, expiration: NaiveDate) -> Self {
        Self {
            record: StockRecord {
                id: Uuid::new_v4(),
                company_id: company(),
                product_id: Uuid::new_v4(),
                store_id: store_a(),
                location_id: None,
                quantity: 1,
                unit_value: None,
                expiration_date: expiration,
                batch_code: None,
                created_by: None,
                product_description: description.to_string(),
                product_code: None,
                product_category: None,
                store_name: "Matriz - Centro".to_string(),
                location_name: None,
            },
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.record.id = id;
        self
    }

    pub fn company(mut self, company_id: Uuid) -> Self {
        self.record.company_id = company_id;
        self
    }

    pub fn store(mut self, store_id: Uuid, name: &str) -> Self {
        self.record.store_id = store_id;
        self.record.store_name = name.to_string();
        self
    }

    pub fn location(mut self, name: &str) -> Self {
        self.record.location_id = Some(Uuid::new_v4());
        self.record.location_name = Some(name.to_string());
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.record.quantity = quantity;
        self
    }

    pub fn unit_value(mut self, value: Decimal) -> Self {
        self.record.unit_value = Some(value);
        self
    }

    pub fn code(mut self, code: &str) -> Self {
        self.record.product_code = Some(code.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.record.product_category = Some(category.to_string());
        self
    }

    pub fn batch(mut self, batch: &str) -> Self {
        self.record.batch_code = Some(batch.to_string());
        self
    }

    pub fn build(self) -> StockRecord {
        self.record
    }
}

/// Shorthand for a one-liner record.
pub fn stock(description: &str, expiration: NaiveDate) -> StockRecord {
    StockBuilder::new(description, expiration).build()
}

pub fn company() -> Uuid {
    Uuid::from_u128(0x11111111_1111_1111_1111_111111111111)
}

pub fn store_a() -> Uuid {
    Uuid::from_u128(0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaaa)
}

pub fn store_b() -> Uuid {
    Uuid::from_u128(0xbbbbbbbb_bbbb_bbbb_bbbb_bbbbbbbbbbbb)
}
