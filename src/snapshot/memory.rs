//! In-memory stock store, shaped like the hosted table API.
//!
//! Used by the demo binary and the integration tests so the services can run
//! without the remote backend. Insertion order is tracked so snapshot
//! ordering stays deterministic across equal expiration dates.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::loss::LossRecord;
use crate::models::stock_record::StockRecord;
use crate::snapshot::{CompanyScope, SnapshotProvider};

#[derive(Debug, Clone)]
struct StoredRecord {
    record: StockRecord,
    seq: u64,
}

/// Concurrent in-memory stand-in for the stock and loss tables.
#[derive(Debug, Default)]
pub struct InMemoryStockStore {
    records: DashMap<Uuid, StoredRecord>,
    losses: DashMap<Uuid, LossRecord>,
    next_seq: AtomicU64,
}

impl InMemoryStockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, assigning a fresh id when the caller passes a nil
    /// one. Returns the stored id.
    pub fn insert(&self, mut record: StockRecord) -> Uuid {
        if record.id.is_nil() {
            record.id = Uuid::new_v4();
        }
        let id = record.id;
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.records.insert(id, StoredRecord { record, seq });
        id
    }

    pub fn get(&self, id: Uuid) -> Option<StockRecord> {
        self.records.get(&id).map(|e| e.record.clone())
    }

    /// Replaces an existing record in place, keeping its snapshot position.
    pub fn update(&self, record: StockRecord) -> Result<(), ServiceError> {
        match self.records.get_mut(&record.id) {
            Some(mut entry) => {
                entry.record = record;
                Ok(())
            }
            None => Err(ServiceError::not_found(format!(
                "stock record {}",
                record.id
            ))),
        }
    }

    pub fn remove(&self, id: Uuid) -> Result<StockRecord, ServiceError> {
        self.records
            .remove(&id)
            .map(|(_, e)| e.record)
            .ok_or_else(|| ServiceError::not_found(format!("stock record {}", id)))
    }

    /// Decrements a record's quantity, removing it when it reaches zero.
    pub fn decrement_quantity(&self, id: Uuid, by: i32) -> Result<(), ServiceError> {
        let remaining = {
            let mut entry = self
                .records
                .get_mut(&id)
                .ok_or_else(|| ServiceError::not_found(format!("stock record {}", id)))?;
            entry.record.quantity -= by;
            entry.record.quantity
        };
        if remaining <= 0 {
            self.records.remove(&id);
        }
        Ok(())
    }

    pub fn insert_loss(&self, loss: LossRecord) {
        self.losses.insert(loss.id, loss);
    }

    /// All losses of a company, ordered by recording time.
    pub fn losses_for_company(&self, company_id: Uuid) -> Vec<LossRecord> {
        let mut losses: Vec<LossRecord> = self
            .losses
            .iter()
            .filter(|e| e.company_id == company_id)
            .map(|e| e.value().clone())
            .collect();
        losses.sort_by_key(|l| l.recorded_at);
        losses
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SnapshotProvider for InMemoryStockStore {
    async fn fetch_stock_snapshot(
        &self,
        scope: &CompanyScope,
    ) -> Result<Vec<StockRecord>, ServiceError> {
        let mut entries: Vec<StoredRecord> = self
            .records
            .iter()
            .filter(|e| {
                e.record.company_id == scope.company_id && scope.allows_store(e.record.store_id)
            })
            .map(|e| e.value().clone())
            .collect();
        entries.sort_by_key(|e| (e.record.expiration_date, e.seq));
        Ok(entries.into_iter().map(|e| e.record).collect())
    }
}
