//! Stock mutations: add/update/remove records and record losses.
//!
//! Every mutation is permission-gated against the session user and emits an
//! event. The read path (`fetch_snapshot`) only requires the view
//! permission; classification itself needs none.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::auth::{permissions::codes, UserContext};
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::loss::LossRecord;
use crate::models::stock_record::StockRecord;
use crate::snapshot::memory::InMemoryStockStore;
use crate::snapshot::{CompanyScope, SnapshotProvider};

/// Input for recording a loss against an existing stock record.
#[derive(Debug, Clone)]
pub struct LossInput {
    pub stock_id: Uuid,
    pub quantity: i32,
    pub reason: String,
    pub note: Option<String>,
}

/// Service for managing collected stock and losses.
#[derive(Clone)]
pub struct StockService {
    store: Arc<InMemoryStockStore>,
    event_sender: EventSender,
}

impl StockService {
    /// Creates a new stock service instance.
    pub fn new(store: Arc<InMemoryStockStore>, event_sender: EventSender) -> Self {
        Self {
            store,
            event_sender,
        }
    }

    /// Fetches the stock snapshot visible to the user.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn fetch_snapshot(
        &self,
        user: &UserContext,
    ) -> Result<Vec<StockRecord>, ServiceError> {
        user.require(codes::STOCK_VIEW)?;
        let scope = CompanyScope::for_user(user);
        self.store.fetch_stock_snapshot(&scope).await
    }

    /// Adds a stock record for the user's company.
    #[instrument(skip(self, user, record), fields(user_id = %user.id))]
    pub async fn add_stock(
        &self,
        user: &UserContext,
        record: StockRecord,
    ) -> Result<Uuid, ServiceError> {
        user.require(codes::STOCK_EDIT_VALIDITY)?;
        self.check_tenant(user, &record)?;
        if record.quantity < 0 {
            return Err(ServiceError::invalid_input("quantity must be non-negative"));
        }

        let product_id = record.product_id;
        let store_id = record.store_id;
        let quantity = record.quantity;
        let stock_id = self.store.insert(record);

        self.event_sender
            .send(Event::StockAdded {
                stock_id,
                product_id,
                store_id,
                quantity,
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(%stock_id, "stock record added");
        Ok(stock_id)
    }

    /// Replaces an existing stock record (edit quantity, validity, batch).
    #[instrument(skip(self, user, record), fields(user_id = %user.id, stock_id = %record.id))]
    pub async fn update_stock(
        &self,
        user: &UserContext,
        record: StockRecord,
    ) -> Result<(), ServiceError> {
        user.require(codes::STOCK_EDIT_VALIDITY)?;
        self.check_tenant(user, &record)?;
        if record.quantity < 0 {
            return Err(ServiceError::invalid_input("quantity must be non-negative"));
        }

        let stock_id = record.id;
        self.store.update(record)?;

        self.event_sender
            .send(Event::StockUpdated { stock_id })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(())
    }

    /// Deletes a stock record outright (no loss entry).
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn remove_stock(&self, user: &UserContext, stock_id: Uuid) -> Result<(), ServiceError> {
        user.require(codes::STOCK_DELETE)?;
        let existing = self
            .store
            .get(stock_id)
            .ok_or_else(|| ServiceError::not_found(format!("stock record {}", stock_id)))?;
        self.check_tenant(user, &existing)?;

        self.store.remove(stock_id)?;
        self.event_sender
            .send(Event::StockRemoved { stock_id })
            .await
            .map_err(ServiceError::EventError)?;
        Ok(())
    }

    /// Records a loss: values it at the record's unit value, stores the loss
    /// row, and decrements the stock record — removing it when the whole
    /// quantity is lost.
    #[instrument(skip(self, user, input), fields(user_id = %user.id, stock_id = %input.stock_id))]
    pub async fn record_loss(
        &self,
        user: &UserContext,
        input: LossInput,
    ) -> Result<LossRecord, ServiceError> {
        user.require(codes::STOCK_DELETE)?;

        let record = self
            .store
            .get(input.stock_id)
            .ok_or_else(|| ServiceError::not_found(format!("stock record {}", input.stock_id)))?;
        self.check_tenant(user, &record)?;

        if input.quantity <= 0 {
            return Err(ServiceError::invalid_input("loss quantity must be positive"));
        }
        if input.quantity > record.quantity {
            return Err(ServiceError::InsufficientStock(format!(
                "loss of {} exceeds available quantity {}",
                input.quantity, record.quantity
            )));
        }

        let unit_value = record.unit_value.unwrap_or(Decimal::ZERO);
        let loss = LossRecord {
            id: Uuid::new_v4(),
            company_id: record.company_id,
            stock_id: record.id,
            product_id: record.product_id,
            store_id: record.store_id,
            location_id: record.location_id,
            quantity: input.quantity,
            loss_value: unit_value * Decimal::from(input.quantity),
            reason: input.reason,
            note: input.note,
            recorded_by: user.id,
            recorded_at: Utc::now(),
        };

        self.store.insert_loss(loss.clone());
        self.store.decrement_quantity(record.id, input.quantity)?;

        self.event_sender
            .send(Event::LossRecorded {
                loss_id: loss.id,
                stock_id: loss.stock_id,
                quantity: loss.quantity,
                loss_value: loss.loss_value,
            })
            .await
            .map_err(ServiceError::EventError)?;

        info!(loss_id = %loss.id, "loss recorded");
        Ok(loss)
    }

    /// Losses of the user's company, oldest first.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn losses(&self, user: &UserContext) -> Result<Vec<LossRecord>, ServiceError> {
        user.require(codes::STOCK_VIEW)?;
        Ok(self.store.losses_for_company(user.company_id))
    }

    fn check_tenant(&self, user: &UserContext, record: &StockRecord) -> Result<(), ServiceError> {
        if record.company_id != user.company_id {
            return Err(ServiceError::forbidden(
                "record belongs to another company".to_string(),
            ));
        }
        if !CompanyScope::for_user(user).allows_store(record.store_id) {
            return Err(ServiceError::forbidden(
                "store outside the user's scope".to_string(),
            ));
        }
        Ok(())
    }
}
