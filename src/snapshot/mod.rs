//! Snapshot access: the interface the engine consumes, plus an in-memory
//! backend used for demos and tests.

pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::UserContext;
use crate::errors::ServiceError;
use crate::models::stock_record::StockRecord;

/// Tenant visibility for a snapshot fetch: one company, optionally narrowed
/// to specific stores (`None` = every store of the company).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyScope {
    pub company_id: Uuid,
    pub store_ids: Option<Vec<Uuid>>,
}

impl CompanyScope {
    pub fn all_stores(company_id: Uuid) -> Self {
        Self {
            company_id,
            store_ids: None,
        }
    }

    /// Scope derived from a session user: admins see every store, restricted
    /// users only their linked ones.
    pub fn for_user(user: &UserContext) -> Self {
        Self {
            company_id: user.company_id,
            store_ids: if user.is_admin() {
                None
            } else {
                user.store_scope.clone()
            },
        }
    }

    pub fn allows_store(&self, store_id: Uuid) -> bool {
        match &self.store_ids {
            Some(ids) => ids.contains(&store_id),
            None => true,
        }
    }
}

/// Source of denormalized stock snapshots.
///
/// The hosted backend fulfils this in production; [`memory`] provides the
/// offline stand-in. Fetch failures surface to the caller untouched — the
/// pure view engine has no retry policy.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Returns all stock records visible under the scope, ordered by
    /// expiration date ascending (ties in insertion order).
    async fn fetch_stock_snapshot(
        &self,
        scope: &CompanyScope,
    ) -> Result<Vec<StockRecord>, ServiceError>;
}
