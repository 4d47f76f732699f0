//! Session user context and permission checks.
//!
//! Authentication itself is external; this module only models the resolved
//! session data (tenant, permission set, store restriction) and answers
//! `has_permission` questions for the mutation services.

pub mod permissions;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Resolved session user: tenant scope plus effective permission codes.
///
/// The permission set is already flattened (role permissions plus direct
/// grants); admin roles carry the `*` wildcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub permissions: HashSet<String>,
    /// Stores this user may see. `None` means no restriction.
    pub store_scope: Option<Vec<Uuid>>,
}

impl UserContext {
    /// A user holding the admin wildcard and no store restriction.
    pub fn admin(id: Uuid, company_id: Uuid, name: impl Into<String>) -> Self {
        let mut permissions = HashSet::new();
        permissions.insert(permissions::WILDCARD.to_string());
        Self {
            id,
            company_id,
            name: name.into(),
            permissions,
            store_scope: None,
        }
    }

    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.contains(permissions::WILDCARD) || self.permissions.contains(code)
    }

    pub fn is_admin(&self) -> bool {
        self.permissions.contains(permissions::WILDCARD)
    }

    /// Errors with `Forbidden` unless the user holds `code`.
    pub fn require(&self, code: &str) -> Result<(), ServiceError> {
        if self.has_permission(code) {
            Ok(())
        } else {
            Err(ServiceError::Forbidden(format!(
                "user {} lacks permission {}",
                self.id, code
            )))
        }
    }
}
