//! Permission codes gating mutation actions.
//!
//! Codes are `resource.action` strings as stored in the permission tables;
//! the constants exist for compile-time safety at call sites.

/// Wildcard granted to admin roles; matches every code.
pub const WILDCARD: &str = "*";

/// Permission string constants, grouped by resource.
pub mod codes {
    // Collected stock
    pub const STOCK_VIEW: &str = "coletado.view";
    pub const STOCK_EDIT_VALIDITY: &str = "coletado.edit_validity";
    pub const STOCK_DELETE: &str = "coletado.delete";

    // Product catalog
    pub const CATALOG_VIEW: &str = "base.view";
    pub const CATALOG_EDIT: &str = "base.edit";
    pub const CATALOG_DELETE: &str = "base.delete";

    // Stores and stock locations
    pub const STORE_VIEW: &str = "loja.view";
    pub const STORE_DELETE: &str = "loja.delete";
    pub const LOCATION_VIEW: &str = "local.view";
    pub const LOCATION_DELETE: &str = "local.delete";

    // Staff administration
    pub const USER_VIEW: &str = "usuario.view";
    pub const ROLE_VIEW: &str = "role.view";
}
