//! Application configuration constants
//!
//! Central location for the fixed names and defaults used throughout the
//! crate.

/// Key the whole document is stored under in the document store
pub const DOCUMENT_KEY: &str = "appData";

/// Name given to a freshly created dish template
pub const DEFAULT_TEMPLATE_NAME: &str = "New dish";

/// Prefix for auto-generated order names ("Order 1", "Order 2", ...)
pub const ORDER_NAME_PREFIX: &str = "Order";
