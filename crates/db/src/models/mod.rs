//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! the decoded, `Serialize` entity handed to callers.

pub mod sales_order_draft;
