//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod sales_order_draft_repo;

pub use sales_order_draft_repo::SalesOrderDraftRepo;
