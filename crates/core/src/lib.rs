//! Domain logic shared by the ERP backend and its clients.
//!
//! This crate has no I/O: it holds the id/timestamp aliases, the core error
//! taxonomy, the sortable data-table model and the draft payload rules.

pub mod draft;
pub mod error;
pub mod table;
pub mod types;
