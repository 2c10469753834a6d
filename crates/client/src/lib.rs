//! Client-side data access for ERP dashboards.
//!
//! Screens never reach for an ambient token or inline sample data: they get
//! a [`ClientConfig`](config::ClientConfig) and a
//! [`DataSource`](source::DataSource) chosen from it, either the remote REST
//! API or a local fixture file.

pub mod config;
pub mod drafts;
pub mod error;
pub mod source;
