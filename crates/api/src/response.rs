//! Response bodies for the draft endpoints.
//!
//! The frontend reads drafts from a `{ "draft": ... }` envelope and write
//! acknowledgements from `{ "message": ... }`, so these are typed here
//! rather than built ad hoc with `serde_json::json!`.

use erp_core::draft::SalesOrderDraft;
use erp_core::types::DbId;
use serde::Serialize;

/// `{ "draft": ... }` envelope for draft reads.
#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: SalesOrderDraft,
}

/// `{ "id": ..., "message": ... }` returned after a create.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// `{ "message": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
