//! Sales-order draft models.
//!
//! The table stores form data and PO documents as JSON text; the row struct
//! keeps the raw text and converts into the decoded [`SalesOrderDraft`].

use erp_core::draft::{decode_json, empty_documents, empty_form_data, Decoded};
use erp_core::types::{DbId, Timestamp};
use serde_json::Value;
use sqlx::FromRow;

pub use erp_core::draft::SalesOrderDraft;

/// A row from the `sales_order_drafts` table, JSON columns undecoded.
#[derive(Debug, Clone, FromRow)]
pub struct SalesOrderDraftRow {
    pub id: DbId,
    pub user_id: DbId,
    pub form_data: String,
    pub current_step: i32,
    pub po_documents: Option<String>,
    pub last_saved: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SalesOrderDraftRow> for SalesOrderDraft {
    /// Empty or malformed JSON columns decode to `{}` / `[]`; corruption is
    /// logged, never returned.
    fn from(row: SalesOrderDraftRow) -> Self {
        let form_data = lenient(row.id, "form_data", Some(&row.form_data), empty_form_data);
        let po_documents = lenient(
            row.id,
            "po_documents",
            row.po_documents.as_deref(),
            empty_documents,
        );

        Self {
            id: row.id,
            user_id: row.user_id,
            form_data,
            current_step: row.current_step,
            po_documents,
            last_saved: row.last_saved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn lenient(draft_id: DbId, column: &str, text: Option<&str>, fallback: fn() -> Value) -> Value {
    match decode_json(text) {
        Decoded::Parsed(value) => value,
        Decoded::Absent => fallback(),
        Decoded::Malformed(error) => {
            tracing::warn!(draft_id, column, %error, "Malformed draft JSON, using default");
            fallback()
        }
    }
}
