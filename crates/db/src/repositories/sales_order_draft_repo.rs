//! Repository for the `sales_order_drafts` table.
//!
//! Every statement is scoped by `user_id`, so a draft is only ever visible
//! to its owner. A draft owned by someone else looks exactly like one that
//! does not exist.

use erp_core::draft::DraftPayload;
use erp_core::types::DbId;
use sqlx::PgPool;

use crate::models::sales_order_draft::{SalesOrderDraft, SalesOrderDraftRow};

/// Column list for `sales_order_drafts` queries.
const COLUMNS: &str = "\
    id, user_id, form_data, current_step, po_documents, \
    last_saved, created_at, updated_at";

/// Provides data access for sales-order drafts.
pub struct SalesOrderDraftRepo;

impl SalesOrderDraftRepo {
    /// The user's most recently updated draft, if any.
    pub async fn find_latest(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SalesOrderDraft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sales_order_drafts \
             WHERE user_id = $1 \
             ORDER BY updated_at DESC, id DESC \
             LIMIT 1"
        );
        let row = sqlx::query_as::<_, SalesOrderDraftRow>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SalesOrderDraft::from))
    }

    /// Find a draft by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<SalesOrderDraft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sales_order_drafts \
             WHERE id = $1 AND user_id = $2"
        );
        let row = sqlx::query_as::<_, SalesOrderDraftRow>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(SalesOrderDraft::from))
    }

    /// Insert a new draft, applying payload defaults. Returns the new id.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        payload: &DraftPayload,
    ) -> Result<DbId, sqlx::Error> {
        let draft = payload.normalized();
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO sales_order_drafts \
                 (user_id, form_data, current_step, po_documents, last_saved) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING id",
        )
        .bind(user_id)
        .bind(draft.form_data_text())
        .bind(draft.current_step)
        .bind(draft.po_documents_text())
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// Overwrite all mutable fields of a draft.
    ///
    /// Omitted payload fields are written as their defaults, not left
    /// unchanged. Returns `true` if a row owned by `user_id` was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        payload: &DraftPayload,
    ) -> Result<bool, sqlx::Error> {
        let draft = payload.normalized();
        let result = sqlx::query(
            "UPDATE sales_order_drafts SET \
                 form_data    = $3, \
                 current_step = $4, \
                 po_documents = $5, \
                 last_saved   = NOW(), \
                 updated_at   = NOW() \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(draft.form_data_text())
        .bind(draft.current_step)
        .bind(draft.po_documents_text())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a draft scoped to its owner.
    ///
    /// Returns `true` if a row was deleted; deleting nothing is not an error.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sales_order_drafts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
