//! Handlers for sales-order drafts.
//!
//! Every endpoint requires an authenticated user and scopes storage access
//! to that user's id. A draft belonging to another user is reported exactly
//! like a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use erp_core::draft::DraftPayload;
use erp_core::error::CoreError;
use erp_core::types::DbId;
use erp_db::repositories::SalesOrderDraftRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, DraftResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Draft";

/// GET /api/v1/sales/drafts/latest
///
/// The authenticated user's most recently updated draft.
pub async fn get_latest_draft(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let draft = SalesOrderDraftRepo::find_latest(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::Missing(ENTITY)))?;

    Ok(Json(DraftResponse { draft }))
}

/// GET /api/v1/sales/drafts/{id}
pub async fn get_draft(
    user: AuthUser,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let draft = SalesOrderDraftRepo::find_by_id(&state.pool, draft_id, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: draft_id,
        }))?;

    Ok(Json(DraftResponse { draft }))
}

/// POST /api/v1/sales/drafts
pub async fn create_draft(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DraftPayload>,
) -> AppResult<impl IntoResponse> {
    let id = SalesOrderDraftRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(draft_id = id, user_id = user.user_id, role = %user.role, "Draft created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Draft created successfully",
        }),
    ))
}

/// PUT/PATCH /api/v1/sales/drafts/{id}
///
/// Overwrites form data, step and documents; omitted fields are reset to
/// their defaults.
pub async fn update_draft(
    user: AuthUser,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
    Json(input): Json<DraftPayload>,
) -> AppResult<impl IntoResponse> {
    let updated =
        SalesOrderDraftRepo::update(&state.pool, draft_id, user.user_id, &input).await?;

    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: draft_id,
        }));
    }

    tracing::debug!(draft_id, user_id = user.user_id, "Draft autosaved");

    Ok(Json(MessageResponse {
        message: "Draft updated successfully",
    }))
}

/// DELETE /api/v1/sales/drafts/{id}
pub async fn delete_draft(
    user: AuthUser,
    State(state): State<AppState>,
    Path(draft_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SalesOrderDraftRepo::delete(&state.pool, draft_id, user.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: draft_id,
        }));
    }

    tracing::info!(draft_id, user_id = user.user_id, "Draft deleted");

    Ok(Json(MessageResponse {
        message: "Draft deleted successfully",
    }))
}
