//! Route definitions for sales-order drafts.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::drafts;
use crate::state::AppState;

/// Draft routes mounted at `/sales/drafts`.
///
/// ```text
/// POST   /          -> create_draft
/// GET    /latest    -> get_latest_draft
/// GET    /{id}      -> get_draft
/// PUT    /{id}      -> update_draft
/// PATCH  /{id}      -> update_draft
/// DELETE /{id}      -> delete_draft
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(drafts::create_draft))
        .route("/latest", get(drafts::get_latest_draft))
        .route(
            "/{id}",
            get(drafts::get_draft)
                .put(drafts::update_draft)
                .patch(drafts::update_draft)
                .delete(drafts::delete_draft),
        )
}
