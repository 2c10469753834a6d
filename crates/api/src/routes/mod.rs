pub mod drafts;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sales/drafts                create (auth required)
/// /sales/drafts/latest         latest draft for the caller
/// /sales/drafts/{id}           get, update (PUT/PATCH), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/sales/drafts", drafts::router())
}
