//! Liveness probe for load balancers and the frontend's connection banner.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when drafts can be read and written, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the `sales_order_drafts` table exists, i.e. migrations ran.
    pub drafts_ready: bool,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = erp_db::health_check(&state.pool).await.is_ok();
    let drafts_ready = db_healthy
        && erp_db::drafts_table_ready(&state.pool)
            .await
            .unwrap_or(false);

    Json(HealthResponse {
        status: if drafts_ready { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        drafts_ready,
    })
}

/// Mounted at the root, outside `/api/v1`, and unauthenticated.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
