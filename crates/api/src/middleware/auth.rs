//! Bearer-token extractor identifying the draft owner.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use erp_core::error::CoreError;
use erp_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind a draft request, taken from the `Authorization: Bearer`
/// JWT.
///
/// `user_id` is the owner every draft query is scoped by, so two users never
/// see each other's drafts. Handlers list it as their first extractor; a
/// request without a valid token is answered 401 before the payload is
/// parsed or the database is touched.
///
/// ```ignore
/// async fn get_latest_draft(user: AuthUser, State(state): State<AppState>) -> AppResult<...> {
///     SalesOrderDraftRepo::find_latest(&state.pool, user.user_id).await?;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Draft owner id (`claims.sub`).
    pub user_id: DbId,
    /// Role name, recorded in logs only; drafts are not role-gated.
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}
