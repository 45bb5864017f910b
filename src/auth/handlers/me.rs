/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the auth middleware, so the user identity arrives
 * through the `AuthUser` extractor; the handler only has to look the user
 * up and strip the sensitive fields.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - The user behind the token no longer exists
/// * `500 Internal Server Error` - Store failure
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserResponse>, StatusCode> {
    let user = state
        .users
        .user_by_id(auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Store error fetching user {}: {:?}", auth.user_id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::warn!("User {} not found", auth.user_id);
            StatusCode::NOT_FOUND
        })?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        email: user.email,
    }))
}
