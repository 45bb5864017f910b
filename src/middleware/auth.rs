/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user identity to handlers.
 *
 * Every board operation trusts the identity resolved here completely;
 * no handler performs its own verification.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::server::state::AppState;

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Confirms the user behind the token still exists
/// 4. Attaches the identity to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Get Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            StatusCode::UNAUTHORIZED
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        StatusCode::UNAUTHORIZED
    })?;

    // Verify token
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        StatusCode::UNAUTHORIZED
    })?;

    // Parse user ID from claims
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // A token may outlive its user
    match state.users.user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::warn!("User {} behind token no longer exists", user_id);
            return Err(StatusCode::UNAUTHORIZED);
        }
        Err(e) => {
            tracing::error!("Store error verifying user {}: {:?}", user_id, e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    // Attach authenticated user to request extensions
    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter to pull the identity the middleware
/// attached to the request extensions.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extractor_returns_attached_user() {
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let mut request = Request::builder().uri("/board").body(()).unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let state = AppState::in_memory();
        let extracted = AuthUser::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(extracted.0.user_id, user.user_id);
        assert_eq!(extracted.0.username, "ada");
    }

    #[tokio::test]
    async fn test_extractor_rejects_missing_user() {
        let request = Request::builder().uri("/board").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        let state = AppState::in_memory();
        let result = AuthUser::from_request_parts(&mut parts, &state).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }
}
