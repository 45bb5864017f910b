/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username (or email, when the input contains '@')
 * 2. Verify the password using bcrypt
 * 3. Generate a JWT token
 * 4. Return the token and user info
 *
 * # Security
 *
 * - Invalid credentials return 401 Unauthorized without distinguishing
 *   "unknown user" from "wrong password"
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the supplied credentials and returns a JWT token on success.
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `500 Internal Server Error` - Store or token generation failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, StatusCode> {
    tracing::info!("Login request for: {}", request.username);

    // An input containing '@' is treated as an email
    let user = if request.username.contains('@') {
        state.users.user_by_email(&request.username).await
    } else {
        state.users.user_by_username(&request.username).await
    };

    let user = user
        .map_err(|e| {
            tracing::error!("Store error during login: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    // Verify password
    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(StatusCode::UNAUTHORIZED);
    }

    // Create token
    let token = create_token(user.id, user.username.clone(), user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        },
    }))
}
