/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username format, email format and password length
 * 2. Check that neither the username nor the email is taken
 * 3. Hash the password using bcrypt
 * 4. Create the user
 * 5. Create the user's initial board (named after the username, with the
 *    canonical empty-list template)
 * 6. Generate a JWT token and return it with the user info
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 30-day expiration
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, SignupRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::server::state::AppState;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Sign up handler
///
/// Creates a new user account together with the user's initial board and
/// returns a JWT token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - Invalid username, email format or password length
/// * `409 Conflict` - Username or email already registered
/// * `500 Internal Server Error` - Hashing, store or token generation failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    tracing::info!(
        "Signup request for username: {}, email: {}",
        request.username,
        request.email
    );

    // Validate username format
    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err((
            StatusCode::BAD_REQUEST,
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores".to_string(),
        ));
    }

    // Validate email format (basic check)
    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err((StatusCode::BAD_REQUEST, "Invalid email format".to_string()));
    }

    // Validate password length
    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err((
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Check if username already exists
    if let Ok(Some(_)) = state.users.user_by_username(&request.username).await {
        tracing::warn!("Username already exists: {}", request.username);
        return Err((StatusCode::CONFLICT, "Username already taken".to_string()));
    }

    // Check if email already exists
    if let Ok(Some(_)) = state.users.user_by_email(&request.email).await {
        tracing::warn!("Email already exists: {}", request.email);
        return Err((StatusCode::CONFLICT, "Email already registered".to_string()));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
    })?;

    // Create user
    let user = state
        .users
        .create_user(request.username.clone(), request.email.clone(), password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create user".to_string(),
            )
        })?;

    // Create the user's initial board
    state
        .board_service
        .create_initial_board(user.id, &user.username)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create initial board: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create initial board".to_string(),
            )
        })?;

    // Create token
    let token = create_token(user.id, user.username.clone(), user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
    })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        },
    }))
}
