/**
 * API Route Handlers
 *
 * This module defines the public authentication routes. These are the
 * only routes not behind the auth middleware: signup creates the user
 * (and their initial board), login issues the token the rest of the API
 * requires.
 *
 * # Routes
 *
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login`  - User login
 */

use axum::routing::post;
use axum::Router;

use crate::auth::handlers::{login, signup};
use crate::server::state::AppState;

/// Configure the public auth routes
pub fn configure_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
}
