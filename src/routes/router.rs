/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Protected routes (board surface + /api/auth/me), wrapped in the
 *    auth middleware via `route_layer` so unmatched paths still 404
 * 2. Public auth routes (signup, login)
 * 3. CORS layer over everything
 * 4. Fallback handler (404)
 *
 * # CORS
 *
 * The browser client runs on a different origin, so the router carries a
 * CORS layer allowing that one origin with credentials, the standard
 * methods, the Content-Type and Authorization headers, and a 600 second
 * preflight cache.
 */

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::auth::handlers::get_me;
use crate::middleware::auth::auth_middleware;
use crate::routes::api_routes::configure_api_routes;
use crate::routes::board_routes::configure_board_routes;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the injected stores
/// * `config` - Server configuration (CORS origin)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    // Routes that require a resolved user identity
    let protected = configure_board_routes()
        .route("/api/auth/me", get(get_me))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    // Public auth routes
    let router = protected.merge(configure_api_routes());

    // CORS for the browser client
    let router = router.layer(cors_layer(&config.cors_origin));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}

/// Build the CORS layer for the configured browser origin
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(600));

    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::error!("Invalid CORS origin {:?}: {}", origin, e);
            layer
        }
    }
}
