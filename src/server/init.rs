/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: configuration loading, store construction and route wiring.
 *
 * # Initialization Process
 *
 * 1. Load server configuration from the environment
 * 2. Connect to PostgreSQL and run migrations, or fall back to the
 *    in-memory stores when no database is configured
 * 3. Build the application state with the chosen stores
 * 4. Create the router with all routes, auth middleware and CORS
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::users::PgUserStore;
use crate::board::store::PgBoardStore;
use crate::routes::router::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient: a missing or unreachable
/// database does not prevent startup, it only means board and user data
/// live in process memory and are lost on restart.
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing StudyBoard backend server");

    let config = ServerConfig::from_env();

    // Connect to the document store, or degrade to in-memory
    let state = match load_database().await {
        Some(pool) => AppState::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgBoardStore::new(pool)),
        ),
        None => {
            tracing::warn!("Running with in-memory stores; data will not survive a restart");
            AppState::in_memory()
        }
    };

    tracing::info!("Application state initialized");

    create_router(state, &config)
}
