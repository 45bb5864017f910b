/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development:
 *
 * - `SERVER_PORT` - listen port (default 3000)
 * - `CORS_ORIGIN` - allowed browser origin (default http://localhost:3000)
 * - `DATABASE_URL` - PostgreSQL connection string (optional)
 * - `JWT_SECRET` - token signing secret (read in `auth::sessions`)
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database fails to initialize the server falls back to the
 * in-memory stores.
 */

use sqlx::PgPool;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Allowed browser origin for CORS
    pub cors_origin: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self { port, cors_origin }
    }
}

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// Errors are logged but do not prevent server startup; the caller falls
/// back to the in-memory stores when this returns `None`.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Falling back to in-memory stores.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory stores.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    // Run migrations
    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            // Continue anyway - migrations might have already been run
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}
