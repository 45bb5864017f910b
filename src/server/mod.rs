//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports and documentation
//! ├── state.rs    - AppState and FromRef implementations
//! ├── config.rs   - Configuration loading (port, CORS, database)
//! └── init.rs     - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: port, CORS origin, database URL
//! 2. **Store Construction**: PostgreSQL stores when a database is
//!    configured, in-memory stores otherwise
//! 3. **Router Creation**: all routes, auth middleware and CORS

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
