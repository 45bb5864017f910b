//! Routes Module
//!
//! This module contains HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Router assembly, auth middleware, CORS
//! ├── board_routes.rs - Board surface routes
//! └── api_routes.rs   - Public auth routes
//! ```

/// Router assembly
pub mod router;

/// Board surface routes
pub mod board_routes;

/// Public auth routes
pub mod api_routes;

// Re-export the router entry point
pub use router::create_router;
