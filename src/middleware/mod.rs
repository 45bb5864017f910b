//! Middleware Module
//!
//! This module contains middleware for request processing.
//!
//! # Middleware
//!
//! - **`auth`** - JWT authentication middleware and the `AuthUser`
//!   extractor that hands the resolved identity to handlers

/// Authentication middleware
pub mod auth;

// Re-export commonly used types
pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
