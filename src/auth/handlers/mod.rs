//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration (also
//!   creates the user's initial board)
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Get current user info

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use signup::signup;
