//! Authentication Module
//!
//! This module is the identity collaborator of the board service: it
//! handles user registration, login and session tokens. Every board
//! operation requires an identity resolved here; the board service trusts
//! that identity completely and performs no verification of its own.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and UserStore implementations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username/email/password → user created, initial board
//!    created → JWT token returned
//! 2. **Login**: username (or email) + password → credentials verified →
//!    JWT token returned
//! 3. **Get Me**: JWT token → token verified → user info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - JWT tokens are stateless and expire after 30 days
//! - Invalid credentials return 401 without distinguishing the cause

/// User data model and store implementations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, signup};
pub use users::{User, UserStore};
