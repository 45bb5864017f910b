//! API Error Module
//!
//! This module defines the error taxonomy for the board service and its
//! HTTP conversions.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Types
//!
//! - `ApiError::Validation` - Missing or malformed required input (400)
//! - `ApiError::NotFound` - No matching owned document (404)
//! - `ApiError::InvalidDifficulty` - Difficulty outside the allowed set (400)
//! - `ApiError::Store` - Store-layer failure on a mutation (500)
//! - `StoreError` - Database and serialization failures at the store boundary
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing handlers to
//! return it directly with `?`. The error is converted to the appropriate
//! status code and a JSON body of the form `{"message": ..., "status": ...}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, StoreError};
