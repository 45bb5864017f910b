/**
 * API Error Types
 *
 * This module defines the error types used by the board service and its
 * HTTP handlers.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Validation errors occur when required input is missing or malformed:
 * - Missing board name on create
 * - Missing board ID or list data on update
 * - Missing search query
 *
 * A validation failure never mutates state.
 *
 * ## Not Found Errors
 *
 * Not-found errors occur when no owned document matches a lookup or a
 * filtered update. A matched-but-unmodified update is reported the same
 * way; the two cases are indistinguishable to the caller.
 *
 * ## Invalid Difficulty
 *
 * A card update carrying a difficulty outside {easy, medium, hard} aborts
 * the entire update before anything is written back.
 *
 * ## Store Errors
 *
 * Store errors wrap database and serialization failures that surface from
 * a mutation. Lookup failures are handled at the lookup boundary instead
 * (logged and reported as not-found, see the board service).
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the document store boundary
///
/// These wrap the underlying driver errors so that store implementations
/// (PostgreSQL, in-memory) share one error surface.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error (connectivity, constraint violation, bad query)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error for the nested list/card document
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Board service error taxonomy
///
/// Each variant maps to one HTTP status code and carries a human-readable
/// message. Handlers return `ApiError` directly; the `IntoResponse`
/// implementation in `conversion.rs` renders the JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input (400, never mutates state)
    #[error("{0}")]
    Validation(String),

    /// No matching owned document, or a filtered update matched nothing (404)
    #[error("{0}")]
    NotFound(String),

    /// Difficulty outside {easy, medium, hard} (400, aborts the whole update)
    #[error("Invalid difficulty")]
    InvalidDifficulty,

    /// Store-layer failure on a mutation (500)
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidDifficulty => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the human-readable error message
    pub fn message(&self) -> String {
        match self {
            // Store details stay in the logs, not in the response body
            Self::Store(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::validation("Missing board name");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Missing board name");
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::not_found("Board not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.message(), "Board not found");
    }

    #[test]
    fn test_invalid_difficulty_status() {
        let error = ApiError::InvalidDifficulty;
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Invalid difficulty");
    }

    #[test]
    fn test_store_error_hides_details() {
        let error = ApiError::from(StoreError::Database(sqlx::Error::RowNotFound));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }
}
