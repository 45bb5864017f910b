//! StudyBoard - Main Library
//!
//! StudyBoard is a personal study/task-management backend exposing board
//! and card data over HTTP, backed by a document store.
//!
//! # Overview
//!
//! The core of the application is the board-and-card subsystem:
//!
//! - Board ownership (one board per user, all mutations owner-filtered)
//! - Whole-list replacement updates and nested card patching
//! - Starring and case-insensitive name search
//! - Completion-progress aggregation over the nested cards
//!
//! Authentication token issuance is the identity collaborator the board
//! surface requires: every board operation runs against the user resolved
//! by the auth middleware.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, app initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`board`** - The board/list/card core: model, store seam, service
//! - **`auth`** - Users, JWT sessions, signup/login/me handlers
//! - **`middleware`** - JWT auth middleware and the `AuthUser` extractor
//! - **`error`** - Error taxonomy and HTTP conversions
//!
//! # Storage
//!
//! Boards are single documents: one row with the nested list/card
//! structure in a JSONB column, updated atomically per document. The
//! store is reached only through the `BoardStore`/`UserStore` traits,
//! injected at startup; tests run against the in-memory implementations.
//!
//! There is no coordination beyond per-document atomicity. The
//! read-modify-write in the card update path is not guarded against
//! concurrent writers, so two simultaneous card updates on one board can
//! lose one of the writes. That limitation is accepted and documented in
//! `board::service`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use studyboard::server::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Board-and-card core
pub mod board;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Error types
pub mod error;

// Re-export commonly used types
pub use board::{Board, BoardService, BoardStore};
pub use error::ApiError;
pub use server::{create_app, AppState};
