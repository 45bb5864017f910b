//! Board Module
//!
//! This module contains the board-and-card core of the application: the
//! nested board/list/card data model, the document store seam, and the
//! service layer that the HTTP handlers call into.
//!
//! # Module Structure
//!
//! ```text
//! board/
//! ├── mod.rs      - Module exports
//! ├── model.rs    - Board, BoardList, Card, Difficulty, projections
//! ├── store.rs    - BoardStore trait and the PostgreSQL implementation
//! ├── memory.rs   - In-memory BoardStore (tests, no-database fallback)
//! ├── service.rs  - BoardService operations
//! └── handlers.rs - HTTP handlers and request types
//! ```
//!
//! # Ownership Model
//!
//! Every board belongs to exactly one user. All mutations filter on both
//! the board ID and the owning user ID in a single store call, so one user
//! can never edit another user's board even with a known board ID.
//!
//! # Concurrency
//!
//! Each operation re-reads from the store and relies on the store's
//! per-document atomic update. The read-modify-write in `update_card` is
//! not guarded against concurrent writers; two concurrent card updates on
//! the same board race and the second write-back wins (lost update). This
//! is a documented limitation of the current design.

/// Board, list and card data model
pub mod model;

/// Document store trait and PostgreSQL implementation
pub mod store;

/// In-memory store implementation
pub mod memory;

/// Board service operations
pub mod service;

/// HTTP handlers for the board surface
pub mod handlers;

// Re-export commonly used types
pub use model::{Board, BoardList, BoardSummary, Card, Difficulty, ProgressReport};
pub use service::{BoardService, CardPatch};
pub use store::BoardStore;
