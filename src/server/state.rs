/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding the two injected
 * store seams:
 * - the user store (auth collaborator)
 * - the board service, itself constructed over a board store
 *
 * Neither handler-visible piece is a global: both are constructed once at
 * startup and threaded through Axum's state, so tests can substitute the
 * in-memory implementations.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract the piece they need
 * (`State<BoardService>`, `State<Arc<dyn UserStore>>`) instead of the
 * whole `AppState`.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::users::{MemoryUserStore, UserStore};
use crate::board::memory::MemoryBoardStore;
use crate::board::service::BoardService;
use crate::board::store::BoardStore;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// User store (auth collaborator)
    pub users: Arc<dyn UserStore>,

    /// Board service over the injected board store
    pub board_service: BoardService,
}

impl AppState {
    /// Build state over explicit store implementations
    pub fn new(users: Arc<dyn UserStore>, boards: Arc<dyn BoardStore>) -> Self {
        Self {
            users,
            board_service: BoardService::new(boards),
        }
    }

    /// Build state over fresh in-memory stores
    ///
    /// Used by tests and by the server when no database is configured.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryBoardStore::new()),
        )
    }
}

/// Allow handlers to extract `State<BoardService>` directly
impl FromRef<AppState> for BoardService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.board_service.clone()
    }
}

/// Allow handlers to extract `State<Arc<dyn UserStore>>` directly
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}
