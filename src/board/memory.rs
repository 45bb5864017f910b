/**
 * In-Memory Board Store
 *
 * A `BoardStore` implementation over a `Vec` behind an async `RwLock`.
 * Used by tests to substitute for PostgreSQL, and by the server as the
 * fallback when no `DATABASE_URL` is configured (nothing survives a
 * restart in that mode).
 *
 * # Semantics
 *
 * The implementation mirrors the SQL store:
 * - `find_by_user` returns the first board owned by the user
 * - mutations match on `(id, user_id)` and report the matched count
 * - `search_by_name` is a case-insensitive substring match
 */

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::board::model::{Board, BoardList, BoardSummary};
use crate::board::store::BoardStore;
use crate::error::StoreError;

/// In-memory board store
#[derive(Clone, Default)]
pub struct MemoryBoardStore {
    boards: Arc<RwLock<Vec<Board>>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored boards (test assertions)
    pub async fn len(&self) -> usize {
        self.boards.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.boards.read().await.is_empty()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn insert(&self, board: &Board) -> Result<(), StoreError> {
        self.boards.write().await.push(board.clone());
        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Board>, StoreError> {
        let boards = self.boards.read().await;
        Ok(boards.iter().find(|b| b.user_id == user_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Board>, StoreError> {
        Ok(self.boards.read().await.clone())
    }

    async fn replace_lists(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        lists: &[BoardList],
    ) -> Result<u64, StoreError> {
        let mut boards = self.boards.write().await;
        match boards
            .iter_mut()
            .find(|b| b.id == board_id && b.user_id == user_id)
        {
            Some(board) => {
                board.lists = lists.to_vec();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn set_starred(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        starred: bool,
    ) -> Result<u64, StoreError> {
        let mut boards = self.boards.write().await;
        match boards
            .iter_mut()
            .find(|b| b.id == board_id && b.user_id == user_id)
        {
            Some(board) => {
                board.starred = starred;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_starred(&self, user_id: Uuid) -> Result<Vec<BoardSummary>, StoreError> {
        let boards = self.boards.read().await;
        Ok(boards
            .iter()
            .filter(|b| b.user_id == user_id && b.starred)
            .map(|b| BoardSummary {
                id: b.id,
                name: b.name.clone(),
            })
            .collect())
    }

    async fn search_by_name(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<BoardSummary>, StoreError> {
        let needle = query.to_lowercase();
        let boards = self.boards.read().await;
        Ok(boards
            .iter()
            .filter(|b| b.user_id == user_id && b.name.to_lowercase().contains(&needle))
            .map(|b| BoardSummary {
                id: b.id,
                name: b.name.clone(),
            })
            .collect())
    }
}
