/**
 * Board Service
 *
 * This module implements the board operations behind the HTTP surface:
 * creating boards, whole-list replacement, starring, search, nested card
 * patching and progress aggregation.
 *
 * # Store Boundary
 *
 * The service is constructed over a `BoardStore` trait object, injected at
 * startup (PostgreSQL in production, in-memory in tests). It keeps no
 * state of its own; every operation re-reads from the store, so the store
 * is the single source of truth and a server restart loses nothing.
 *
 * # Lookup Failures
 *
 * Store failures during a lookup (connectivity, malformed board IDs) are
 * logged and reported as not-found rather than propagated raw; callers
 * treat "nothing came back" the same as a missing board. Failures during
 * a mutation surface as store errors (500).
 */

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::board::model::{Board, BoardList, BoardSummary, Difficulty, ProgressReport};
use crate::board::store::BoardStore;
use crate::error::ApiError;

/// Optional fields of a card update
///
/// Each field is applied only when supplied, so "absent" and "explicitly
/// set" stay distinct. The difficulty arrives as the raw string and is
/// validated against the allowed set during the update itself.
#[derive(Debug, Default, Clone)]
pub struct CardPatch {
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
}

/// Board service operating over an injected document store
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Create the default board for a freshly registered user
    ///
    /// Called from the signup handler, not an HTTP endpoint of its own.
    /// The board is named after the username and carries the canonical
    /// empty-list template.
    pub async fn create_initial_board(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<Uuid, ApiError> {
        let board = Board::new(user_id, format!("{username}'s Board"));
        let board_id = board.id;
        self.store.insert(&board).await?;
        tracing::info!("Created initial board {} for user {}", board_id, user_id);
        Ok(board_id)
    }

    /// Create a board with a caller-supplied name
    pub async fn create_board(&self, user_id: Uuid, name: &str) -> Result<Uuid, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Missing board name"));
        }

        let board = Board::new(user_id, name);
        let board_id = board.id;
        self.store.insert(&board).await?;
        Ok(board_id)
    }

    /// Fetch the single board owned by a user
    pub async fn board_for_user(&self, user_id: Uuid) -> Result<Board, ApiError> {
        self.lookup_board(user_id)
            .await
            .ok_or_else(|| ApiError::not_found("Board not found"))
    }

    /// List every board in the store (diagnostic, no ownership filter)
    pub async fn all_boards(&self) -> Result<Vec<Board>, ApiError> {
        Ok(self.store.find_all().await?)
    }

    /// Replace the entire list sequence of one owned board
    ///
    /// The ownership check is folded into the store filter, not a separate
    /// read: zero matched rows means wrong owner, wrong ID or a vanished
    /// board, all reported as the same not-found.
    pub async fn update_board(
        &self,
        user_id: Uuid,
        board_id: &str,
        lists: Vec<BoardList>,
    ) -> Result<(), ApiError> {
        let board_id = self.parse_board_id(board_id)?;

        let matched = self.store.replace_lists(board_id, user_id, &lists).await?;
        if matched == 0 {
            return Err(ApiError::not_found("Board not found or not modified"));
        }
        Ok(())
    }

    /// Set the starred flag of one owned board
    pub async fn update_star_status(
        &self,
        user_id: Uuid,
        board_id: &str,
        starred: bool,
    ) -> Result<(), ApiError> {
        let board_id = self.parse_board_id(board_id)?;

        let matched = self.store.set_starred(board_id, user_id, starred).await?;
        if matched == 0 {
            return Err(ApiError::not_found("Board not found or not modified"));
        }
        Ok(())
    }

    /// `{id, name}` projection of the user's starred boards
    ///
    /// An empty result is success, not an error.
    pub async fn starred_boards(&self, user_id: Uuid) -> Result<Vec<BoardSummary>, ApiError> {
        Ok(self.store.find_starred(user_id).await?)
    }

    /// Case-insensitive substring search over the user's board names
    pub async fn search_boards(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<BoardSummary>, ApiError> {
        if query.is_empty() {
            return Err(ApiError::validation("Missing search query"));
        }

        Ok(self.store.search_by_name(user_id, query).await?)
    }

    /// Patch one card inside the user's board
    ///
    /// Scans lists in order and stops at the first card whose ID matches
    /// (card IDs are assumed unique across the board). Supplied fields are
    /// applied in memory; an invalid difficulty aborts the whole operation
    /// before the single write-back, so a request carrying a valid title
    /// and a bad difficulty persists neither.
    pub async fn update_card(
        &self,
        user_id: Uuid,
        card_id: &str,
        patch: CardPatch,
    ) -> Result<(), ApiError> {
        let board = self.board_for_user(user_id).await?;
        let mut lists = board.lists;

        let mut target = None;
        'scan: for (list_idx, list) in lists.iter().enumerate() {
            for (card_idx, card) in list.cards.iter().enumerate() {
                if card.id == card_id {
                    target = Some((list_idx, card_idx));
                    break 'scan;
                }
            }
        }
        let (list_idx, card_idx) =
            target.ok_or_else(|| ApiError::not_found("Card not found"))?;

        let card = &mut lists[list_idx].cards[card_idx];
        if let Some(title) = patch.title {
            card.title = title;
        }
        if let Some(sub_title) = patch.sub_title {
            card.sub_title = Some(sub_title);
        }
        if let Some(description) = patch.description {
            card.description = Some(description);
        }
        if let Some(raw) = patch.difficulty {
            let difficulty = raw
                .parse::<Difficulty>()
                .map_err(|_| ApiError::InvalidDifficulty)?;
            card.difficulty = Some(difficulty);
        }

        let matched = self.store.replace_lists(board.id, user_id, &lists).await?;
        if matched == 0 {
            // Board vanished between the read and the write-back
            return Err(ApiError::not_found("Board not found or not modified"));
        }
        Ok(())
    }

    /// Aggregate card counts into a completion-progress report
    ///
    /// A list counts towards `done_cards` when its lowercased title
    /// contains "done". The percentage is 0 for an empty board.
    pub async fn progress_report(&self, user_id: Uuid) -> Result<ProgressReport, ApiError> {
        let board = self.board_for_user(user_id).await?;

        let mut list_report = HashMap::new();
        let mut total_cards = 0;
        let mut done_cards = 0;

        for list in &board.lists {
            let count = list.cards.len();
            list_report.insert(list.title.clone(), count);
            total_cards += count;

            if list.title.to_lowercase().contains("done") {
                done_cards += count;
            }
        }

        let progress_percentage = if total_cards > 0 {
            done_cards as f64 / total_cards as f64 * 100.0
        } else {
            0.0
        };

        Ok(ProgressReport {
            total_cards,
            done_cards,
            progress_percentage,
            list_report,
        })
    }

    /// Look up the user's board, translating store failures to "no board"
    async fn lookup_board(&self, user_id: Uuid) -> Option<Board> {
        match self.store.find_by_user(user_id).await {
            Ok(board) => board,
            Err(err) => {
                tracing::error!("Board lookup failed for user {}: {:?}", user_id, err);
                None
            }
        }
    }

    /// Parse a caller-supplied board ID
    ///
    /// A malformed ID can never match an owned document, so it is logged
    /// and reported as not-found rather than as a validation failure.
    fn parse_board_id(&self, board_id: &str) -> Result<Uuid, ApiError> {
        Uuid::parse_str(board_id).map_err(|err| {
            tracing::warn!("Malformed board ID {:?}: {}", board_id, err);
            ApiError::not_found("Board not found or not modified")
        })
    }
}
