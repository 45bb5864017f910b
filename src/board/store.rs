/**
 * Board Document Store
 *
 * This module defines the `BoardStore` trait — the document store seam the
 * board service is constructed over — and its PostgreSQL implementation.
 *
 * # Storage Layout
 *
 * Each board is one row in the `boards` table. The nested list/card
 * structure is a single JSONB column, so every update to it is one atomic
 * document write, mirroring a `$set` on a document store. There is no
 * application-level locking on top of that.
 *
 * # Ownership Filters
 *
 * Every mutation filters on `(id, user_id)` in the SQL itself and reports
 * the matched-row count. The service treats zero matched rows as
 * not-found; wrong owner, wrong ID and no-op update are indistinguishable
 * to the caller by design.
 */

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::board::model::{Board, BoardList, BoardSummary};
use crate::error::StoreError;

/// Document store for board documents
///
/// Injected into `BoardService` at construction so tests can substitute
/// the in-memory implementation for the PostgreSQL one.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Insert a new board document
    async fn insert(&self, board: &Board) -> Result<(), StoreError>;

    /// Find the single board owned by a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Board>, StoreError>;

    /// List every board in the store, no ownership filter (diagnostic)
    async fn find_all(&self) -> Result<Vec<Board>, StoreError>;

    /// Replace the entire list sequence of one owned board
    ///
    /// Returns the number of matched rows; zero means no owned board with
    /// that ID exists.
    async fn replace_lists(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        lists: &[BoardList],
    ) -> Result<u64, StoreError>;

    /// Set the starred flag of one owned board
    ///
    /// Returns the number of matched rows.
    async fn set_starred(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        starred: bool,
    ) -> Result<u64, StoreError>;

    /// `{id, name}` projection of a user's starred boards
    async fn find_starred(&self, user_id: Uuid) -> Result<Vec<BoardSummary>, StoreError>;

    /// `{id, name}` projection of a user's boards whose name contains the
    /// query as a case-insensitive substring
    async fn search_by_name(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<BoardSummary>, StoreError>;
}

/// PostgreSQL-backed board store
#[derive(Clone)]
pub struct PgBoardStore {
    pool: PgPool,
}

impl PgBoardStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map one `boards` row into a `Board`
fn board_from_row(row: &sqlx::postgres::PgRow) -> Result<Board, sqlx::Error> {
    let lists: Json<Vec<BoardList>> = row.try_get("lists")?;
    Ok(Board {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        starred: row.try_get("starred")?,
        lists: lists.0,
    })
}

/// Build an ILIKE pattern that matches the query as a literal substring,
/// escaping the wildcard characters `%` and `_`.
fn substring_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl BoardStore for PgBoardStore {
    async fn insert(&self, board: &Board) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO boards (id, user_id, name, starred, lists)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(board.id)
        .bind(board.user_id)
        .bind(&board.name)
        .bind(board.starred)
        .bind(Json(&board.lists))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Board>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, starred, lists
            FROM boards
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| board_from_row(&r)).transpose().map_err(Into::into)
    }

    async fn find_all(&self) -> Result<Vec<Board>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, starred, lists
            FROM boards
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| board_from_row(r).map_err(Into::into))
            .collect()
    }

    async fn replace_lists(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        lists: &[BoardList],
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE boards
            SET lists = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(board_id)
        .bind(user_id)
        .bind(Json(lists))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn set_starred(
        &self,
        board_id: Uuid,
        user_id: Uuid,
        starred: bool,
    ) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE boards
            SET starred = $3
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(board_id)
        .bind(user_id)
        .bind(starred)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn find_starred(&self, user_id: Uuid) -> Result<Vec<BoardSummary>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM boards
            WHERE user_id = $1 AND starred = TRUE
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BoardSummary {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }

    async fn search_by_name(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<BoardSummary>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM boards
            WHERE user_id = $1 AND name ILIKE $2 ESCAPE '\'
            "#,
        )
        .bind(user_id)
        .bind(substring_pattern(query))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| BoardSummary {
                id: r.get("id"),
                name: r.get("name"),
            })
            .collect())
    }
}
