/**
 * Board HTTP Handlers
 *
 * This module implements the handlers behind the board routes. Every
 * handler runs behind the auth middleware and receives the resolved user
 * identity through the `AuthUser` extractor; the identity is trusted
 * completely, no further verification happens here.
 *
 * # Request Validation
 *
 * Required body fields are declared as `Option` and checked for presence
 * explicitly, never by truthiness: the starred flag may legitimately be
 * `false`, so "missing" must mean "absent from the JSON", not "falsy".
 * Presence failures return 400 with the message the client renders.
 */

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::board::model::{Board, BoardList, BoardSummary, ProgressReport};
use crate::board::service::{BoardService, CardPatch};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Create board request body
#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub name: Option<String>,
}

/// Create board response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardResponse {
    pub message: String,
    pub board_id: String,
}

/// Update board request body (whole-list replacement)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub board_id: Option<String>,
    pub lists: Option<Vec<BoardList>>,
}

/// Star board request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarBoardRequest {
    pub board_id: Option<String>,
    pub starred: Option<bool>,
}

/// Update card request body
///
/// All card fields are independently optional; only the supplied ones are
/// applied.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub card_id: Option<String>,
    pub title: Option<String>,
    pub sub_title: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<String>,
}

/// Search query string (`/search-boards?q=...`)
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Board response for GET /board
///
/// The owning user ID and starred flag are not part of this payload; the
/// client renders id, name and the full nested list structure.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub id: String,
    pub name: String,
    pub lists: Vec<BoardList>,
}

/// Plain success message body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /board - fetch the authenticated user's board
pub async fn get_board(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
) -> Result<Json<BoardResponse>, ApiError> {
    let board = service.board_for_user(user.user_id).await?;

    Ok(Json(BoardResponse {
        id: board.id.to_string(),
        name: board.name,
        lists: board.lists,
    }))
}

/// GET /boards - diagnostic listing of every board in the store
pub async fn get_all_boards(
    State(service): State<BoardService>,
    AuthUser(_user): AuthUser,
) -> Result<Json<Vec<Board>>, ApiError> {
    Ok(Json(service.all_boards().await?))
}

/// POST /create-board - create a board with a caller-supplied name
pub async fn create_board(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<CreateBoardResponse>), ApiError> {
    let name = request.name.unwrap_or_default();
    let board_id = service.create_board(user.user_id, &name).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBoardResponse {
            message: "Board created successfully".to_string(),
            board_id: board_id.to_string(),
        }),
    ))
}

/// POST /update-board - replace the board's entire list sequence
pub async fn update_board(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateBoardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (board_id, lists) = match (request.board_id, request.lists) {
        (Some(board_id), Some(lists)) => (board_id, lists),
        _ => return Err(ApiError::validation("Missing Board ID or lists data")),
    };

    service.update_board(user.user_id, &board_id, lists).await?;

    Ok(Json(MessageResponse {
        message: "Board updated successfully".to_string(),
    }))
}

/// POST /star-board - toggle the board's starred flag
pub async fn star_board(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    Json(request): Json<StarBoardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    // `starred: false` is a legal request, so check presence, not truth
    let (board_id, starred) = match (request.board_id, request.starred) {
        (Some(board_id), Some(starred)) => (board_id, starred),
        _ => return Err(ApiError::validation("Missing board ID or starred status")),
    };

    service
        .update_star_status(user.user_id, &board_id, starred)
        .await?;

    Ok(Json(MessageResponse {
        message: "Board starred status updated successfully".to_string(),
    }))
}

/// GET /starred-boards - id+name projection of the user's starred boards
pub async fn get_starred_boards(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<BoardSummary>>, ApiError> {
    Ok(Json(service.starred_boards(user.user_id).await?))
}

/// GET /search-boards?q= - search the user's boards by name
pub async fn search_boards(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<BoardSummary>>, ApiError> {
    Ok(Json(service.search_boards(user.user_id, &query.q).await?))
}

/// POST /update-card - patch one card inside the user's board
pub async fn update_card(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdateCardRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let card_id = request
        .card_id
        .ok_or_else(|| ApiError::validation("Missing card ID"))?;

    let patch = CardPatch {
        title: request.title,
        sub_title: request.sub_title,
        description: request.description,
        difficulty: request.difficulty,
    };
    service.update_card(user.user_id, &card_id, patch).await?;

    Ok(Json(MessageResponse {
        message: "Card updated successfully".to_string(),
    }))
}

/// GET /progress-report - completion progress over the user's board
pub async fn get_progress_report(
    State(service): State<BoardService>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProgressReport>, ApiError> {
    Ok(Json(service.progress_report(user.user_id).await?))
}
