/**
 * Board Route Configuration
 *
 * This module defines the board surface. Every route here requires an
 * authenticated user; the auth middleware is applied by the router
 * assembly, not per route.
 *
 * # Routes
 *
 * - `GET  /board`            - Fetch the user's board
 * - `GET  /boards`           - Diagnostic listing of all boards
 * - `POST /create-board`     - Create a board with a caller-supplied name
 * - `POST /update-board`     - Whole-list replacement update
 * - `POST /star-board`       - Toggle the starred flag
 * - `GET  /starred-boards`   - id+name projection of starred boards
 * - `GET  /search-boards?q=` - Case-insensitive name search
 * - `POST /update-card`      - Patch one nested card
 * - `GET  /progress-report`  - Completion progress aggregation
 */

use axum::routing::{get, post};
use axum::Router;

use crate::board::handlers;
use crate::server::state::AppState;

/// Configure the board routes
pub fn configure_board_routes() -> Router<AppState> {
    Router::new()
        .route("/board", get(handlers::get_board))
        .route("/boards", get(handlers::get_all_boards))
        .route("/create-board", post(handlers::create_board))
        .route("/update-board", post(handlers::update_board))
        .route("/star-board", post(handlers::star_board))
        .route("/starred-boards", get(handlers::get_starred_boards))
        .route("/search-boards", get(handlers::search_boards))
        .route("/update-card", post(handlers::update_card))
        .route("/progress-report", get(handlers::get_progress_report))
}
