//! HTTP integration tests for the board surface
//!
//! These run the full router (auth middleware included) over in-memory
//! stores and exercise the API the way the browser client does.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use common::{signup, test_server};
use studyboard::auth::sessions::create_token;
use studyboard::routes::create_router;
use studyboard::server::config::ServerConfig;
use studyboard::server::state::AppState;

/// Lists payload with one card in "To Do" and none elsewhere
fn lists_with_card(card: Value) -> Value {
    json!([
        {"id": "list1", "title": "To Do", "cards": [card]},
        {"id": "list2", "title": "In Progress", "cards": []},
        {"id": "list3", "title": "Done", "cards": []},
    ])
}

/// Fetch the user's board as raw JSON
async fn get_board(server: &TestServer, token: &str) -> Value {
    let response = server.get("/board").authorization_bearer(token).await;
    response.assert_status(StatusCode::OK);
    response.json::<Value>()
}

#[tokio::test]
async fn board_requires_authentication() {
    let server = test_server();

    let response = server.get("/board").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server.get("/board").authorization_bearer("not.a.token").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn signup_creates_the_initial_board() {
    let server = test_server();
    let token = signup(&server, "ada").await;

    let board = get_board(&server, &token).await;
    assert_eq!(board["name"], "ada's Board");
    let titles: Vec<&str> = board["lists"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
}

#[tokio::test]
async fn board_is_not_found_for_a_user_without_one() {
    // Build the state by hand so the user exists without a board
    let state = AppState::in_memory();
    let user = state
        .users
        .create_user(
            "noboard".to_string(),
            "noboard@example.com".to_string(),
            "hash".to_string(),
        )
        .await
        .unwrap();
    let token = create_token(user.id, user.username, user.email).unwrap();

    let config = ServerConfig {
        port: 0,
        cors_origin: "http://localhost:3000".to_string(),
    };
    let server = TestServer::new(create_router(state, &config)).unwrap();

    let response = server.get("/board").authorization_bearer(&token).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .get("/progress-report")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_board_validates_the_name() {
    let server = test_server();
    let token = signup(&server, "ada").await;

    let response = server
        .post("/create-board")
        .authorization_bearer(&token)
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/create-board")
        .authorization_bearer(&token)
        .json(&json!({"name": "Thesis"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert!(body["boardId"].as_str().is_some());
}

#[tokio::test]
async fn update_board_replaces_lists_and_validates_fields() {
    let server = test_server();
    let token = signup(&server, "ada").await;
    let board = get_board(&server, &token).await;
    let board_id = board["id"].as_str().unwrap();

    // Missing lists
    let response = server
        .post("/update-board")
        .authorization_bearer(&token)
        .json(&json!({"boardId": board_id}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/update-board")
        .authorization_bearer(&token)
        .json(&json!({
            "boardId": board_id,
            "lists": lists_with_card(json!({"id": "c1", "title": "Read chapter 3"})),
        }))
        .await;
    response.assert_status(StatusCode::OK);

    let board = get_board(&server, &token).await;
    assert_eq!(board["lists"][0]["cards"][0]["title"], "Read chapter 3");
}

#[tokio::test]
async fn update_board_never_touches_another_users_board() {
    let server = test_server();
    let ada = signup(&server, "ada").await;
    let eve = signup(&server, "eve").await;
    let ada_board = get_board(&server, &ada).await;
    let board_id = ada_board["id"].as_str().unwrap();

    let response = server
        .post("/update-board")
        .authorization_bearer(&eve)
        .json(&json!({"boardId": board_id, "lists": []}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    // Ada's board is intact
    let board = get_board(&server, &ada).await;
    assert_eq!(board["lists"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn star_round_trip_over_http() {
    let server = test_server();
    let token = signup(&server, "ada").await;
    let board = get_board(&server, &token).await;
    let board_id = board["id"].as_str().unwrap();

    // Missing starred flag is a validation failure, not "false"
    let response = server
        .post("/star-board")
        .authorization_bearer(&token)
        .json(&json!({"boardId": board_id}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/star-board")
        .authorization_bearer(&token)
        .json(&json!({"boardId": board_id, "starred": true}))
        .await;
    response.assert_status(StatusCode::OK);

    let response = server
        .get("/starred-boards")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::OK);
    let starred = response.json::<Value>();
    assert_eq!(starred.as_array().unwrap().len(), 1);
    assert_eq!(starred[0]["name"], "ada's Board");

    // Explicitly clearing the flag with `false` must be accepted
    let response = server
        .post("/star-board")
        .authorization_bearer(&token)
        .json(&json!({"boardId": board_id, "starred": false}))
        .await;
    response.assert_status(StatusCode::OK);

    let response = server
        .get("/starred-boards")
        .authorization_bearer(&token)
        .await;
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_is_case_insensitive_and_owner_scoped() {
    let server = test_server();
    let ada = signup(&server, "ada").await;
    let eve = signup(&server, "eve").await;

    server
        .post("/create-board")
        .authorization_bearer(&ada)
        .json(&json!({"name": "ABC Project"}))
        .await
        .assert_status(StatusCode::CREATED);

    // Missing query
    let response = server.get("/search-boards").authorization_bearer(&ada).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .get("/search-boards")
        .add_query_param("q", "abc")
        .authorization_bearer(&ada)
        .await;
    response.assert_status(StatusCode::OK);
    let hits = response.json::<Value>();
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "ABC Project");

    // Eve sees none of Ada's boards
    let response = server
        .get("/search-boards")
        .add_query_param("q", "abc")
        .authorization_bearer(&eve)
        .await;
    response.assert_status(StatusCode::OK);
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn update_card_patches_only_supplied_fields() {
    let server = test_server();
    let token = signup(&server, "ada").await;
    let board = get_board(&server, &token).await;
    let board_id = board["id"].as_str().unwrap();

    server
        .post("/update-board")
        .authorization_bearer(&token)
        .json(&json!({
            "boardId": board_id,
            "lists": lists_with_card(json!({
                "id": "c1",
                "title": "Read chapter 3",
                "description": "Sections 3.1-3.4",
            })),
        }))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .post("/update-card")
        .authorization_bearer(&token)
        .json(&json!({"cardId": "c1", "title": "Read chapter 4", "difficulty": "hard"}))
        .await;
    response.assert_status(StatusCode::OK);

    let board = get_board(&server, &token).await;
    let card = &board["lists"][0]["cards"][0];
    assert_eq!(card["title"], "Read chapter 4");
    assert_eq!(card["description"], "Sections 3.1-3.4");
    assert_eq!(card["difficulty"], "hard");
}

#[tokio::test]
async fn update_card_rejects_invalid_difficulty_without_partial_write() {
    let server = test_server();
    let token = signup(&server, "ada").await;
    let board = get_board(&server, &token).await;
    let board_id = board["id"].as_str().unwrap();

    server
        .post("/update-board")
        .authorization_bearer(&token)
        .json(&json!({
            "boardId": board_id,
            "lists": lists_with_card(json!({"id": "c1", "title": "Old title"})),
        }))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .post("/update-card")
        .authorization_bearer(&token)
        .json(&json!({"cardId": "c1", "title": "New title", "difficulty": "extreme"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // The valid title from the same request must not have persisted
    let board = get_board(&server, &token).await;
    assert_eq!(board["lists"][0]["cards"][0]["title"], "Old title");
}

#[tokio::test]
async fn update_card_handles_missing_and_unknown_ids() {
    let server = test_server();
    let token = signup(&server, "ada").await;

    let response = server
        .post("/update-card")
        .authorization_bearer(&token)
        .json(&json!({"title": "No card id"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .post("/update-card")
        .authorization_bearer(&token)
        .json(&json!({"cardId": "ghost", "title": "Unknown"}))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn progress_report_aggregates_cards_per_list() {
    let server = test_server();
    let token = signup(&server, "ada").await;
    let board = get_board(&server, &token).await;
    let board_id = board["id"].as_str().unwrap();

    server
        .post("/update-board")
        .authorization_bearer(&token)
        .json(&json!({
            "boardId": board_id,
            "lists": [
                {"id": "list1", "title": "To Do", "cards": [
                    {"id": "c1", "title": "a"},
                    {"id": "c2", "title": "b"},
                ]},
                {"id": "list3", "title": "Done", "cards": [
                    {"id": "c3", "title": "c"},
                    {"id": "c4", "title": "d"},
                    {"id": "c5", "title": "e"},
                ]},
            ],
        }))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .get("/progress-report")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["total_cards"], 5);
    assert_eq!(report["done_cards"], 3);
    assert_eq!(report["progress_percentage"], 60.0);
    assert_eq!(report["list_report"]["To Do"], 2);
    assert_eq!(report["list_report"]["Done"], 3);
}

#[tokio::test]
async fn progress_report_on_empty_board_is_zero_percent() {
    let server = test_server();
    let token = signup(&server, "ada").await;

    let response = server
        .get("/progress-report")
        .authorization_bearer(&token)
        .await;
    response.assert_status(StatusCode::OK);
    let report = response.json::<Value>();
    assert_eq!(report["total_cards"], 0);
    assert_eq!(report["progress_percentage"], 0.0);
}

#[tokio::test]
async fn me_returns_the_authenticated_user() {
    let server = test_server();
    let token = signup(&server, "ada").await;

    let response = server.get("/api/auth/me").authorization_bearer(&token).await;
    response.assert_status(StatusCode::OK);
    let user = response.json::<Value>();
    assert_eq!(user["username"], "ada");
    assert_eq!(user["email"], "ada@example.com");
}

#[tokio::test]
async fn login_issues_a_usable_token() {
    let server = test_server();
    signup(&server, "ada").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({"username": "ada", "password": "password123"}))
        .await;
    response.assert_status(StatusCode::OK);
    let token = response.json::<Value>()["token"].as_str().unwrap().to_string();

    let board = get_board(&server, &token).await;
    assert_eq!(board["name"], "ada's Board");
}
