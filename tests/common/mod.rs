//! Shared helpers for the HTTP integration tests
//!
//! Builds the full router over fresh in-memory stores so every test gets
//! an isolated server with the real auth middleware and CORS wiring.

use axum_test::TestServer;
use serde_json::json;

use studyboard::routes::create_router;
use studyboard::server::config::ServerConfig;
use studyboard::server::state::AppState;

/// Spin up a test server over in-memory stores
pub fn test_server() -> TestServer {
    let config = ServerConfig {
        port: 0,
        cors_origin: "http://localhost:3000".to_string(),
    };
    let app = create_router(AppState::in_memory(), &config);
    TestServer::new(app).expect("failed to start test server")
}

/// Register a user and return their bearer token
pub async fn signup(server: &TestServer, username: &str) -> String {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "password123",
        }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("signup response carries a token")
        .to_string()
}
