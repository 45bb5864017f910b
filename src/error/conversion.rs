/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors,
 * allowing them to be converted to HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "message": "Board not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Store errors are logged here with their full details; the response
    /// body only carries the generic message.
    fn into_response(self) -> Response {
        if let ApiError::Store(ref err) = self {
            tracing::error!("Store failure while handling request: {:?}", err);
        }

        let status = self.status_code();
        let message = self.message();

        let body = serde_json::json!({
            "message": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap_or_else(|_| {
                format!(r#"{{"message":"{}","status":{}}}"#, message, status.as_u16())
            })))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
