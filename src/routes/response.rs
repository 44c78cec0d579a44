use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{game::GameError, store::StoreError};

/// Success envelope: `{"success": true, "status": <code>, "result": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status: u16,
    pub result: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, result: T) -> Self {
        Self {
            success: true,
            status: status.as_u16(),
            result,
        }
    }

    pub fn ok(result: T) -> Self {
        Self::new(StatusCode::OK, result)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Error envelope: `{"type": ..., "message": ...}`
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_json() -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "invalid_json",
            "Invalid or malformed JSON",
        )
    }

    pub fn server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "server_error",
            "Internal server error. The error has been logged and we are working on it",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::invalid_json()
    }
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        let message = err.to_string();
        match err {
            GameError::Validation(_) => {
                Self::new(StatusCode::BAD_REQUEST, "validation_error", message)
            }
            GameError::OutOfRange { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "out_of_range", message)
            }
            GameError::AlreadyRevealed { .. } => {
                Self::new(StatusCode::BAD_REQUEST, "already_revealed", message)
            }
            GameError::NotStarted(_) => {
                Self::new(StatusCode::BAD_REQUEST, "game_not_started", message)
            }
            GameError::GameEnded(_) => Self::new(StatusCode::BAD_REQUEST, "game_ended", message),
            GameError::Store(StoreError::AlreadyExists(_)) => Self::new(
                StatusCode::CONFLICT,
                "already_exists",
                "Another resource has the same value as this field",
            ),
            GameError::Store(StoreError::NotFound(_)) => {
                Self::new(StatusCode::NOT_FOUND, "not_found", message)
            }
            GameError::Store(StoreError::Conflict(_)) => {
                Self::new(StatusCode::CONFLICT, "conflict", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let body = serde_json::to_string(&ApiResponse::new(StatusCode::CREATED, "x")).unwrap();
        assert_eq!(body, r#"{"success":true,"status":201,"result":"x"}"#);
    }

    #[test]
    fn test_error_envelope_hides_status() {
        let body = serde_json::to_string(&ApiError::invalid_json()).unwrap();
        assert_eq!(
            body,
            r#"{"type":"invalid_json","message":"Invalid or malformed JSON"}"#
        );
    }

    #[test]
    fn test_game_error_mapping() {
        let cases = [
            (GameError::Validation("x".into()), StatusCode::BAD_REQUEST, "validation_error"),
            (
                GameError::AlreadyRevealed { row: 0, col: 0 },
                StatusCode::BAD_REQUEST,
                "already_revealed",
            ),
            (
                GameError::OutOfRange { row: 9, col: 0, rows: 2, cols: 2 },
                StatusCode::BAD_REQUEST,
                "out_of_range",
            ),
            (GameError::NotStarted("g".into()), StatusCode::BAD_REQUEST, "game_not_started"),
            (GameError::GameEnded("g".into()), StatusCode::BAD_REQUEST, "game_ended"),
            (
                StoreError::AlreadyExists("g".into()).into(),
                StatusCode::CONFLICT,
                "already_exists",
            ),
            (StoreError::NotFound("g".into()).into(), StatusCode::NOT_FOUND, "not_found"),
            (StoreError::Conflict("g".into()).into(), StatusCode::CONFLICT, "conflict"),
        ];

        for (err, status, kind) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status, status);
            assert_eq!(api.kind, kind);
        }
    }
}
