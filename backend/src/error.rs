//! HTTP error responses
//!
//! Every failure becomes a JSON body `{"error": "..."}` with a matching status
//! code. Terminal positions additionally report their game status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chess_engine::{BrainError, GameStatus};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body is not valid JSON or misses required fields
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// FEN could not be parsed into a legal position
    #[error("{0}")]
    InvalidPosition(String),

    /// The side to move has no legal moves
    #[error("No legal moves in this position ({status})")]
    NoLegalMoves { status: GameStatus },

    /// Anything that is our fault
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(err.to_string())
    }
}

impl From<BrainError> for ApiError {
    fn from(err: BrainError) -> Self {
        match err {
            BrainError::InvalidFen { .. } => ApiError::InvalidPosition(err.to_string()),
            BrainError::NoLegalMoves { status } => ApiError::NoLegalMoves { status },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::InvalidPosition(_) => StatusCode::BAD_REQUEST,
            ApiError::NoLegalMoves { .. } => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::NoLegalMoves { status: game_status } => json!({
                "error": self.to_string(),
                "status": game_status.as_str(),
            }),
            _ => json!({ "error": self.to_string() }),
        };

        if status.is_server_error() {
            tracing::error!("[API] {}", self);
        } else {
            tracing::debug!("[API] Rejected request: {}", self);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brain_errors_map_to_status_codes() {
        let invalid: ApiError = BrainError::InvalidFen {
            fen: "x".to_string(),
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let terminal: ApiError = BrainError::NoLegalMoves {
            status: GameStatus::Stalemate,
        }
        .into();
        assert_eq!(terminal.status_code(), StatusCode::CONFLICT);

        let illegal: ApiError = BrainError::IllegalMove {
            mv: "e2e5".to_string(),
        }
        .into();
        assert_eq!(illegal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_undecodable_body_is_bad_request() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Invalid request body: "));
    }

    #[test]
    fn test_no_legal_moves_message() {
        let err = ApiError::NoLegalMoves {
            status: GameStatus::Checkmate,
        };
        assert_eq!(err.to_string(), "No legal moves in this position (checkmate)");
    }
}
