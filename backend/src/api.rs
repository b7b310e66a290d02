use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use chess_engine::{ChessAgent, RulesEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub struct AppState<R: RulesEngine> {
    pub agent: Arc<ChessAgent<R>>,
}

impl<R: RulesEngine> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            agent: Arc::clone(&self.agent),
        }
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MoveRequest {
    #[serde(default)]
    pub fen: String,
    /// Winner of a finished game; present only on the terminal request
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: String,
    pub game_count: u64,
    pub brain_size: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub game_count: u64,
    pub brain_size: usize,
    pub pending_moves: usize,
}

/// `/move`, `/save` and `/health`, with static files for everything else
pub fn router<R: RulesEngine>(agent: Arc<ChessAgent<R>>, static_dir: impl AsRef<Path>) -> Router {
    let state = AppState { agent };

    Router::new()
        .route("/move", post(post_move::<R>))
        .route("/save", post(post_save::<R>))
        .route("/health", get(health::<R>))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The body is decoded as JSON whatever its `content-type` says
async fn post_move<R: RulesEngine>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request: MoveRequest = serde_json::from_slice(&body)?;

    match request.result.filter(|r| !r.is_empty()) {
        Some(result) => {
            let agent = Arc::clone(&state.agent);
            let report = tokio::task::spawn_blocking(move || agent.finish_game_with_result(&result))
                .await
                .map_err(|e| ApiError::Internal(e.to_string()))?;

            info!(
                "[API] Game over ({}), {} moves updated, {} games played",
                report.outcome, report.updated_pairs, report.game_count
            );
            to_json(StatusResponse {
                status: "saved".to_string(),
            })
        }
        None => {
            let reply = state.agent.choose_move(&request.fen)?;
            info!("[API] {} -> {}", request.fen, reply.mv);
            to_json(MoveResponse {
                mv: reply.mv,
                game_count: reply.game_count,
                brain_size: reply.brain_size,
            })
        }
    }
}

async fn post_save<R: RulesEngine>(State(state): State<AppState<R>>) -> &'static str {
    let agent = Arc::clone(&state.agent);
    match tokio::task::spawn_blocking(move || agent.save()).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("[API] Save failed: {}", e),
        Err(e) => warn!("[API] Save task failed: {}", e),
    }
    "OK"
}

async fn health<R: RulesEngine>(State(state): State<AppState<R>>) -> Json<HealthResponse> {
    let stats = state.agent.stats();
    Json(HealthResponse {
        status: "ok".to_string(),
        game_count: stats.game_count,
        brain_size: stats.brain_size,
        pending_moves: stats.pending_moves,
    })
}

fn to_json<T: Serialize>(body: T) -> Result<Json<serde_json::Value>, ApiError> {
    serde_json::to_value(body)
        .map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}
