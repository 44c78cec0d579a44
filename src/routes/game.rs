use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Cell, Game, Position},
    routes::response::{ApiError, ApiResponse},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rows: usize,
    #[serde(default)]
    pub cols: usize,
    #[serde(default)]
    pub mines: usize,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub cell: Cell,
    pub game: Game,
}

/// Create a new game. Missing or zero sizes fall back to the configured defaults.
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGameRequest>, JsonRejection>,
) -> Result<ApiResponse<Game>, ApiError> {
    let Json(req) = payload?;

    let game = state
        .games
        .create(&req.name, req.rows, req.cols, req.mines)
        .map_err(|e| {
            tracing::error!("Cannot create game {:?}: {}", req.name, e);
            ApiError::from(e)
        })?;

    Ok(ApiResponse::new(StatusCode::CREATED, game))
}

/// Deal the board. The grid stays on the server.
pub async fn start_game(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<ApiResponse<Game>, ApiError> {
    let game = state.games.start(&name, &mut rand::rng()).map_err(|e| {
        tracing::error!("Cannot start game {}: {}", name, e);
        ApiError::from(e)
    })?;

    Ok(ApiResponse::ok(game.without_grid()))
}

/// Reveal one cell. The grid is only included once the game is over or won.
pub async fn click_cell(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    payload: Result<Json<Position>, JsonRejection>,
) -> Result<ApiResponse<ClickResponse>, ApiError> {
    let Json(pos) = payload?;

    let outcome = state.games.click(&name, pos.row, pos.col).map_err(|e| {
        tracing::error!("Cannot click cell on game {}: {}", name, e);
        ApiError::from(e)
    })?;

    Ok(ApiResponse::ok(ClickResponse {
        cell: outcome.cell,
        game: outcome.game,
    }))
}
