pub mod game;
pub mod health;
pub mod response;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthcheck", get(health::health_check))
        .merge(game_routes())
}

fn game_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/game", post(game::create_game))
        .route("/game/{name}/start", post(game::start_game))
        .route("/game/{name}/click", post(game::click_cell))
}
