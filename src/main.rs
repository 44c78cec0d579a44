mod config;
mod game;
mod models;
mod routes;
mod store;

use std::{any::Any, sync::Arc};

use anyhow::Result;
use axum::{
    response::{IntoResponse, Response},
    Router,
};
use config::Config;
use game::GameService;
use store::MemoryGameStore;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use routes::response::ApiError;

/// Application state shared across all handlers
pub struct AppState {
    pub games: GameService<MemoryGameStore>,
}

/// Anything that escapes a handler is reported as a generic server error
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {}", detail);
    ApiError::server_error().into_response()
}

fn build_app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .merge(routes::create_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minesweeper_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Minesweeper backend server...");

    // Load configuration
    let config = Config::from_env()?;
    let rules = config.game.rules();
    tracing::info!(
        "Configuration loaded (default board {}x{} with {} mines, max {}x{})",
        rules.default_rows,
        rules.default_cols,
        rules.default_mines,
        rules.max_rows,
        rules.max_cols
    );

    let state = Arc::new(AppState {
        games: GameService::new(MemoryGameStore::new(), rules),
    });

    let app = build_app(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/healthcheck", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use crate::game::GameRules;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_app(Arc::new(AppState {
            games: GameService::new(MemoryGameStore::new(), GameRules::default()),
        }))
    }

    #[test]
    fn test_panic_maps_to_server_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_server_error_body() {
        let response = handle_panic(Box::new(42_u8));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            String::from_utf8(bytes.to_vec()).unwrap(),
            r#"{"type":"server_error","message":"Internal server error. The error has been logged and we are working on it"}"#
        );
    }

    #[tokio::test]
    async fn test_cors_headers_present() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/healthcheck")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/nowhere")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
