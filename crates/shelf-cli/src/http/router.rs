//! Route table and middleware.

use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use log::warn;
use shelf_core::Catalog;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::{config::ServerConfig, handlers};

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/assets/app.js", get(handlers::app_js))
        .route("/assets/style.css", get(handlers::style_css))
        .route("/health", get(handlers::health))
        .route(
            "/api/books",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route(
            "/api/books/:id",
            get(handlers::get_book)
                .put(handlers::replace_book)
                .delete(handlers::delete_book),
        )
        .route("/api/books/:id/status", patch(handlers::update_status))
        .route("/api/stats", get(handlers::stats))
        .layer(cors_layer(&config.cors_origins))
        .with_state(app_state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
