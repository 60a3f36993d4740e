pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::view::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(handlers::handle_search_page))
        .route("/about", get(handlers::handle_about))
        // JSON API
        .route("/api/v1/search", post(handlers::handle_search_api))
        .with_state(state)
}
