pub mod health;
pub mod pages;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::reading::handlers;
use crate::state::AppState;
use crate::zodiac::handlers as signs;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(pages::handle_home))
        .route("/horoscope", post(pages::handle_horoscope))
        // Reading API
        .route("/api/v1/readings", post(handlers::handle_create_reading))
        // Sign metadata
        .route("/api/v1/signs", get(signs::handle_list_signs))
        .route("/api/v1/signs/:id", get(signs::handle_get_sign))
        .fallback(not_found)
        .with_state(state)
}
