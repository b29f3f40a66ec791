use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::lookup::FilmService;

pub mod handlers;
pub mod models;

pub fn create_router(service: Arc<FilmService>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/film", post(handlers::film_handler))
        .route("/api/message", post(handlers::message_handler))
        .with_state(service)
        .layer(cors)
}
