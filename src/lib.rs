pub mod db;
pub mod handlers;
pub mod models;
pub mod openai;
pub mod rejections;

use axum::http::{header, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: db::Store,
    pub openai: openai::OpenAiClient,
}

pub fn router(state: AppState) -> Router {
    // The frontend is served from a different origin; CORS is fully open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(handlers::status::routes())
        .merge(handlers::questions::routes())
        .merge(handlers::quiz_result::routes())
        .merge(handlers::chat::routes())
        .layer(cors)
        .layer(CatchPanicLayer::custom(rejections::handle_panic))
        .with_state(state)
}
