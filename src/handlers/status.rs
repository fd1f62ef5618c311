use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(status))
}

#[derive(Serialize)]
struct StatusResponse {
    message: &'static str,
    status: &'static str,
}

/// Static liveness payload. Answers 200 whether or not the database is up.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "API de ChatGPT funcionando correctamente",
        status: "OpenAI configurado con clave fija en el controlador",
    })
}
