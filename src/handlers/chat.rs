use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::rejections::{AppError, ResultExt};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/chat", post(chat))
}

#[derive(Deserialize)]
struct ChatBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
}

/// Relay one user message to the completion API and return the reply.
async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body
        .message
        .filter(|m| !m.is_empty())
        .ok_or(AppError::Input("Por favor, proporciona un mensaje."))?;

    let reply = state
        .openai
        .chat(&message)
        .await
        .reject("Hubo un problema al procesar el mensaje.")?;

    Ok(Json(ChatResponse { reply }))
}
