use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::GeneratedQuestion;
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/questions", post(generate_questions))
}

#[derive(Deserialize)]
struct GenerateQuestionsBody {
    #[serde(default)]
    topic: Option<String>,
}

#[derive(Serialize)]
struct QuestionsResponse {
    questions: Vec<GeneratedQuestion>,
}

/// A missing topic is rejected before any external call. A reply the
/// generator could not parse still answers 200 with an empty array; only a
/// failed API call becomes a 500.
async fn generate_questions(
    State(state): State<AppState>,
    Json(body): Json<GenerateQuestionsBody>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let topic = body
        .topic
        .filter(|t| !t.is_empty())
        .ok_or(AppError::Input("Por favor, proporciona un tema."))?;

    let questions = state
        .openai
        .generate_questions(&topic)
        .await
        .reject("Hubo un problema al generar las preguntas.")?;

    Ok(Json(QuestionsResponse { questions }))
}
