use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::models::AnsweredQuestion;
use crate::rejections::{AppError, ResultExt};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/quiz-result", post(save_quiz_result))
}

#[derive(Deserialize)]
struct SaveResultBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    questions: Vec<AnsweredQuestion>,
}

#[derive(Serialize)]
struct SavedResponse {
    message: &'static str,
}

/// `name` is deserialized as optional on purpose: the store enforces it, so
/// a missing name surfaces as a store failure (500), matching the original
/// service. See DESIGN.md.
async fn save_quiz_result(
    State(state): State<AppState>,
    Json(body): Json<SaveResultBody>,
) -> Result<Json<SavedResponse>, AppError> {
    state
        .store
        .save_result(body.name, body.questions)
        .await
        .reject("Error al guardar el resultado")?;

    Ok(Json(SavedResponse {
        message: "Resultado guardado correctamente",
    }))
}
