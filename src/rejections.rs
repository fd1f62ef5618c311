use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Errors a handler can surface to a client. The carried message is the
/// public one; anything sensitive has already been logged where the error
/// was translated.
#[derive(Debug)]
pub enum AppError {
    Input(&'static str),
    Internal(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Input(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (code, Json(json!({ "error": message }))).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error with its full detail and replace it with a generic 500.
    fn reject(self, message: &'static str) -> Result<T, AppError>;

    /// Log the error with its full detail and replace it with a 400.
    fn reject_input(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }

    fn reject_input(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Input(message)
        })
    }
}

/// Final fallback for anything that escapes a handler. Clients get the same
/// generic body as any other 500; the panic payload stays in the logs.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("request handler panicked: {detail}");

    let body = json!({ "error": "Algo salió mal!" }).to_string();
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}
