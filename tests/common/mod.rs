use quizgen::db::Store;
use quizgen::openai::OpenAiClient;
use quizgen::AppState;

/// State wired like production, but pointing at a database and API key that
/// are never reached: every route under test answers before the first
/// outbound call.
pub async fn test_state() -> AppState {
    let store = Store::connect("mongodb://localhost:27017/quizgen-test")
        .await
        .expect("test connection string should parse");

    AppState {
        store,
        openai: OpenAiClient::new("test-key".to_string()),
    }
}
