use std::sync::LazyLock;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use regex::Regex;
use serde_json::{json, Value};

use crate::models::GeneratedQuestion;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";
const QUESTION_MAX_TOKENS: u32 = 600;
const QUESTION_TEMPERATURE: f64 = 0.7;

/// Client for the OpenAI chat-completion API. Constructed once at startup;
/// the inner `reqwest::Client` is shared by all requests.
#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Ask the model for 5 multiple-choice questions about `topic` and pull
    /// the question array out of its free-text reply. An unparseable reply
    /// yields an empty list, not an error; only the API call itself can fail.
    pub async fn generate_questions(&self, topic: &str) -> Result<Vec<GeneratedQuestion>> {
        let prompt = format!(
            "Genera 5 preguntas de opción múltiple sobre \"{topic}\". \
             Para cada pregunta, da 1 respuesta correcta y 3 incorrectas. \
             Formato JSON: [{{\"question\":\"...\",\"correctAnswer\":\"...\",\
             \"incorrectAnswers\":[\"...\",\"...\",\"...\"]}}]"
        );

        let payload = json!({
            "model": MODEL,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": QUESTION_MAX_TOKENS,
            "temperature": QUESTION_TEMPERATURE,
        });

        let completion = self.chat_completion(payload).await?;
        let content = message_content(&completion)?;

        Ok(extract_question_array(content))
    }

    /// Relay a single user message and return the assistant's reply text.
    pub async fn chat(&self, message: &str) -> Result<String> {
        let payload = json!({
            "model": MODEL,
            "messages": [{ "role": "user", "content": message }],
        });

        let completion = self.chat_completion(payload).await?;
        Ok(message_content(&completion)?.to_string())
    }

    /// One chat-completion round trip. No retry and no timeout beyond the
    /// transport defaults.
    async fn chat_completion(&self, payload: Value) -> Result<Value> {
        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {status} - {text}");
            color_eyre::eyre::bail!("OpenAI API returned {status}");
        }

        Ok(resp.json().await?)
    }
}

fn message_content(completion: &Value) -> Result<&str> {
    completion
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| eyre!("completion response carried no message content"))
}

static QUESTION_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*\]").expect("static pattern"));

/// Pull the first `[` through the last `]` out of the model's reply and
/// parse the span as a JSON question array. Any failure degrades to an empty
/// list; callers treat that as "no questions", never as an error.
pub fn extract_question_array(text: &str) -> Vec<GeneratedQuestion> {
    let Some(found) = QUESTION_ARRAY.find(text) else {
        tracing::warn!("model reply contained no JSON array");
        return Vec::new();
    };

    match serde_json::from_str(found.as_str()) {
        Ok(questions) => questions,
        Err(e) => {
            tracing::warn!("model reply JSON did not parse: {e}");
            Vec::new()
        }
    }
}
