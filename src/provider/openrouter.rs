//! OpenRouter chat-completions envelope.

use serde::{Deserialize, Serialize};

use super::transport::HttpRequest;
use crate::settings::ModelOption;

pub const API_BASE: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    id: String,
    name: Option<String>,
}

/// Builds the completion request with the key as a bearer token.
pub fn generation_request(model: &str, key: &str, prompt: &str) -> HttpRequest {
    let body = ChatCompletionRequest {
        model,
        messages: [Message {
            role: "user",
            content: prompt,
        }],
    };
    // Serializing plain strings cannot fail.
    let body = serde_json::to_value(&body).unwrap_or_default();
    HttpRequest::post(format!("{API_BASE}/chat/completions"), body).bearer(key)
}

/// Reads `choices[0].message.content`, trimmed.
pub fn extract_text(body: &str) -> Result<String, String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|e| format!("invalid JSON: {e}"))?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| "no choices".to_string())?
        .message
        .and_then(|message| message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| "choice has no message content".to_string())
}

/// The model list is public; no key is sent.
pub fn catalog_request() -> HttpRequest {
    HttpRequest::get(format!("{API_BASE}/models"))
}

pub fn parse_catalog(body: &str) -> Result<Vec<ModelOption>, String> {
    let list: ModelList = serde_json::from_str(body).map_err(|e| format!("invalid JSON: {e}"))?;

    Ok(list
        .data
        .into_iter()
        .map(|m| {
            let label = m.name.unwrap_or_else(|| m.id.clone());
            ModelOption::new(label, m.id)
        })
        .collect())
}
