//! Google Gemini `generateContent` envelope.

use serde::Deserialize;
use serde_json::json;

use super::transport::HttpRequest;
use crate::settings::ModelOption;

pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const GENERATE_METHOD: &str = "generateContent";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Builds the generation request. The key travels in the query string.
pub fn generation_request(model: &str, key: &str, prompt: &str) -> HttpRequest {
    HttpRequest::post(
        format!("{API_BASE}/models/{model}:{GENERATE_METHOD}?key={key}"),
        json!({ "contents": [{ "parts": [{ "text": prompt }] }] }),
    )
}

/// Reads `candidates[0].content.parts[0].text`, trimmed.
pub fn extract_text(body: &str) -> Result<String, String> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| format!("invalid JSON: {e}"))?;

    response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| "no candidates".to_string())?
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| "candidate has no text part".to_string())
}

pub fn catalog_request(key: &str) -> HttpRequest {
    HttpRequest::get(format!("{API_BASE}/models?key={key}"))
}

/// Keeps models that support content generation, named without the `models/` prefix.
pub fn parse_catalog(body: &str) -> Result<Vec<ModelOption>, String> {
    let list: ModelList = serde_json::from_str(body).map_err(|e| format!("invalid JSON: {e}"))?;

    Ok(list
        .models
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_METHOD)
        })
        .map(|m| {
            let short = m.name.strip_prefix("models/").unwrap_or(&m.name);
            ModelOption::new(short, short)
        })
        .collect())
}
