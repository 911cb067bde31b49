//! Scripted transport for exercising the gateway without a network.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

/// Replays scripted responses and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    #[must_use]
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".to_string())))
    }
}

pub fn gemini_body(text: &str) -> String {
    serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
        .to_string()
}

pub fn openrouter_body(text: &str) -> String {
    serde_json::json!({ "choices": [{ "message": { "role": "assistant", "content": text } }] })
        .to_string()
}
