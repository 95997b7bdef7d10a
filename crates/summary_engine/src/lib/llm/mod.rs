pub mod openai;

use std::{fmt::Display, future::Future};

use serde::Deserialize;

/// Seam between the summarizer and the hosted chat-completion endpoint.
/// Implemented by [`openai::OpenAIClient`] in production and by mock
/// backends in tests.
pub trait CompletionBackend {
    type Error: Display + Send;

    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<CompletionResponse, Self::Error>> + Send;
}

/// One fully-shaped chat-completion request: a system instruction, the
/// combined user prompt, and sampling/budget parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}
