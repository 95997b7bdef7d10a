use crate::{llm::openai::OpenAIClient, summarize::Summarizer};

/// Shared application state. The summarizer handle is read-only and safe
/// to use from concurrent requests.
pub struct AppState<B = OpenAIClient> {
    pub summarizer: Summarizer<B>,
}
