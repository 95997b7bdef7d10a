/// Everything that can go wrong while producing a summary. All variants are
/// folded into a [`crate::SummaryResult`] at the `summarize` boundary; none
/// propagate to callers.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("no text provided to summarize")]
    EmptyInput,
    #[error(
        "OpenAI API key is not configured (set OPENAI_API_KEY or pass api_key at construction)"
    )]
    MissingCredential,
    #[error("HTTP client could not be constructed; summarization is unavailable")]
    ClientUnavailable,
    #[error("model returned no summary content")]
    EmptyModelOutput,
    #[error("summary generation failed: {0}")]
    RemoteCall(String),
}
