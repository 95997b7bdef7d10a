use serde::Serialize;

use crate::{
    config::SummarizerConfig,
    error::SummarizeError,
    length::{LengthSpec, SummaryLength},
    llm::{openai::OpenAIClient, CompletionBackend, CompletionRequest, CompletionResponse},
};

const SYSTEM_PROMPT: &str = include_str!("./prompts/system.txt");

/// Kept low so repeated runs over the same text stay close to each other.
const TEMPERATURE: f64 = 0.2;

/// Uniform result payload. `summary` is meaningful iff `success`, `error`
/// iff not; both fields are always present.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    pub success: bool,
    pub summary: String,
    pub error: String,
}

impl SummaryResult {
    fn ok(summary: impl Into<String>) -> Self {
        SummaryResult {
            success: true,
            summary: summary.into(),
            error: String::new(),
        }
    }

    fn err(error: impl std::fmt::Display) -> Self {
        SummaryResult {
            success: false,
            summary: String::new(),
            error: error.to_string(),
        }
    }
}

/// Builds a length-controlled prompt, performs exactly one completion call,
/// and normalizes the outcome into a [`SummaryResult`].
///
/// ```no_run
/// # async fn run() {
/// use summary_engine::{Summarizer, SummarizerConfig, LengthSpec};
///
/// let summarizer = Summarizer::new(SummarizerConfig::from_env());
/// let result = summarizer
///     .summarize("text to summarize...", &LengthSpec::default(), "en")
///     .await;
/// if result.success {
///     println!("{}", result.summary);
/// } else {
///     println!("Error: {}", result.error);
/// }
/// # }
/// ```
pub struct Summarizer<B = OpenAIClient> {
    // Decided once at construction; summarize reports the stored error
    // without touching the network when the backend is unavailable.
    backend: Result<B, SummarizeError>,
    config: SummarizerConfig,
}

impl Summarizer<OpenAIClient> {
    pub fn new(config: SummarizerConfig) -> Self {
        let backend = match config.api_key.as_deref() {
            None | Some("") => Err(SummarizeError::MissingCredential),
            Some(api_key) => OpenAIClient::new(api_key, &config.model, config.timeout)
                .map_err(|e| {
                    tracing::error!(error = %e, "Failed to construct OpenAI client");
                    SummarizeError::ClientUnavailable
                }),
        };
        Summarizer { backend, config }
    }

    pub fn from_env() -> Self {
        Summarizer::new(SummarizerConfig::from_env())
    }
}

impl<B: CompletionBackend> Summarizer<B> {
    /// Construction with an explicit backend, bypassing the credential
    /// check. Used by tests and by embedders with their own client.
    pub fn with_backend(config: SummarizerConfig, backend: B) -> Self {
        Summarizer {
            backend: Ok(backend),
            config,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Produces a summary of `text` at the requested length, in the
    /// requested language. Never fails outright: every error is folded
    /// into the returned [`SummaryResult`].
    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn summarize(
        &self,
        text: &str,
        length: &LengthSpec,
        language: &str,
    ) -> SummaryResult {
        if text.trim().is_empty() {
            return SummaryResult::err(SummarizeError::EmptyInput);
        }

        let backend = match &self.backend {
            Ok(backend) => backend,
            Err(unavailable) => return SummaryResult::err(unavailable),
        };

        let length = SummaryLength::from_spec(length);
        let request = CompletionRequest {
            system: SYSTEM_PROMPT.trim().to_string(),
            user: build_user_prompt(&length, language, text),
            temperature: TEMPERATURE,
            max_tokens: length.max_tokens(&self.config.lengths),
        };

        match backend.complete(request).await {
            Ok(response) => match extract_summary(&response) {
                Ok(summary) => SummaryResult::ok(summary),
                Err(e) => {
                    tracing::error!(error = %e, "Completion returned no usable content");
                    SummaryResult::err(e)
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Completion request failed");
                SummaryResult::err(SummarizeError::RemoteCall(e.to_string()))
            }
        }
    }
}

fn build_user_prompt(length: &SummaryLength, language: &str, text: &str) -> String {
    format!(
        "{instruction}\n\
         Respond in {language}.\n\
         Original text:\n\
         {text}\n\n\
         If the original is very short, restate its key points directly; \
         keep important keywords and core information.",
        instruction = length.instruction(),
    )
}

/// Single normalization point for the completion response: the summary is
/// `choices[0].message.content`, trimmed. No choice, or blank content, is
/// reported as missing model output.
fn extract_summary(response: &CompletionResponse) -> Result<String, SummarizeError> {
    let content = response
        .choices
        .first()
        .and_then(|choice| choice.message.content.as_deref())
        .unwrap_or_default()
        .trim();

    if content.is_empty() {
        return Err(SummarizeError::EmptyModelOutput);
    }
    Ok(content.to_string())
}
