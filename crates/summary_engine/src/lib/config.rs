use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Character targets for the symbolic length tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthTable {
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl Default for LengthTable {
    fn default() -> Self {
        LengthTable {
            short: 100,
            medium: 300,
            long: 600,
        }
    }
}

/// Immutable summarizer configuration, fixed at construction.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Declared input cap. Not enforced on the summarize path; the web form
    /// applies its own client-side limit.
    pub max_input_length: usize,
    pub lengths: LengthTable,
    pub timeout: Duration,
    /// Accepted for compatibility. The request path performs a single
    /// attempt and never loops on this value.
    pub max_retries: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        SummarizerConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_input_length: 4000,
            lengths: LengthTable::default(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

impl SummarizerConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        SummarizerConfig {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            model: std::env::var("OPENAI_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_input_length: env_or("MAX_INPUT_LENGTH", 4000),
            lengths: LengthTable {
                short: env_or("SUMMARY_LENGTH_SHORT", 100),
                medium: env_or("SUMMARY_LENGTH_MEDIUM", 300),
                long: env_or("SUMMARY_LENGTH_LONG", 600),
            },
            timeout: Duration::from_secs(env_or("REQUEST_TIMEOUT_SECS", 30)),
            max_retries: env_or("MAX_RETRIES", 2),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
