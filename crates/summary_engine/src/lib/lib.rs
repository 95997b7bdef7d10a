mod config;
mod error;
mod length;
mod llm;
pub mod server;
mod summarize;
pub mod tracing;

pub use config::{LengthTable, SummarizerConfig, DEFAULT_MODEL};
pub use error::SummarizeError;
pub use length::{LengthSpec, SummaryLength};
pub use llm::openai;
pub use llm::{
    CompletionBackend, CompletionChoice, CompletionMessage, CompletionRequest, CompletionResponse,
};
pub use summarize::{Summarizer, SummaryResult};
