use std::{net::SocketAddr, sync::Arc, time::Duration};

use clap::Parser;
use summary_engine::{
    server::{create_router, AppState},
    tracing::init_tracing_subscriber,
    LengthTable, Summarizer, SummarizerConfig,
};

#[derive(Parser)]
#[command(name = "summary-web", about = "Length-controlled text summarizer web UI")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: Option<String>,

    /// Chat-completion model to use
    #[arg(long, env = "OPENAI_MODEL_NAME", default_value = "gpt-4o-mini")]
    model: String,

    /// Declared input cap (not enforced on the summarize path)
    #[arg(long, env = "MAX_INPUT_LENGTH", default_value = "4000")]
    max_input_length: usize,

    /// Character target for "short" summaries
    #[arg(long, env = "SUMMARY_LENGTH_SHORT", default_value = "100")]
    length_short: u32,

    /// Character target for "medium" summaries
    #[arg(long, env = "SUMMARY_LENGTH_MEDIUM", default_value = "300")]
    length_medium: u32,

    /// Character target for "long" summaries
    #[arg(long, env = "SUMMARY_LENGTH_LONG", default_value = "600")]
    length_long: u32,

    /// Request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Accepted for compatibility; the request path performs a single attempt
    #[arg(long, env = "MAX_RETRIES", default_value = "2")]
    max_retries: u32,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "7860")]
    port: u16,

    /// Host to bind
    #[arg(long, env = "SERVER_NAME", default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = SummarizerConfig {
        api_key: cli.openai_key.filter(|key| !key.is_empty()),
        model: cli.model,
        max_input_length: cli.max_input_length,
        lengths: LengthTable {
            short: cli.length_short,
            medium: cli.length_medium,
            long: cli.length_long,
        },
        timeout: Duration::from_secs(cli.timeout_secs),
        max_retries: cli.max_retries,
    };

    if config.api_key.is_none() {
        tracing::warn!(
            "OPENAI_API_KEY is not set; summarize requests will fail until it is configured"
        );
    }

    let state = Arc::new(AppState {
        summarizer: Summarizer::new(config),
    });
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    tracing::info!(%addr, "Starting summary-web server...");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
