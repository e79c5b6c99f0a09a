//! Word Insight Chat
//!
//! Entry point: `serve` runs the analysis server, `chat` starts an
//! interactive terminal session against one.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use word_insight_chat::client::{ChatClient, HttpEndpoint, terminal};
use word_insight_chat::config::{AppConfig, ClientConfig, Cli, Command};
use word_insight_chat::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();

    // The chat session owns stdout, so it only logs warnings by default.
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        Command::Chat { .. } => "warn",
    };
    init_tracing(cli.log_json, default_level);

    let config = match AppConfig::from_cli(&cli) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Serve { .. } => start_server(config).await,
        Command::Chat { .. } => run_chat(&config.client).await,
    }
}

/// Initialize tracing (M-LOG-STRUCTURED). Logs go to stderr.
fn init_tracing(json: bool, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

async fn run_chat(config: &ClientConfig) -> anyhow::Result<()> {
    let endpoint = match config.request_timeout() {
        Some(timeout) => HttpEndpoint::with_timeout(&config.endpoint, timeout)?,
        None => HttpEndpoint::new(&config.endpoint)?,
    };

    info!(
        name: "chat.started",
        endpoint = %endpoint.chat_url(),
        "Chat session started"
    );

    let mut client = ChatClient::new(Arc::new(endpoint));
    let stdin = BufReader::new(tokio::io::stdin());
    terminal::run(&mut client, stdin, tokio::io::stdout()).await?;

    info!(
        name: "chat.finished",
        entries = client.transcript().len(),
        "Chat session finished"
    );
    Ok(())
}
