//! jobchat API server binary.
//!
//! Reads settings from flags, the environment and an optional `.env` file,
//! then serves the chat relay until interrupted.

use std::time::Duration;

use clap::Parser;
use jobchat_api::AppState;
use jobchat_api::config::ApiConfig;
use jobchat_core::config::{CompletionConfig, DEFAULT_MODEL};
use jobchat_core::sanitize::DEFAULT_MAX_INPUT_CHARS;
use jobchat_core::truncate::DEFAULT_MAX_SENTENCES;
use tracing::{info, warn};

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "jobchat_api_server", about = "jobchat API server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Completion API key.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Completion API URL (full chat completions endpoint).
    #[arg(long, env = "GROQ_API_URL")]
    api_url: Option<String>,

    /// Model identifier sent with every request.
    #[arg(long, env = "GROQ_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Outbound request timeout in seconds (0 = no timeout).
    #[arg(long, env = "COMPLETION_TIMEOUT_SECS", default_value_t = 30)]
    request_timeout_secs: u64,

    /// Maximum characters of user input forwarded upstream.
    #[arg(long, env = "MAX_INPUT_CHARS", default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    max_input_chars: usize,

    /// Maximum sentences returned in a reply.
    #[arg(long, env = "MAX_REPLY_SENTENCES", default_value_t = DEFAULT_MAX_SENTENCES)]
    max_sentences: usize,
}

impl Args {
    fn into_config(self) -> ApiConfig {
        let timeout = (self.request_timeout_secs > 0)
            .then(|| Duration::from_secs(self.request_timeout_secs));

        let completion = CompletionConfig::new(self.api_key, self.api_url)
            .with_model(self.model)
            .with_request_timeout(timeout);

        ApiConfig {
            bind_addr: format!("{}:{}", self.host, self.port),
            completion,
            max_input_chars: self.max_input_chars,
            max_sentences: self.max_sentences,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jobchat_api=debug,jobchat_core=debug".into()),
        )
        .init();

    let config = Args::parse().into_config();

    info!(
        bind_addr = %config.bind_addr,
        completion = ?config.completion,
        max_input_chars = config.max_input_chars,
        max_sentences = config.max_sentences,
        "starting jobchat_api_server"
    );

    if let Err(e) = config.completion.endpoint() {
        warn!("{e} /chat will answer with a configuration error until it is set");
    }

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config)?;
    let app = jobchat_api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %listener.local_addr()?, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
