//! mindful-chat - supportive wellbeing chat assistant for students
//!
//! Scores each message for sentiment, maps it to a mood, and replies with an
//! empathetic message and study-friendly tips, or emergency resources when a
//! message signals a crisis.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use mindful_chat::config::{self, Config, FileConfig, Overrides};

#[derive(Parser)]
#[command(name = "mindful-chat")]
#[command(about = "Supportive wellbeing chat assistant for students")]
struct Args {
    /// Bind host
    #[arg(long, env = "MINDFUL_HOST")]
    host: Option<String>,

    /// HTTP port (default: 3000)
    #[arg(long, short = 'p', env = "PORT")]
    port: Option<u16>,

    /// Directory of static assets served at /
    #[arg(long, env = "MINDFUL_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Number of mood history entries kept in memory (default: 50)
    #[arg(long, env = "MINDFUL_HISTORY_CAPACITY")]
    history_capacity: Option<usize>,

    /// Allowed CORS origin (any origin when unset)
    #[arg(long, env = "MINDFUL_CORS_ORIGIN")]
    cors_origin: Option<String>,

    /// Config file (default: ~/.mindful/config.toml)
    #[arg(long, env = "MINDFUL_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mindful_chat=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::config_path);
    let file = FileConfig::load(&config_path);

    let overrides = Overrides {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
        history_capacity: args.history_capacity,
        cors_origin: args.cors_origin,
    };
    let config = Config::resolve(overrides, file)?;

    info!("Starting mindful-chat {}", env!("CARGO_PKG_VERSION"));
    mindful_chat::server::run(config).await
}
