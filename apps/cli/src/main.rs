use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vocab_core::seed::parse_seed;
use vocab_core::types::SeedEntry;
use vocab_trainer_cli::client::ApiClient;
use vocab_trainer_cli::session::Trainer;
use vocab_trainer_cli::terminal;

#[derive(Parser)]
#[command(name = "vocab-trainer")]
#[command(about = "Spaced-repetition vocabulary trainer for the terminal")]
#[command(version)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "VOCAB_BACKEND_URL", default_value = "http://localhost:3000")]
    backend_url: String,

    /// Seed vocabulary posted when the backend is empty
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let seed = match &cli.seed {
        Some(path) => read_seed(path).await,
        None => Vec::new(),
    };

    let mut trainer = Trainer::new(ApiClient::new(cli.backend_url));
    let mut session = trainer.start(&seed).await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    terminal::run(&mut trainer, &mut session, stdin, stdout.lock()).await?;

    Ok(())
}

/// A missing or malformed seed file leaves the seed list empty.
async fn read_seed(path: &Path) -> Vec<SeedEntry> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Failed to read seed file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match parse_seed(&content) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to parse seed file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
