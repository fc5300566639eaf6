use tracing_subscriber::EnvFilter;
use urlshort::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present; real environments set variables directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load_from_env()?;
    config.print_summary();

    server::run(config).await
}
