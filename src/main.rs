use anyhow::Result;
use asha::cli::{handle_command, Cli};
use asha::core::ConfigManager;
use clap::Parser;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(json_logs.then(|| {
            fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
        }))
        .with((!json_logs).then(|| fmt::layer()))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("asha=info,rocket=warn")),
        )
        .init();

    let config = ConfigManager::load()?;

    handle_command(cli, config).await
}
