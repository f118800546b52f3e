use std::process::ExitCode;

use fixture_site::config::Config;
use fixture_site::handler::handler;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Structured logging; RUST_LOG overrides the default level.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(days_ahead = config.days_ahead, output = %config.output_dir.display(), "Starting site generation");

    match handler(config, chrono::Utc::now()).await {
        Ok(response) => {
            info!(files = response.files.len(), "{}", response.message);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Site generation failed");
            ExitCode::FAILURE
        }
    }
}
