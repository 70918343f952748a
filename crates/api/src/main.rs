use std::time::Duration;

use anyhow::{Context, Result};
use atlas_api::{build_app, ApiConfig};
use atlas_observability::init_tracing;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "atlas-api")]
#[command(about = "Serves the Atlas trip planner page and estimate endpoint")]
struct ServeArgs {
    #[arg(long, env = "ATLAS_BIND", default_value = "0.0.0.0:8080")]
    bind: String,
    #[arg(long, env = "ATLAS_RATE_LIMIT_WINDOW_SECONDS", default_value_t = 60)]
    rate_limit_window_seconds: u64,
    #[arg(long, env = "ATLAS_RATE_LIMIT_MAX", default_value_t = 120)]
    rate_limit_max: usize,
}

impl From<ServeArgs> for ApiConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            rate_limit_window: Duration::from_secs(args.rate_limit_window_seconds),
            rate_limit_max: args.rate_limit_max,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("atlas_api");

    let config = ApiConfig::from(ServeArgs::parse());
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(bind = %config.bind, "atlas trip planner started");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "atlas-api",
            "--bind",
            "127.0.0.1:9000",
            "--rate-limit-window-seconds",
            "30",
        ])
        .unwrap();
        let config = ApiConfig::from(args);

        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.rate_limit_window, Duration::from_secs(30));
        assert_eq!(config.rate_limit_max, ApiConfig::default().rate_limit_max);
    }
}
