use anyhow::Result;
use tracing_subscriber::EnvFilter;

use citydash::{AppConfig, AppState, config, web};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app_config = AppConfig::from_env();
    let state = AppState::from_config(&app_config)?;

    web::run(state, config::PORT).await
}
