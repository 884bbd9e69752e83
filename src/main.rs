use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use timetable_api::{ApiState, config::ApiConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;
    init_tracing(config.log_level)?;

    // Open the configured store once; every request shares it
    let state = ApiState::connect(&config.storage).await?;

    // Start API server
    timetable_api::start_server(config, Arc::new(state)).await?;

    Ok(())
}
