//! # FAQ Server
//!
//! Entry point: loads configuration, initialises tracing, and serves the API.

use faq_config::ConfigLoader;
use faq_core::telemetry::{init_tracing, LogFormat};
use faq_core::FaqResult;
use faq_server::app::App;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> FaqResult<()> {
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_tracing(
        &config.observability.log_level,
        LogFormat::from_config(&config.observability.log_format),
    )?;

    info!("Starting FAQ server v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    App::new(config).run().await
}
