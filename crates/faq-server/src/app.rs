//! Application runner.

use crate::di::{build_faq_module, DatabaseResolver};
use crate::startup::print_startup_info;
use faq_config::AppConfig;
use faq_core::{FaqError, FaqResult};
use faq_rest::create_router;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

/// Wires the components described by the configuration and serves HTTP.
pub struct App {
    config: AppConfig,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Runs until Ctrl+C or SIGTERM, then drains connections and closes the pool.
    pub async fn run(self) -> FaqResult<()> {
        let config = self.config;

        let module = build_faq_module(&config).await?;
        let database = module.database_pool();

        if config.database.run_migrations {
            database.run_migrations().await?;
        }

        let router = create_router(module.as_ref(), &config.server);

        let addr = config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| FaqError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&config);
        info!("Listening on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| FaqError::Internal(format!("HTTP server error: {}", e)))?;

        database.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
