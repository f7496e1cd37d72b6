//! API server implementation

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::routes::{AppState, router};

/// Skills Builder API server
pub struct Server {
    config: AppConfig,
    state: AppState,
}

impl Server {
    /// Create a server from validated configuration.
    pub fn new(config: AppConfig) -> skills_core::Result<Self> {
        config.validate()?;
        let state = AppState::from_config(&config)?;
        Ok(Self { config, state })
    }

    /// The configuration the server was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM.
    pub async fn serve(self) -> skills_core::Result<()> {
        let listener = TcpListener::bind(self.config.server.bind).await?;
        self.serve_on(listener).await
    }

    /// Serve on an already-bound listener until Ctrl-C or SIGTERM.
    pub async fn serve_on(self, listener: TcpListener) -> skills_core::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            addr = %addr,
            icons_route = %self.config.server.icons_route,
            redirect_policy = %self.config.redirect.policy,
            asset_failure = %self.config.upstream.asset_failure,
            "Skills API listening"
        );

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Skills API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
