//! Application startup and lifecycle management.

use crate::config::QaConfig;
use crate::services::{KnowledgeBase, ModelService, QuestionProcessor, QuestionValidator};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
    model: Arc<ModelService>,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: QaConfig) -> Result<Self, AppError> {
        tracing::info!(
            service = %config.service_name,
            version = %config.service_version,
            "Application startup initiated"
        );

        let model = Arc::new(ModelService::new(config.classifier.model_name.clone()));
        if config.classifier.load_on_startup {
            model.load_model();
        } else {
            tracing::warn!(
                model = %config.classifier.model_name,
                "Model loading deferred - question endpoint will report unavailable"
            );
        }

        let processor = QuestionProcessor::new(
            QuestionValidator::new(&config.validation),
            model.clone(),
            KnowledgeBase::standard(),
        );

        let state = AppState {
            config: config.clone(),
            processor: Arc::new(processor),
        };

        // Port 0 binds a random port for testing
        let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
            .parse()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid listen address {}:{}: {}",
                    config.common.host,
                    config.common.port,
                    e
                ))
            })?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
            model,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Handle to the classification model, for toggling readiness.
    pub fn model(&self) -> Arc<ModelService> {
        self.model.clone()
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let service_name = self.state.config.service_name.clone();
        let router = build_router(self.state);

        tracing::info!(service = %service_name, port = self.port, "Listening");

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, application shutdown initiated");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, application shutdown initiated");
        },
    }
}
