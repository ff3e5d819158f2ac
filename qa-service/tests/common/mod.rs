#![allow(dead_code)]

use qa_service::config::{
    ClassifierConfig, Environment, QaConfig, SwaggerConfig, ValidationConfig,
};
use qa_service::services::{
    Classifier, KnowledgeBase, ModelService, QuestionProcessor, QuestionValidator,
};
use qa_service::startup::Application;
use qa_service::{build_router, AppState};
use service_core::config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    model: Option<Arc<ModelService>>,
}

pub fn test_config(load_on_startup: bool) -> QaConfig {
    QaConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        environment: Environment::Dev,
        service_name: "smart-qa-portal".to_string(),
        service_version: "0.1.0".to_string(),
        log_level: "info".to_string(),
        otlp_endpoint: None,
        validation: ValidationConfig::default(),
        classifier: ClassifierConfig {
            model_name: "qa_categorizer_v1".to_string(),
            load_on_startup,
        },
        swagger: SwaggerConfig { enabled: true },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(true).await
    }

    /// Spawn with the classification model left unloaded.
    pub async fn spawn_unready() -> Self {
        Self::spawn_with(false).await
    }

    async fn spawn_with(load_on_startup: bool) -> Self {
        let app = Application::build(test_config(load_on_startup))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());
        let model = app.model();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self::wait_until_up(address, Some(model)).await
    }

    /// Serve the router around a caller-supplied classifier.
    pub async fn spawn_with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        let config = test_config(true);
        let processor = QuestionProcessor::new(
            QuestionValidator::new(&config.validation),
            classifier,
            KnowledgeBase::standard(),
        );
        let router = build_router(AppState {
            config,
            processor: Arc::new(processor),
        });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!(
            "http://127.0.0.1:{}",
            listener.local_addr().expect("No local address").port()
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self::wait_until_up(address, None).await
    }

    async fn wait_until_up(address: String, model: Option<Arc<ModelService>>) -> Self {
        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            client,
            model,
        }
    }

    /// Handle to the model of an app started through `Application`.
    pub fn model(&self) -> &ModelService {
        self.model
            .as_deref()
            .expect("App was spawned with a custom classifier")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
