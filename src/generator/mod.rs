use crate::config::Config;
use crate::model::{ChatMessage, TaskPlan};
use anyhow::Result;
use async_trait::async_trait;
use rig::providers::{anthropic, gemini, openai};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

pub use error::GeneratorError;
pub use rig_generator::RigGenerator;

mod error;
mod rig_generator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    TextDelta(String),
    Done,
    Error(String),
}

/// Hosted completion backend used in live mode.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Streams the answer to the last message of `messages` into `tx` and
    /// returns the full text once the backend finishes.
    async fn stream_chat(
        &self,
        system: &str,
        messages: &[ChatMessage],
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<String, GeneratorError>;

    async fn generate_text(&self, prompt: &str) -> Result<String, GeneratorError>;

    async fn generate_plan(&self, prompt: &str) -> Result<TaskPlan, GeneratorError>;
}

/// Returns `None` when no credential is configured, which puts every route in demo mode.
pub fn create_generator(config: &Config) -> Result<Option<Arc<dyn Generator>>> {
    let Some(api_key) = config.api_key.as_ref() else {
        info!("No generation API key configured, serving demo responses");
        return Ok(None);
    };

    info!(
        "Using {} backend with model {}",
        config.api_provider, config.model
    );

    let generator: Arc<dyn Generator> = match config.api_provider.as_str() {
        "openai" => {
            let client: openai::CompletionsClient = openai::CompletionsClient::builder()
                .api_key(api_key)
                .base_url(&config.api_url)
                .build()?;
            Arc::new(RigGenerator::new(client, &config.model))
        }
        "gemini" => {
            let client = gemini::Client::new(api_key)?;
            Arc::new(RigGenerator::new(client, &config.model))
        }
        _ => {
            let client: anthropic::Client = anthropic::Client::builder()
                .api_key(api_key)
                .base_url(&config.api_url)
                .build()?;
            Arc::new(RigGenerator::new(client, &config.model))
        }
    };

    Ok(Some(generator))
}
