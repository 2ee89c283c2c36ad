use blogmentor_common::{AppConfig, Result};
use blogmentor_llm::{GeminiClient, TextGenerator};
use blogmentor_post::GenerationState;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Generation backend. None when no credential is configured, which
    /// fails a submission locally before any network attempt.
    pub generator: Option<Arc<dyn TextGenerator>>,

    /// The single submission session
    pub session: RwLock<GenerationState>,

    /// Server start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let generator: Option<Arc<dyn TextGenerator>> = match &config.gemini_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(
                &config.gemini_base_url,
                &config.gemini_model,
                key,
            )?)),
            None => {
                warn!("GEMINI_API_KEY is not set; submissions will fail without a network call");
                None
            }
        };

        Ok(Self::with_generator(config, generator))
    }

    /// Create state with an explicit generation backend (tests use a stub)
    pub fn with_generator(config: AppConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            config,
            generator,
            session: RwLock::new(GenerationState::Idle),
            started_at: Utc::now(),
        }
    }
}
