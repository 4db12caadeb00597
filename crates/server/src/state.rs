use textbrief_common::{AppConfig, Result};
use textbrief_llm::{CompletionClient, Summarizer};

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization orchestrator
    pub summarizer: Summarizer,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = CompletionClient::new(&config)?;

        Ok(Self {
            config,
            summarizer: Summarizer::new(client),
        })
    }
}
