use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use textbrief_common::{AppConfig, Result, TextBriefError};
use tracing::{debug, warn};

use crate::prompts::PROBE_MESSAGE;
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Identifying user agent sent with every provider call
const CLIENT_USER_AGENT: &str = concat!("textbrief/", env!("CARGO_PKG_VERSION"));

/// Token budget for liveness probe calls
const PROBE_MAX_TOKENS: u32 = 5;

/// Chat-completion API client
#[derive(Debug, Clone)]
pub struct CompletionClient {
    base_url: String,
    model: String,
    max_retries: u32,
    client: reqwest::Client,
}

impl CompletionClient {
    /// Create a new client from application configuration
    ///
    /// The bearer token and user agent become static default headers;
    /// nothing mutates them after construction.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.openai_api_key))
            .map_err(|e| TextBriefError::config(format!("Invalid API key header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| TextBriefError::config(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Completion client initialized: {}", config.openai_base_url);

        Ok(Self {
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            max_retries: config.max_retries.max(1),
            client,
        })
    }

    /// Configured chat model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Execute a chat-completion call (with retry)
    pub async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending completion request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.try_complete(&url, request).await {
                Ok(response) => {
                    debug!(
                        "Received completion response - Choices: {}",
                        response.choices.len()
                    );
                    return Ok(response);
                }
                Err(e) => {
                    if attempt < self.max_retries && is_retriable(&e) {
                        let delay = Duration::from_secs(2u64.pow(attempt - 1));
                        warn!(
                            "Completion request failed (attempt {}/{}): {}. Retrying in {:?}...",
                            attempt, self.max_retries, e, delay
                        );
                        last_error = Some(e);
                        tokio::time::sleep(delay).await;
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| TextBriefError::internal("All retries failed")))
    }

    /// Single completion attempt
    async fn try_complete(&self, url: &str, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextBriefError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            TextBriefError::malformed_reply(format!("Undecodable provider reply: {}", e))
        })
    }

    /// Minimal completion call reporting provider liveness
    ///
    /// Success is judged purely on HTTP status; the reply content is
    /// never inspected. Makes a single call, no retry.
    pub async fn probe(&self) -> bool {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(PROBE_MESSAGE)],
            max_tokens: PROBE_MAX_TOKENS,
            temperature: None,
        };

        match self.client.post(&url).json(&request).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Provider probe failed: {}", e);
                false
            }
        }
    }
}

/// Map a transport-level failure onto the error taxonomy
///
/// A timeout is reported as its own kind so callers can distinguish a
/// slow provider from an unreachable one.
fn classify_transport_error(e: reqwest::Error) -> TextBriefError {
    if e.is_timeout() {
        TextBriefError::Timeout
    } else {
        TextBriefError::network(e.to_string())
    }
}

/// Retry only failures that can plausibly clear on their own
fn is_retriable(error: &TextBriefError) -> bool {
    match error {
        TextBriefError::Timeout | TextBriefError::Network(_) => true,
        TextBriefError::Provider { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}
