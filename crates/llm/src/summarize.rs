use chrono::Utc;
use textbrief_common::{Result, TextBriefError};
use tracing::{debug, info};

use crate::client::CompletionClient;
use crate::parse::parse_reply;
use crate::prompts::{summarize_prompt, SYSTEM_PROMPT};
use crate::types::{ChatMessage, ChatRequest, SummaryRequest, SummaryResult};

/// Output token budget granted per requested summary character
///
/// Doubled to leave room for the bullet points.
const TOKEN_BUDGET_FACTOR: u32 = 2;

/// Sampling temperature biasing toward deterministic output
const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Text summarization orchestrator
pub struct Summarizer {
    client: CompletionClient,
}

impl Summarizer {
    /// Create a new summarizer
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Summarize text into a synopsis plus bullet points
    ///
    /// Validation failures short-circuit before any outbound call.
    /// An unparseable but non-empty reply degrades via the parser
    /// fallback instead of failing.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        if let Err(errors) = request.validate() {
            return Err(TextBriefError::validation(errors));
        }

        info!(
            "Starting text summarization - Text length: {} chars",
            request.text.chars().count()
        );

        let chat_request = build_chat_request(self.client.model(), request);
        let response = self.client.complete(&chat_request).await?;

        let content = response.first_content().ok_or_else(|| {
            TextBriefError::malformed_reply("Provider reply contained no message content")
        })?;

        let parsed = parse_reply(content);
        let tokens_used = response.usage.as_ref().map(|u| u.total_tokens);

        info!(
            "Text summarization completed - Bullets: {}, Tokens used: {:?}",
            parsed.bullet_points.len(),
            tokens_used
        );

        Ok(SummaryResult {
            summary: parsed.summary,
            bullet_points: parsed.bullet_points,
            processed_at: Utc::now(),
            tokens_used,
        })
    }

    /// Provider liveness check
    pub async fn is_healthy(&self) -> bool {
        debug!("Probing completion provider");
        self.client.probe().await
    }
}

/// Build the chat-completion payload for a summarization request
fn build_chat_request(model: &str, request: &SummaryRequest) -> ChatRequest {
    let prompt = summarize_prompt(&request.text, request.max_summary_length);

    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ],
        max_tokens: request.max_summary_length * TOKEN_BUDGET_FACTOR,
        temperature: Some(SUMMARY_TEMPERATURE),
    }
}
