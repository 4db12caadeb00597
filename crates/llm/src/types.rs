use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use textbrief_common::FieldError;

/// Minimum input text length in characters
pub const TEXT_MIN_CHARS: usize = 10;

/// Maximum input text length in characters
pub const TEXT_MAX_CHARS: usize = 10_000;

/// Minimum requested summary length
pub const SUMMARY_LENGTH_MIN: u32 = 50;

/// Maximum requested summary length
pub const SUMMARY_LENGTH_MAX: u32 = 1_000;

/// Default requested summary length
pub const SUMMARY_LENGTH_DEFAULT: u32 = 200;

/// Text summarization request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// Text to summarize
    pub text: String,

    /// Maximum summary length in characters
    #[serde(default = "default_summary_length")]
    pub max_summary_length: u32,
}

fn default_summary_length() -> u32 {
    SUMMARY_LENGTH_DEFAULT
}

impl SummaryRequest {
    /// Create a request with the default summary length
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_summary_length: SUMMARY_LENGTH_DEFAULT,
        }
    }

    /// Check request bounds, collecting every violation
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let text_chars = self.text.chars().count();
        if self.text.trim().is_empty() {
            errors.push(FieldError::new("text", "Text is required"));
        } else if !(TEXT_MIN_CHARS..=TEXT_MAX_CHARS).contains(&text_chars) {
            errors.push(FieldError::new(
                "text",
                format!(
                    "Text must be between {} and {} characters",
                    TEXT_MIN_CHARS, TEXT_MAX_CHARS
                ),
            ));
        }

        if !(SUMMARY_LENGTH_MIN..=SUMMARY_LENGTH_MAX).contains(&self.max_summary_length) {
            errors.push(FieldError::new(
                "maxSummaryLength",
                format!(
                    "MaxSummaryLength must be between {} and {}",
                    SUMMARY_LENGTH_MIN, SUMMARY_LENGTH_MAX
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Structured summarization result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Short synopsis, never empty on success
    pub summary: String,

    /// Key facts in reply order
    pub bullet_points: Vec<String>,

    /// Completion timestamp
    pub processed_at: DateTime<Utc>,

    /// Total tokens reported by the provider, never estimated locally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// Chat-completion request payload
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name
    pub model: String,

    /// Ordered role/content message pairs
    pub messages: Vec<ChatMessage>,

    /// Output token budget
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// One role-tagged conversation message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// Message role ("system" or "user")
    pub role: String,

    /// Message body
    pub content: String,
}

impl ChatMessage {
    /// Create a system instruction message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completion response payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Candidate completions; only the first is used
    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    /// Token usage accounting
    pub usage: Option<ChatUsage>,
}

impl ChatResponse {
    /// Content of the first candidate choice, if any usable text exists
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|c| !c.is_empty())
    }
}

/// One candidate completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated assistant message
    pub message: Option<AssistantMessage>,
}

/// Assistant message body within a choice
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    /// Generated text
    pub content: Option<String>,
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct ChatUsage {
    /// Total tokens consumed by the call
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = SummaryRequest::new("This text is long enough to summarize.");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let request = SummaryRequest::new("exactly10!");
        assert!(request.validate().is_ok());

        let request = SummaryRequest::new("a".repeat(10_000));
        assert!(request.validate().is_ok());

        let mut request = SummaryRequest::new("This text is long enough to summarize.");
        request.max_summary_length = 50;
        assert!(request.validate().is_ok());
        request.max_summary_length = 1_000;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_short_text_rejected() {
        let request = SummaryRequest::new("too short");
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "text");
    }

    #[test]
    fn test_long_text_rejected() {
        let request = SummaryRequest::new("a".repeat(10_001));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        let request = SummaryRequest::new("");
        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].message, "Text is required");
    }

    #[test]
    fn test_summary_length_out_of_bounds_rejected() {
        let mut request = SummaryRequest::new("This text is long enough to summarize.");
        request.max_summary_length = 49;
        let errors = request.validate().unwrap_err();
        assert_eq!(errors[0].field, "maxSummaryLength");

        request.max_summary_length = 1_001;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_all_violations_collected() {
        let mut request = SummaryRequest::new("short");
        request.max_summary_length = 5;
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_first_content() {
        let response = ChatResponse {
            choices: vec![ChatChoice {
                message: Some(AssistantMessage {
                    content: Some("hello".to_string()),
                }),
            }],
            usage: None,
        };
        assert_eq!(response.first_content(), Some("hello"));

        let empty = ChatResponse {
            choices: Vec::new(),
            usage: None,
        };
        assert_eq!(empty.first_content(), None);

        let blank = ChatResponse {
            choices: vec![ChatChoice {
                message: Some(AssistantMessage {
                    content: Some(String::new()),
                }),
            }],
            usage: None,
        };
        assert_eq!(blank.first_content(), None);
    }
}
