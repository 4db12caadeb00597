use serde::Serialize;

/// A single per-field validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Offending request field, in its wire spelling
    pub field: &'static str,

    /// Human-readable message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Textbrief error types
#[derive(Debug, thiserror::Error)]
pub enum TextBriefError {
    /// Request failed validation; never reaches the network
    #[error("Invalid request: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Provider returned a non-success HTTP status
    ///
    /// The raw body is kept for diagnostics only and must never be
    /// echoed to the end caller.
    #[error("Provider error: status {status}")]
    Provider { status: u16, body: String },

    /// Transport-level failure reaching the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Provider did not respond within the configured timeout
    #[error("Provider request timed out")]
    Timeout,

    /// Provider responded with success but without usable content
    #[error("Malformed provider reply: {0}")]
    MalformedReply(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl TextBriefError {
    /// Create validation error
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }

    /// Create malformed reply error
    pub fn malformed_reply<S: Into<String>>(msg: S) -> Self {
        Self::MalformedReply(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

// HTTP response conversion
impl TextBriefError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Provider { .. } => 502,
            Self::Network(_) => 503,
            Self::Timeout => 408,
            Self::MalformedReply(_) => 500,
            Self::Config(_) => 500,
            Self::Internal(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}
