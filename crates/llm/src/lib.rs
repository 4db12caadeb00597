//! Textbrief LLM integration
//!
//! Chat-completion API client and text summarization

mod client;
mod parse;
mod prompts;
mod summarize;
mod types;

pub use client::CompletionClient;
pub use parse::{parse_reply, ParsedReply};
pub use prompts::{summarize_prompt, PROBE_MESSAGE, SYSTEM_PROMPT};
pub use summarize::Summarizer;
pub use types::{
    AssistantMessage, ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatUsage,
    SummaryRequest, SummaryResult, SUMMARY_LENGTH_DEFAULT, SUMMARY_LENGTH_MAX, SUMMARY_LENGTH_MIN,
    TEXT_MAX_CHARS, TEXT_MIN_CHARS,
};
