//! Prompt templates for summarization

/// System instruction sent with every summarization request
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates concise summaries and bullet points from text.";

/// Minimal user message for liveness probes
pub const PROBE_MESSAGE: &str = "Hello";

/// Render the summarization prompt for a block of text
///
/// The SUMMARY: and BULLET POINTS: headers are a contract with
/// [`crate::parse_reply`], which locates structure in the freeform
/// reply by them.
pub fn summarize_prompt(text: &str, max_summary_length: u32) -> String {
    format!(
        r#"Please summarize the following text and provide bullet points of the key information.

Format your response exactly as follows:
SUMMARY: [Your summary here, max {max_summary_length} characters]

BULLET POINTS:
• [First key point]
• [Second key point]
• [Third key point]
[Continue with more bullet points as needed]

Text to summarize:
{text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_section_headers() {
        let prompt = summarize_prompt("Some input text.", 200);
        assert!(prompt.contains("SUMMARY:"));
        assert!(prompt.contains("BULLET POINTS:"));
        assert!(prompt.contains("•"));
    }

    #[test]
    fn test_prompt_embeds_text_and_length() {
        let prompt = summarize_prompt("The quarterly report shows growth.", 350);
        assert!(prompt.contains("The quarterly report shows growth."));
        assert!(prompt.contains("max 350 characters"));
        assert!(prompt.ends_with("The quarterly report shows growth."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = summarize_prompt("Same input.", 100);
        let b = summarize_prompt("Same input.", 100);
        assert_eq!(a, b);
    }
}
