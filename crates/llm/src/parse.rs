//! Parsing of freeform provider replies into structured summaries

/// Summary section marker expected in provider replies
const SUMMARY_MARKER: &str = "SUMMARY:";

/// Bullet section marker expected in provider replies
const BULLET_MARKER: &str = "BULLET POINTS:";

/// Bullet glyphs accepted at the start of a bullet line
const BULLET_GLYPHS: [char; 3] = ['•', '-', '*'];

/// Maximum characters kept when falling back to the raw reply
const FALLBACK_MAX_CHARS: usize = 500;

/// Parsed provider reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    /// Extracted or fallback summary text
    pub summary: String,

    /// Bullet points in reply order
    pub bullet_points: Vec<String>,
}

/// Extract the summary and bullet points from a freeform reply
///
/// Never fails. A line starting with the case-insensitive SUMMARY:
/// marker sets the summary (a later marker overwrites, regardless of
/// bullet mode). A line equal to BULLET POINTS: opens bullet mode,
/// which stays open for the rest of the reply; within it, lines
/// starting with a recognized glyph become bullets and anything else
/// is ignored. When no summary was captured, the raw reply truncated
/// to 500 characters becomes the summary and the bullet list stays
/// empty.
pub fn parse_reply(content: &str) -> ParsedReply {
    let mut summary = String::new();
    let mut bullet_points = Vec::new();
    let mut in_bullet_section = false;

    for line in content.split('\n').filter(|l| !l.is_empty()) {
        let trimmed = line.trim();

        if let Some(rest) = strip_prefix_ignore_case(trimmed, SUMMARY_MARKER) {
            summary = rest.trim().to_string();
        } else if trimmed.eq_ignore_ascii_case(BULLET_MARKER) {
            in_bullet_section = true;
        } else if in_bullet_section {
            if let Some(rest) = strip_bullet_glyph(trimmed) {
                bullet_points.push(rest.trim().to_string());
            }
        }
    }

    // Fallback if the expected format is absent
    if summary.is_empty() {
        summary = truncate_chars(content, FALLBACK_MAX_CHARS);
    }

    ParsedReply {
        summary,
        bullet_points,
    }
}

/// Strip a case-insensitive ASCII prefix
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}

/// Strip a leading bullet glyph
fn strip_bullet_glyph(line: &str) -> Option<&str> {
    let first = line.chars().next()?;
    BULLET_GLYPHS
        .contains(&first)
        .then(|| &line[first.len_utf8()..])
}

/// Truncate to a character budget, marking truncation with an ellipsis
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED_REPLY: &str = "SUMMARY: The report covers quarterly growth.\n\
                                    \n\
                                    BULLET POINTS:\n\
                                    • Revenue grew 12%\n\
                                    • Costs stayed flat\n\
                                    • Headcount doubled\n";

    #[test]
    fn test_parse_structured_reply() {
        let parsed = parse_reply(STRUCTURED_REPLY);
        assert_eq!(parsed.summary, "The report covers quarterly growth.");
        assert_eq!(
            parsed.bullet_points,
            vec!["Revenue grew 12%", "Costs stayed flat", "Headcount doubled"]
        );
    }

    #[test]
    fn test_glyph_tolerance() {
        let reply = "SUMMARY: s\nBULLET POINTS:\n• first\n- second\n* third";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.bullet_points, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_bullet_mode_ignores_unmarked_lines() {
        let reply = "SUMMARY: s\nBULLET POINTS:\nHere are the points:\n• only one\nthat was it";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.bullet_points, vec!["only one"]);
    }

    #[test]
    fn test_bullets_before_marker_ignored() {
        let reply = "• stray bullet\nSUMMARY: s\nBULLET POINTS:\n• kept";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.bullet_points, vec!["kept"]);
    }

    #[test]
    fn test_summary_after_bullets_still_captured() {
        // Bullet mode never closes, but the summary marker wins
        // independently of it.
        let reply = "BULLET POINTS:\n• a point\nSUMMARY: late summary";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, "late summary");
        assert_eq!(parsed.bullet_points, vec!["a point"]);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let reply = "summary: lower case works\nbullet points:\n- yes";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, "lower case works");
        assert_eq!(parsed.bullet_points, vec!["yes"]);
    }

    #[test]
    fn test_fallback_long_reply_truncated() {
        let reply = "a".repeat(600);
        let parsed = parse_reply(&reply);
        assert_eq!(parsed.summary.chars().count(), 503);
        assert!(parsed.summary.starts_with(&"a".repeat(500)));
        assert!(parsed.summary.ends_with("..."));
        assert!(parsed.bullet_points.is_empty());
    }

    #[test]
    fn test_fallback_short_reply_kept_verbatim() {
        let reply = "The model ignored the format entirely.";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, reply);
        assert!(parsed.bullet_points.is_empty());
    }

    #[test]
    fn test_fallback_exactly_500_chars_not_truncated() {
        let reply = "b".repeat(500);
        let parsed = parse_reply(&reply);
        assert_eq!(parsed.summary, reply);
    }

    #[test]
    fn test_empty_summary_marker_falls_back() {
        let reply = "SUMMARY:\nBULLET POINTS:\n• still a bullet";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, reply);
        assert_eq!(parsed.bullet_points, vec!["still a bullet"]);
    }

    #[test]
    fn test_last_summary_marker_wins() {
        let reply = "SUMMARY: first\nSUMMARY: second";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, "second");
    }

    #[test]
    fn test_multibyte_reply_does_not_panic() {
        let reply = "• 여름\n요약\nSUMMARY: 한국어 요약";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.summary, "한국어 요약");
    }
}
