//! Suggestion parsing: turns the completion service's free text into a short list.
//!
//! Numbered lines ("1." / "2)") are preferred. When the response does not carry
//! enough of them, the first long-enough lines are used instead, and when even
//! those are absent a fixed generic list is returned. Never fails.

use std::sync::LazyLock;

use regex::Regex;

/// Returned when the service output contains nothing usable.
pub const GENERIC_SUGGESTIONS: [&str; 5] = [
    "Add more relevant keywords from the job description",
    "Quantify your achievements with specific metrics",
    "Include technical skills mentioned in the job posting",
    "Update your professional summary to match the role",
    "Add relevant certifications or training",
];

/// Fallback lines must be longer than this (after trimming).
const MIN_FALLBACK_LINE_CHARS: usize = 20;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s*(.+)$").expect("numbered line pattern is valid"));

/// Parses up to `limit` suggestions out of raw service text.
pub fn parse_suggestions(raw: &str, limit: usize) -> Vec<String> {
    let lines: Vec<&str> = raw.split('\n').filter(|l| !l.trim().is_empty()).collect();

    let numbered: Vec<String> = lines
        .iter()
        .filter_map(|line| NUMBERED_LINE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .take(limit)
        .collect();

    if numbered.len() >= limit {
        return numbered;
    }

    let fallback: Vec<String> = lines
        .iter()
        .map(|l| l.trim())
        .filter(|l| l.chars().count() > MIN_FALLBACK_LINE_CHARS)
        .take(limit)
        .map(str::to_string)
        .collect();

    if fallback.is_empty() {
        GENERIC_SUGGESTIONS
            .iter()
            .take(limit)
            .map(|s| s.to_string())
            .collect()
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_numbered_lines() {
        let raw = "1. Add metrics\n2. Use action verbs\n3. Tailor summary\n4. List certifications\n5. Quantify impact";
        assert_eq!(
            parse_suggestions(raw, 5),
            vec![
                "Add metrics",
                "Use action verbs",
                "Tailor summary",
                "List certifications",
                "Quantify impact"
            ]
        );
    }

    #[test]
    fn test_paren_enumerators_and_preamble() {
        let raw = "Here are my suggestions:\n\n1) Lead with impact\n2) Mirror the JD title\n3)   Add a skills section  \n4) Remove photos\n5) Use standard headings\n6) Extra line";
        let parsed = parse_suggestions(raw, 5);
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed[0], "Lead with impact");
        assert_eq!(parsed[2], "Add a skills section");
        assert_eq!(parsed[4], "Use standard headings");
    }

    #[test]
    fn test_windows_line_endings() {
        let raw = "1. One thing\r\n2. Two things\r\n3. Three\r\n4. Four\r\n5. Five\r\n";
        let parsed = parse_suggestions(raw, 5);
        assert_eq!(parsed, vec!["One thing", "Two things", "Three", "Four", "Five"]);
    }

    #[test]
    fn test_too_few_numbered_falls_back_to_long_lines() {
        let raw = "Overall the resume is solid but could improve.\n1. Short one\n- Quantify each bullet with a concrete metric\nok";
        let parsed = parse_suggestions(raw, 5);
        assert_eq!(
            parsed,
            vec![
                "Overall the resume is solid but could improve.",
                "- Quantify each bullet with a concrete metric"
            ]
        );
    }

    #[test]
    fn test_fallback_is_truncated() {
        let raw = (0..8)
            .map(|i| format!("This is a long unnumbered suggestion line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed = parse_suggestions(&raw, 5);
        assert_eq!(parsed.len(), 5);
        assert!(parsed[4].ends_with('4'));
    }

    #[test]
    fn test_short_unnumbered_lines_give_generic_list() {
        let raw = "Looks good\nAdd skills\nNice!";
        assert_eq!(parse_suggestions(raw, 5), GENERIC_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_empty_response_gives_generic_list() {
        assert_eq!(parse_suggestions("", 5), GENERIC_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_exactly_twenty_chars_is_not_enough() {
        let line = "abcdefghijklmnopqrst";
        assert_eq!(line.len(), 20);
        assert_eq!(parse_suggestions(line, 5), GENERIC_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_limit_is_respected() {
        let raw = "1. a\n2. b\n3. c";
        assert_eq!(parse_suggestions(raw, 2), vec!["a", "b"]);
    }
}
