//! Position-accurate redaction of findings within their source text.

use crate::scanner::Finding;

/// Replace every finding's span with its suggestion placeholder, preserving
/// all other bytes of `text` verbatim.
///
/// Findings are applied in descending position order, so replacing a later
/// span never shifts the offsets of spans still to be processed and
/// placeholder length may differ freely from the original match length.
/// Positions must refer to `text` as it was when the findings were produced;
/// the output of `redact` is a new string with fresh offsets.
///
/// Malformed spans never corrupt output: a finding whose span runs past the
/// end of the text, lands on a non-character boundary, or overlaps an
/// already-applied replacement is skipped.
pub fn redact(text: &str, findings: &[Finding]) -> String {
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    // Stable sort: findings at the same position keep discovery order, so
    // the earlier-discovered one wins and the other is skipped as an
    // overlap.
    ordered.sort_by(|a, b| b.position.cmp(&a.position));

    let mut redacted = text.to_string();
    // Start of the leftmost replacement applied so far; spans must end at
    // or before it to leave already-rewritten text untouched.
    let mut applied_floor = text.len();

    for finding in ordered {
        let start = finding.position;
        let Some(end) = start.checked_add(finding.length) else {
            continue;
        };
        if end > applied_floor {
            continue;
        }
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            continue;
        }

        redacted.replace_range(start..end, &finding.suggestion);
        applied_floor = start;
    }

    redacted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Category, Severity};
    use crate::scanner::{Scanner, SensitivityLevel};

    fn scanner() -> Scanner {
        Scanner::new().expect("catalogue should compile")
    }

    fn finding_at(position: usize, length: usize, suggestion: &str) -> Finding {
        Finding {
            pattern_name: "test".to_string(),
            category: Category::Pii,
            severity: Severity::Medium,
            matched_text: String::new(),
            position,
            length,
            suggestion: suggestion.to_string(),
        }
    }

    #[test]
    fn no_findings_returns_text_unchanged() {
        assert_eq!(redact("hello world", &[]), "hello world");
    }

    #[test]
    fn surrounding_text_survives_length_change() {
        let text = format!("key=sk-ant-{} end", "A".repeat(95));
        let s = scanner();
        let result = s.scan(&text);
        assert_eq!(result.total_issues, 1);

        let redacted = redact(&text, &result.findings);
        assert_eq!(redacted, "key=[ANTHROPIC_API_KEY] end");
    }

    #[test]
    fn multiple_non_adjacent_findings() {
        let text = "contact alice@example.com via 10.0.0.1 today";
        let s = scanner();
        let result = s.scan_with(text, SensitivityLevel::Paranoid);
        assert_eq!(result.total_issues, 2);

        let redacted = redact(text, &result.findings);
        assert_eq!(redacted, "contact [EMAIL_REDACTED] via [IP_ADDRESS] today");
    }

    #[test]
    fn card_redaction_keeps_last_four() {
        let text = "pay with 4111-1111-1111-1111 please";
        let s = scanner();
        let result = s.scan(text);
        let card_findings: Vec<Finding> = result
            .findings
            .into_iter()
            .filter(|f| f.pattern_name == "Credit Card Number")
            .collect();
        assert_eq!(card_findings.len(), 1);

        let redacted = redact(text, &card_findings);
        assert_eq!(redacted, "pay with [CARD_****1111] please");
    }

    #[test]
    fn overlapping_span_is_skipped() {
        let text = "abcdefghij";
        let findings = vec![finding_at(2, 5, "[ONE]"), finding_at(4, 4, "[TWO]")];
        // Right-to-left: [TWO] covers 4..8 first; [ONE] (2..7) would reach
        // into it and is dropped.
        assert_eq!(redact(text, &findings), "abcd[TWO]ij");
    }

    #[test]
    fn identical_spans_apply_once() {
        let text = "abcdefghij";
        let findings = vec![finding_at(2, 4, "[FIRST]"), finding_at(2, 4, "[SECOND]")];
        assert_eq!(redact(text, &findings), "ab[FIRST]ghij");
    }

    #[test]
    fn out_of_range_span_is_skipped() {
        let text = "short";
        let findings = vec![finding_at(3, 10, "[X]"), finding_at(100, 2, "[Y]")];
        assert_eq!(redact(text, &findings), "short");
    }

    #[test]
    fn non_char_boundary_span_is_skipped() {
        // 'é' occupies bytes 1..3; a span starting at byte 2 splits it.
        let text = "h\u{e9}llo";
        let findings = vec![finding_at(2, 2, "[X]")];
        assert_eq!(redact(text, &findings), text);
    }

    #[test]
    fn adjacent_spans_both_apply() {
        let text = "0123456789";
        let findings = vec![finding_at(0, 5, "[A]"), finding_at(5, 5, "[B]")];
        assert_eq!(redact(text, &findings), "[A][B]");
    }

    #[test]
    fn replacement_offsets_hold_for_earlier_spans() {
        // The placeholder for the later span is much longer than the match;
        // the earlier span's original offsets must still be valid.
        let text = "aa BB cc DD ee";
        let findings = vec![
            finding_at(3, 2, "[SHORT]"),
            finding_at(9, 2, "[A_MUCH_LONGER_PLACEHOLDER]"),
        ];
        assert_eq!(redact(text, &findings), "aa [SHORT] cc [A_MUCH_LONGER_PLACEHOLDER] ee");
    }
}
