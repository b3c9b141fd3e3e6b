//! Emphasis-markup removal

/// Strip emphasis markers and surrounding whitespace
///
/// The roadmap prompt demands plain text, but models still leak markdown
/// bold/italic runs. Removing every marker keeps the operation idempotent:
/// the output contains no `*`, and trimming a trimmed string is a no-op.
pub fn sanitize(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_bold_and_italic_markers() {
        assert_eq!(sanitize("**Day 1:** learn *basics*"), "Day 1: learn basics");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize("  Day 1  \n"), "Day 1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("   "), "");
        assert_eq!(sanitize("***"), "");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize("Day 1 (5 hours):"), "Day 1 (5 hours):");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(s in ".*") {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }
    }
}
