//! User input sanitization.

use std::sync::LazyLock;

use regex::Regex;

/// Default cap on sanitized input length, in characters.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s]").expect("static sanitizer pattern is valid")
});

/// Removes everything except word characters and whitespace, then keeps at
/// most `max_chars` characters.
#[must_use]
pub fn sanitize(text: &str, max_chars: usize) -> String {
    DISALLOWED_RE
        .replace_all(text, "")
        .chars()
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(sanitize("Hello!!! World???", 500), "Hello World");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize("", 500), "");
    }

    #[test]
    fn clean_input_is_unchanged() {
        let text = "How do I write a resume for my_first job 2024";
        assert_eq!(sanitize(text, DEFAULT_MAX_INPUT_CHARS), text);
    }

    #[test]
    fn keeps_whitespace_and_unicode_letters() {
        assert_eq!(sanitize("Café\tnaïve\nrésumé?", 500), "Café\tnaïve\nrésumé");
    }

    #[test]
    fn removes_markup_and_injection_characters() {
        assert_eq!(
            sanitize("<script>alert('x');</script> {{system}}", 500),
            "scriptalertxscript system"
        );
    }

    #[test]
    fn caps_length_in_characters() {
        let long = "é".repeat(600);
        let out = sanitize(&long, 500);
        assert_eq!(out.chars().count(), 500);
    }

    #[test]
    fn cap_applies_after_stripping() {
        let text = format!("{}{}", "!".repeat(10), "a".repeat(10));
        assert_eq!(sanitize(&text, 5), "aaaaa");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "Hello!!! World???",
            "résumé -- tips & tricks (2024)",
            "",
            "   spaced   out   ",
        ];
        for input in inputs {
            let once = sanitize(input, 12);
            assert_eq!(sanitize(&once, 12), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_only_contains_word_or_whitespace() {
        let out = sanitize("a.b,c;d:e/f\\g|h@i#j$k%l^m&n*o(p)q=r+s~t`u\"v'w", 500);
        assert!(
            out.chars().all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace()),
            "unexpected output: {out:?}"
        );
        assert_eq!(out, "abcdefghijklmnopqrstuvw");
    }
}
