//! Reply truncation by sentence count.
//!
//! Sentence boundaries are found with a small heuristic, not a linguistic
//! parser. A boundary is one whitespace character preceded by `.` or `?`,
//! except when the text before it looks like one of two abbreviation shapes:
//!
//! - `x.y.` dotted pairs such as `U.S.` or `e.g.`
//! - a capital and a lowercase letter followed by a dot, such as `Dr.` or `Mr.`
//!
//! Known misses: longer abbreviations (`Prof.`, `etc.`) split early, `!` never
//! ends a sentence, and ellipses or decimals followed by a space are treated
//! as sentence ends.

/// Default number of sentences kept in a reply.
pub const DEFAULT_MAX_SENTENCES: usize = 3;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether the whitespace at `chars[i]` ends a sentence.
fn is_boundary(chars: &[(usize, char)], i: usize) -> bool {
    let prev = chars[i - 1].1;
    if prev != '.' && prev != '?' {
        return false;
    }

    // U.S. / e.g.
    if i >= 4
        && is_word_char(chars[i - 4].1)
        && chars[i - 3].1 == '.'
        && is_word_char(chars[i - 2].1)
    {
        return false;
    }

    // Dr. / Mr.
    if i >= 3
        && chars[i - 3].1.is_ascii_uppercase()
        && chars[i - 2].1.is_ascii_lowercase()
        && prev == '.'
    {
        return false;
    }

    true
}

/// Splits `text` into sentences. The whitespace character at each boundary
/// is dropped; all other text is preserved.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (pos, c) = chars[i];
        if c.is_whitespace() && is_boundary(&chars, i) {
            sentences.push(&text[start..pos]);
            start = pos + c.len_utf8();
        }
    }
    sentences.push(&text[start..]);

    sentences
}

/// Keeps the first `max_sentences` sentences of `text`, joined by single
/// spaces.
#[must_use]
pub fn truncate_sentences(text: &str, max_sentences: usize) -> String {
    split_sentences(text)
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn honorific_does_not_split() {
        let text = "Dr. Smith went home. He was tired. It was late.";
        assert_eq!(truncate_sentences(text, 2), "Dr. Smith went home. He was tired.");
    }

    #[test]
    fn dotted_abbreviations_do_not_split() {
        let text = "U.S. policy changed. Use e.g. this format. Third one. Fourth one.";
        assert_eq!(
            split_sentences(text),
            vec![
                "U.S. policy changed.",
                "Use e.g. this format.",
                "Third one.",
                "Fourth one."
            ]
        );
    }

    #[test]
    fn question_mark_ends_sentence() {
        let text = "Is it open? Yes it is. Apply today.";
        assert_eq!(split_sentences(text), vec!["Is it open?", "Yes it is.", "Apply today."]);
    }

    #[test]
    fn exclamation_does_not_end_sentence() {
        assert_eq!(split_sentences("Great! Apply now."), vec!["Great! Apply now."]);
    }

    #[test]
    fn fewer_sentences_than_max_is_unchanged() {
        let text = "Tailor your resume. Keep it to one page.";
        assert_eq!(truncate_sentences(text, 3), text);
    }

    #[test]
    fn four_sentences_truncate_to_three() {
        let text = "One is here. Two is here. Three is here. Four is here.";
        assert_eq!(
            truncate_sentences(text, DEFAULT_MAX_SENTENCES),
            "One is here. Two is here. Three is here."
        );
    }

    #[test]
    fn newline_boundary_becomes_space() {
        let text = "First line.\nSecond line.\nThird line.";
        assert_eq!(truncate_sentences(text, 2), "First line. Second line.");
    }

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(split_sentences(""), vec![""]);
        assert_eq!(truncate_sentences("", 3), "");
    }

    #[test]
    fn zero_max_yields_empty() {
        assert_eq!(truncate_sentences("One. Two.", 0), "");
    }

    #[test]
    fn result_never_exceeds_max_sentences() {
        let samples = [
            "A cat sat. A dog ran? The end.",
            "Mr. Jones met Dr. Who. They talked. Then left. Bye now.",
            "No boundary here at all",
            "Trailing dot. ",
            "Ends. With. Many. Short. Ones.",
        ];
        for text in samples {
            for max in 0..5 {
                let out = truncate_sentences(text, max);
                let count = if out.is_empty() { 0 } else { split_sentences(&out).len() };
                assert!(count <= max, "{text:?} at {max} gave {out:?}");
            }
        }
    }

    #[test]
    fn handles_multibyte_text() {
        let text = "Él está aquí. Ça va? Über alles.";
        assert_eq!(truncate_sentences(text, 2), "Él está aquí. Ça va?");
    }
}
