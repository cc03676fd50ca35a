//! Cleanup of raw model output into a bare translation

/// Quote pairs a model may wrap its answer in: (open, close)
const WRAPPING_QUOTES: [(char, char); 5] = [
    ('"', '"'),
    ('\'', '\''),
    ('«', '»'),
    ('“', '”'),
    ('„', '“'),
];

/// Trim the model's answer and remove one layer of wrapping quotes
///
/// Interior quotes are left alone. A lone quote character is kept as is,
/// and so are replies like `"yes" and "no"` whose first and last quotes
/// belong to different words.
#[must_use]
pub fn clean_translation(raw: &str) -> String {
    let trimmed = raw.trim();

    for (open, close) in WRAPPING_QUOTES {
        if let Some(inner) = trimmed
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
            .filter(|inner| closes_at_end(inner, open, close))
        {
            return inner.trim().to_string();
        }
    }

    trimmed.to_string()
}

/// True when the quote opened before `inner` is the one closed after it
fn closes_at_end(inner: &str, open: char, close: char) -> bool {
    if open == close {
        return !inner.contains(open);
    }

    let mut depth = 0_usize;
    for c in inner.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            }
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(clean_translation("  Привет, мир!\n"), "Привет, мир!");
    }

    #[test]
    fn strips_double_quotes() {
        assert_eq!(clean_translation("\"Привет\""), "Привет");
    }

    #[test]
    fn strips_guillemets_and_curly_quotes() {
        assert_eq!(clean_translation("«Привет»"), "Привет");
        assert_eq!(clean_translation("“Hello”"), "Hello");
        assert_eq!(clean_translation("„Привет“"), "Привет");
    }

    #[test]
    fn strips_only_one_layer() {
        assert_eq!(clean_translation("\"'Hi'\""), "'Hi'");
    }

    #[test]
    fn keeps_interior_quotes() {
        assert_eq!(
            clean_translation("Он сказал \"да\" и ушёл"),
            "Он сказал \"да\" и ушёл"
        );
    }

    #[test]
    fn keeps_separately_quoted_words() {
        assert_eq!(clean_translation("\"Да\" и \"нет\""), "\"Да\" и \"нет\"");
        assert_eq!(clean_translation("«Да» или «нет»"), "«Да» или «нет»");
    }

    #[test]
    fn strips_guillemets_around_nested_pair() {
        assert_eq!(clean_translation("«Он сказал «да»»"), "Он сказал «да»");
    }

    #[test]
    fn keeps_unbalanced_quotes() {
        assert_eq!(clean_translation("\"Hello"), "\"Hello");
        assert_eq!(clean_translation("\""), "\"");
    }

    proptest! {
        #[test]
        fn never_grows_and_is_trimmed(raw in "\\PC{0,40}") {
            let cleaned = clean_translation(&raw);
            prop_assert!(cleaned.len() <= raw.len());
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        }

        #[test]
        fn unquoted_text_only_trimmed(text in "[A-Za-zА-Яа-я ,.!?]{0,40}") {
            prop_assert_eq!(clean_translation(&text), text.trim());
        }
    }
}
