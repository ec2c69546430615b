//! Formatting strategies
//!
//! Each strategy is a stateless unit struct implementing [`TextFormatter`].
//! All transformations are pure, total over arbitrary strings (including the
//! empty string), and never fail.

/// Trait for interchangeable text-formatting strategies
pub trait TextFormatter: Send + Sync {
    /// Transform the input text, returning a new string
    fn format(&self, text: &str) -> String;
}

/// Uppercase formatter - maps every character to its uppercase form
///
/// Non-alphabetic characters pass through unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperCaseFormatter;

impl TextFormatter for UpperCaseFormatter {
    fn format(&self, text: &str) -> String {
        text.chars().flat_map(char::to_uppercase).collect()
    }
}

/// Lowercase formatter - maps every character to its lowercase form
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCaseFormatter;

impl TextFormatter for LowerCaseFormatter {
    fn format(&self, text: &str) -> String {
        text.chars().flat_map(char::to_lowercase).collect()
    }
}

/// Title-case formatter - uppercases the first character of each word
///
/// A word starts at the beginning of the text or after any whitespace
/// character. Every non-leading character of a word is lowercased, even if it
/// was uppercase in the input. Punctuation adjacent to letters (apostrophes,
/// digits, symbols) does not reset word-start state, so "it's" becomes "It's"
/// rather than "It'S". This policy is deliberate and load-bearing for parity
/// with the reference behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleCaseFormatter;

impl TextFormatter for TitleCaseFormatter {
    fn format(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut at_word_start = true;

        for c in text.chars() {
            if c.is_whitespace() {
                at_word_start = true;
                result.push(c);
            } else if at_word_start {
                result.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                result.extend(c.to_lowercase());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_mixed_input() {
        let formatter = UpperCaseFormatter;
        assert_eq!(formatter.format("tHiS iS a TeSt"), "THIS IS A TEST");
    }

    #[test]
    fn uppercase_passes_non_alphabetic_through() {
        let formatter = UpperCaseFormatter;
        assert_eq!(formatter.format("hELLO, u$3r@bC!"), "HELLO, U$3R@BC!");
    }

    #[test]
    fn uppercase_empty_string() {
        let formatter = UpperCaseFormatter;
        assert_eq!(formatter.format(""), "");
    }

    #[test]
    fn uppercase_is_idempotent() {
        let formatter = UpperCaseFormatter;
        let once = formatter.format("Mixed CASE input 123");
        assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn lowercase_mixed_input() {
        let formatter = LowerCaseFormatter;
        assert_eq!(formatter.format("tHiS iS a TeSt"), "this is a test");
    }

    #[test]
    fn lowercase_is_idempotent() {
        let formatter = LowerCaseFormatter;
        let once = formatter.format("Mixed CASE input 123");
        assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn titlecase_mixed_input() {
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format("tHiS iS a TeSt"), "This Is A Test");
    }

    #[test]
    fn titlecase_lowercases_interior_capitals() {
        // Not a no-op on already-capitalized input
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format("HELLO WORLD"), "Hello World");
    }

    #[test]
    fn titlecase_apostrophe_does_not_reset_word_start() {
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format("dON'T sTOP"), "Don't Stop");
    }

    #[test]
    fn titlecase_preserves_whitespace_runs() {
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format("  two\t\twords  "), "  Two\t\tWords  ");
    }

    #[test]
    fn titlecase_leading_punctuation_consumes_word_start() {
        // The first non-whitespace character clears the flag even when it has
        // no case, so the letter after it stays lowercase.
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format("'quoted' words"), "'quoted' Words");
    }

    #[test]
    fn titlecase_second_pass_is_stable() {
        let formatter = TitleCaseFormatter;
        let once = formatter.format("tHiS iS a TeSt");
        assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn titlecase_empty_string() {
        let formatter = TitleCaseFormatter;
        assert_eq!(formatter.format(""), "");
    }
}
