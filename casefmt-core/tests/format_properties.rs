//! Property tests for the formatting strategies and the processor context

use casefmt_core::{
    FormatKind, LowerCaseFormatter, TextFormatter, TextProcessor, TitleCaseFormatter,
    UpperCaseFormatter,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn uppercase_is_idempotent(s in "[ -~]{0,200}") {
        let formatter = UpperCaseFormatter;
        let once = formatter.format(&s);
        prop_assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn uppercase_matches_charwise_mapping(s in "[ -~]{0,200}") {
        let expected: String = s.chars().flat_map(char::to_uppercase).collect();
        prop_assert_eq!(UpperCaseFormatter.format(&s), expected);
    }

    #[test]
    fn lowercase_is_idempotent(s in "[ -~]{0,200}") {
        let formatter = LowerCaseFormatter;
        let once = formatter.format(&s);
        prop_assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn titlecase_second_pass_reproduces_output(s in "[ -~]{0,200}") {
        let formatter = TitleCaseFormatter;
        let once = formatter.format(&s);
        prop_assert_eq!(formatter.format(&once), once);
    }

    #[test]
    fn titlecase_alphabetic_case_follows_word_position(s in "[ -~]{0,200}") {
        let output = TitleCaseFormatter.format(&s);
        let mut at_word_start = true;

        for c in output.chars() {
            if c.is_whitespace() {
                at_word_start = true;
            } else {
                if c.is_alphabetic() {
                    if at_word_start {
                        prop_assert!(c.is_uppercase(), "word-start {c:?} not uppercase");
                    } else {
                        prop_assert!(c.is_lowercase(), "interior {c:?} not lowercase");
                    }
                }
                at_word_start = false;
            }
        }
    }

    #[test]
    fn unbound_processor_is_identity(s in "\\PC{0,200}") {
        let processor = TextProcessor::new();
        prop_assert_eq!(processor.format(&s), s);
    }

    #[test]
    fn bound_processor_adds_no_transformation(s in "\\PC{0,200}") {
        for kind in FormatKind::all() {
            let mut processor = TextProcessor::new();
            processor.set_formatter(kind.formatter());
            prop_assert_eq!(processor.format(&s), kind.formatter().format(&s));
        }
    }

    #[test]
    fn formatting_never_changes_whitespace(s in "[ -~]{0,200}") {
        // All three strategies pass whitespace through untouched
        for kind in FormatKind::all() {
            let output = kind.formatter().format(&s);
            let ws_in: String = s.chars().filter(|c| c.is_whitespace()).collect();
            let ws_out: String = output.chars().filter(|c| c.is_whitespace()).collect();
            prop_assert_eq!(&ws_out, &ws_in);
        }
    }
}
