//! Property-based tests for the inline-formatting parser
//!
//! These pin the parser's structural guarantees: the output is never empty,
//! every span either re-wraps with its delimiters or passes through
//! verbatim (so the input is always reconstructible), and plain text is a
//! fixed point.

use coursemd::{parse_inlines, Mark, TextSpan};
use proptest::prelude::*;

/// Re-apply each span's delimiter syntax. Concatenating the results must
/// reproduce the parser's input exactly, for any input.
fn rebuild(spans: &[TextSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span.marks.as_slice() {
            [] => out.push_str(&span.text),
            [Mark::Bold, Mark::Italic] => {
                out.push_str("***");
                out.push_str(&span.text);
                out.push_str("***");
            }
            [Mark::Bold] => {
                out.push_str("**");
                out.push_str(&span.text);
                out.push_str("**");
            }
            [Mark::Italic] => {
                out.push('*');
                out.push_str(&span.text);
                out.push('*');
            }
            [Mark::Code] => {
                out.push('`');
                out.push_str(&span.text);
                out.push('`');
            }
            [Mark::Link { href }] => {
                out.push('[');
                out.push_str(&span.text);
                out.push_str("](");
                out.push_str(href);
                out.push(')');
            }
            other => panic!("Unexpected mark combination: {:?}", other),
        }
    }
    out
}

proptest! {
    #[test]
    fn output_is_never_empty(input in ".*") {
        let spans = parse_inlines(&input);
        prop_assert!(!spans.is_empty());
    }

    #[test]
    fn rebuilding_spans_reproduces_the_input(input in ".*") {
        let spans = parse_inlines(&input);
        prop_assert_eq!(rebuild(&spans), input);
    }

    #[test]
    fn plain_text_is_a_fixed_point(input in "[a-zA-Z0-9 .,!?-]*") {
        // No special characters: exactly one unmarked span, text untouched.
        let spans = parse_inlines(&input);
        prop_assert_eq!(&spans, &vec![TextSpan::plain(input.clone())]);
    }

    #[test]
    fn span_text_never_exceeds_input_length(input in ".*") {
        let spans = parse_inlines(&input);
        let total: usize = spans.iter().map(|span| span.text.len()).sum();
        prop_assert!(total <= input.len());
    }

    #[test]
    fn marked_spans_are_never_empty(input in ".{0,80}") {
        for span in parse_inlines(&input) {
            if !span.marks.is_empty() {
                prop_assert!(!span.text.is_empty());
            }
        }
    }
}
