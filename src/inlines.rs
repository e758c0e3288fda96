//! Inline-formatting parser
//!
//!     Converts a run of text into an ordered sequence of [TextSpan] values,
//!     recognizing bold, italic, bold+italic, inline code and links. The
//!     parser is a loop over the unconsumed suffix of the input: at each
//!     step the anchored patterns are tried in order, first match wins, and
//!     the full matched syntax (delimiters included) is consumed.
//!
//!     The precedence order is load-bearing. `***x***` must be tried before
//!     `**x**`, which must be tried before `*x*`, or a bold+italic run would
//!     degrade into a bold run with stray asterisks.
//!
//!     When nothing matches, the scan jumps to the next character that could
//!     open a pattern (`*`, backtick, `[`) and emits the skipped run as a
//!     plain span. A special character that opens no pattern is emitted as a
//!     one-character plain span. Every iteration consumes at least one byte,
//!     so parsing is linear in the input length with no backtracking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{Mark, TextSpan};

static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*\*(.+?)\*\*\*").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*([^*]+)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`([^`]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[([^\]]+)\]\(([^)]+)\)").unwrap());
/// Characters that can open any of the patterns above.
static NEXT_SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*`\[]").unwrap());

/// Parse a run of text into styled spans.
///
/// The output is never empty: plain input yields one unmarked span, and so
/// does the empty string. Span texts concatenate, in order, to the input
/// with the recognized delimiter syntax stripped.
pub fn parse_inlines(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(caps) = BOLD_ITALIC.captures(rest) {
            spans.push(TextSpan::marked(&caps[1], vec![Mark::Bold, Mark::Italic]));
            rest = &rest[caps[0].len()..];
            continue;
        }
        if let Some(caps) = BOLD.captures(rest) {
            spans.push(TextSpan::marked(&caps[1], vec![Mark::Bold]));
            rest = &rest[caps[0].len()..];
            continue;
        }
        if let Some(caps) = ITALIC.captures(rest) {
            spans.push(TextSpan::marked(&caps[1], vec![Mark::Italic]));
            rest = &rest[caps[0].len()..];
            continue;
        }
        if let Some(caps) = CODE.captures(rest) {
            spans.push(TextSpan::marked(&caps[1], vec![Mark::Code]));
            rest = &rest[caps[0].len()..];
            continue;
        }
        if let Some(caps) = LINK.captures(rest) {
            spans.push(TextSpan::marked(
                &caps[1],
                vec![Mark::Link {
                    href: caps[2].to_string(),
                }],
            ));
            rest = &rest[caps[0].len()..];
            continue;
        }

        match NEXT_SPECIAL.find(rest) {
            // No special characters left: the rest is one plain run.
            None => {
                spans.push(TextSpan::plain(rest));
                break;
            }
            // A special character that opened no pattern is literal text.
            // Specials are all ASCII, so a one-byte slice is safe.
            Some(m) if m.start() == 0 => {
                spans.push(TextSpan::plain(&rest[..1]));
                rest = &rest[1..];
            }
            Some(m) => {
                spans.push(TextSpan::plain(&rest[..m.start()]));
                rest = &rest[m.start()..];
            }
        }
    }

    if spans.is_empty() {
        spans.push(TextSpan::plain(""));
    }
    spans
}
