//! Title/body extraction and document composition
//!
//!     Every segment becomes an import candidate: a title plus the body
//!     that follows it. The first trimmed line starting with "# " wins as
//!     the title; failing that, the first non-blank line is used verbatim.
//!     Blank lines after the title are skipped, and the remaining lines,
//!     rejoined and trimmed, form the body.
//!
//!     An empty title is not an error here. It signals "reject this
//!     candidate" to the caller, which owns that policy.

use crate::ast::StructuredDocument;
use crate::blocks::parse_blocks;

/// Title and body extracted from one segment, before block parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCandidate {
    pub title: String,
    pub body: String,
}

/// A fully parsed article: the extracted title plus the structured body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArticle {
    pub title: String,
    pub content: StructuredDocument,
}

/// Extract the title line and remaining body from a segment.
pub fn extract_title_and_body(segment: &str) -> ImportCandidate {
    let lines: Vec<&str> = segment.trim().split('\n').collect();
    let mut title = String::new();
    let mut body_start = 0;

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if let Some(rest) = line.strip_prefix("# ") {
            title = rest.trim_start().to_string();
            body_start = index + 1;
            break;
        }
        // First non-blank line doubles as the title when no heading leads.
        if !line.is_empty() {
            title = line.to_string();
            body_start = index + 1;
            break;
        }
    }

    while body_start < lines.len() && lines[body_start].trim().is_empty() {
        body_start += 1;
    }

    let body = lines[body_start..].join("\n").trim().to_string();
    ImportCandidate { title, body }
}

/// Parse one segment end to end: extract the title, then tokenize the body.
pub fn parse_document(segment: &str) -> ParsedArticle {
    let candidate = extract_title_and_body(segment);
    ParsedArticle {
        title: candidate.title,
        content: parse_blocks(&candidate.body),
    }
}
