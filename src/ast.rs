//! AST definitions for imported article documents
//!
//!     This module provides the node types that make up a structured article
//!     document: the document root, block-level nodes, and the inline text
//!     spans that carry formatting marks.
//!
//! Documents and Blocks
//!
//!     A document is a flat, ordered sequence of blocks. There is no block
//!     nesting beyond what the individual variants carry themselves (list
//!     items, table rows): headings, paragraphs, quotes and rules are leaves,
//!     lists hold single-paragraph items, and tables hold rows of cells.
//!
//!     A document is never empty. Parsing an empty body produces a single
//!     empty-paragraph placeholder, because the rendering side assumes at
//!     least one block is always present.
//!
//! Inline Content
//!
//!     Inline content is a sequence of [TextSpan] values. Spans do not
//!     overlap, and concatenating their text in order reconstructs the source
//!     text with the formatting syntax stripped. A run of plain text is one
//!     span with no marks; even empty input yields one empty unmarked span,
//!     never a zero-length sequence.
//!
//! Serialization
//!
//!     The storage representation of a document is a JSON tree whose tag
//!     names are a contract with the rendering collaborator. See the
//!     [wire](wire) module for the exact shapes.

use std::fmt;

pub mod wire;

/// Root of a parsed article body: an ordered sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDocument {
    pub blocks: Vec<BlockNode>,
}

impl StructuredDocument {
    /// Build a document from parsed blocks, inserting the empty-paragraph
    /// placeholder when no blocks were produced.
    pub fn from_blocks(blocks: Vec<BlockNode>) -> Self {
        if blocks.is_empty() {
            Self {
                blocks: vec![BlockNode::Paragraph { inline: Vec::new() }],
            }
        } else {
            Self { blocks }
        }
    }
}

impl fmt::Display for StructuredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.blocks.len())
    }
}

/// A block-level node of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockNode {
    /// A heading with level 1, 2 or 3.
    Heading { level: u8, inline: Vec<TextSpan> },
    /// A paragraph; `inline` is empty only for the placeholder form.
    Paragraph { inline: Vec<TextSpan> },
    BulletList { items: Vec<ListItem> },
    OrderedList { items: Vec<ListItem> },
    /// A quote; the source lines are joined with single spaces before
    /// inline parsing, so a quote holds exactly one run of inline content.
    Blockquote { inline: Vec<TextSpan> },
    /// Verbatim code. `text` is `None` for a fence with no content lines.
    CodeBlock {
        language: Option<String>,
        text: Option<String>,
    },
    HorizontalRule,
    Table { rows: Vec<TableRow> },
}

impl BlockNode {
    /// The node's tag on the wire. Useful for diagnostics and assertions.
    pub fn node_type(&self) -> &'static str {
        match self {
            BlockNode::Heading { .. } => "heading",
            BlockNode::Paragraph { .. } => "paragraph",
            BlockNode::BulletList { .. } => "bulletList",
            BlockNode::OrderedList { .. } => "orderedList",
            BlockNode::Blockquote { .. } => "blockquote",
            BlockNode::CodeBlock { .. } => "codeBlock",
            BlockNode::HorizontalRule => "horizontalRule",
            BlockNode::Table { .. } => "table",
        }
    }
}

/// One item of a bullet or ordered list: a single paragraph of inline
/// content. Nested lists and multi-line items are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub inline: Vec<TextSpan>,
}

/// One row of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// One cell of a table row. An empty cell keeps an empty inline sequence
/// and serializes as an empty-paragraph placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub is_header: bool,
    pub inline: Vec<TextSpan>,
}

/// A contiguous run of text sharing one set of marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub marks: Vec<Mark>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    pub fn marked(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Self {
            text: text.into(),
            marks,
        }
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span('{}', {} marks)", self.text, self.marks.len())
    }
}

/// An inline style annotation attached to a span.
///
/// Links always open in a new tab; the wire format carries the target
/// attribute as a constant, so the mark only stores the href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Link { href: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gets_placeholder_paragraph() {
        let doc = StructuredDocument::from_blocks(Vec::new());
        assert_eq!(
            doc.blocks,
            vec![BlockNode::Paragraph { inline: Vec::new() }]
        );
    }

    #[test]
    fn non_empty_documents_keep_their_blocks() {
        let blocks = vec![BlockNode::HorizontalRule];
        let doc = StructuredDocument::from_blocks(blocks.clone());
        assert_eq!(doc.blocks, blocks);
    }

    #[test]
    fn span_constructors() {
        let plain = TextSpan::plain("hello");
        assert_eq!(plain.text, "hello");
        assert!(plain.marks.is_empty());

        let bold = TextSpan::marked("hi", vec![Mark::Bold]);
        assert_eq!(bold.marks, vec![Mark::Bold]);
    }

    #[test]
    fn node_type_tags() {
        assert_eq!(BlockNode::HorizontalRule.node_type(), "horizontalRule");
        assert_eq!(
            BlockNode::Paragraph { inline: Vec::new() }.node_type(),
            "paragraph"
        );
    }
}
