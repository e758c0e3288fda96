//! Wire serialization for structured documents
//!
//!     The storage format is a JSON tree consumed by the rendering side.
//!     Tag names and nesting are a contract: "doc", "heading", "paragraph",
//!     "bulletList", "orderedList", "listItem", "blockquote", "codeBlock",
//!     "horizontalRule", "table", "tableRow", "tableCell"/"tableHeader",
//!     "text", with mark tags "bold", "italic", "code" and "link".
//!
//!     All traversal lives here, in one place, so the node types stay free
//!     of serialization concerns. `Serialize` for [StructuredDocument]
//!     delegates to [document_to_value].
//!
//!     Shape notes:
//!         - A paragraph with no inline content serializes without a
//!           "content" key (the placeholder form).
//!         - List items, blockquotes and table cells wrap their inline
//!           content in a single paragraph node.
//!         - A code block with no content lines omits "content"; its
//!           "language" attribute is null when no tag followed the fence.
//!         - Plain spans omit the "marks" key.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use super::{BlockNode, ListItem, Mark, StructuredDocument, TableCell, TableRow, TextSpan};

/// Convert a document to its wire JSON tree.
pub fn document_to_value(doc: &StructuredDocument) -> Value {
    json!({
        "type": "doc",
        "content": doc.blocks.iter().map(block_to_value).collect::<Vec<_>>(),
    })
}

pub fn block_to_value(block: &BlockNode) -> Value {
    match block {
        BlockNode::Heading { level, inline } => json!({
            "type": "heading",
            "attrs": { "level": level },
            "content": spans_to_values(inline),
        }),
        BlockNode::Paragraph { inline } => paragraph_node(inline),
        BlockNode::BulletList { items } => json!({
            "type": "bulletList",
            "content": items.iter().map(list_item_to_value).collect::<Vec<_>>(),
        }),
        BlockNode::OrderedList { items } => json!({
            "type": "orderedList",
            "content": items.iter().map(list_item_to_value).collect::<Vec<_>>(),
        }),
        BlockNode::Blockquote { inline } => json!({
            "type": "blockquote",
            "content": [paragraph_node(inline)],
        }),
        BlockNode::CodeBlock { language, text } => match text {
            Some(text) => json!({
                "type": "codeBlock",
                "attrs": { "language": language },
                "content": [{ "type": "text", "text": text }],
            }),
            None => json!({
                "type": "codeBlock",
                "attrs": { "language": language },
            }),
        },
        BlockNode::HorizontalRule => json!({ "type": "horizontalRule" }),
        BlockNode::Table { rows } => json!({
            "type": "table",
            "content": rows.iter().map(row_to_value).collect::<Vec<_>>(),
        }),
    }
}

fn row_to_value(row: &TableRow) -> Value {
    json!({
        "type": "tableRow",
        "content": row.cells.iter().map(cell_to_value).collect::<Vec<_>>(),
    })
}

fn cell_to_value(cell: &TableCell) -> Value {
    let tag = if cell.is_header { "tableHeader" } else { "tableCell" };
    json!({
        "type": tag,
        "attrs": { "colspan": 1, "rowspan": 1 },
        "content": [paragraph_node(&cell.inline)],
    })
}

fn list_item_to_value(item: &ListItem) -> Value {
    json!({
        "type": "listItem",
        "content": [paragraph_node(&item.inline)],
    })
}

fn paragraph_node(inline: &[TextSpan]) -> Value {
    if inline.is_empty() {
        json!({ "type": "paragraph" })
    } else {
        json!({ "type": "paragraph", "content": spans_to_values(inline) })
    }
}

fn spans_to_values(spans: &[TextSpan]) -> Vec<Value> {
    spans.iter().map(span_to_value).collect()
}

fn span_to_value(span: &TextSpan) -> Value {
    if span.marks.is_empty() {
        json!({ "type": "text", "text": span.text })
    } else {
        json!({
            "type": "text",
            "marks": span.marks.iter().map(mark_to_value).collect::<Vec<_>>(),
            "text": span.text,
        })
    }
}

fn mark_to_value(mark: &Mark) -> Value {
    match mark {
        Mark::Bold => json!({ "type": "bold" }),
        Mark::Italic => json!({ "type": "italic" }),
        Mark::Code => json!({ "type": "code" }),
        Mark::Link { href } => json!({
            "type": "link",
            "attrs": { "href": href, "target": "_blank" },
        }),
    }
}

impl Serialize for StructuredDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        document_to_value(self).serialize(serializer)
    }
}
