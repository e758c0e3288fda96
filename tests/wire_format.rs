//! Exact wire-shape tests for the storage JSON contract.
//!
//! Tag names and nesting here are consumed by the rendering side, so these
//! assertions compare whole trees, field for field.

use coursemd::{parse_blocks, parse_document};
use serde_json::json;

#[test]
fn empty_body_serializes_to_placeholder_doc() {
    let doc = parse_blocks("");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{ "type": "paragraph" }],
        })
    );
}

#[test]
fn bold_paragraph_wire_shape() {
    let doc = parse_blocks("Some **bold** text.");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "Some " },
                    { "type": "text", "marks": [{ "type": "bold" }], "text": "bold" },
                    { "type": "text", "text": " text." },
                ],
            }],
        })
    );
}

#[test]
fn bold_italic_span_carries_both_marks_in_order() {
    let doc = parse_blocks("***x***");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{
                    "type": "text",
                    "marks": [{ "type": "bold" }, { "type": "italic" }],
                    "text": "x",
                }],
            }],
        })
    );
}

#[test]
fn link_mark_wire_shape() {
    let doc = parse_blocks("[docs](https://example.com)");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [{
                    "type": "text",
                    "marks": [{
                        "type": "link",
                        "attrs": { "href": "https://example.com", "target": "_blank" },
                    }],
                    "text": "docs",
                }],
            }],
        })
    );
}

#[test]
fn heading_wire_shape() {
    let doc = parse_blocks("## Section");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "heading",
                "attrs": { "level": 2 },
                "content": [{ "type": "text", "text": "Section" }],
            }],
        })
    );
}

#[test]
fn list_items_wrap_paragraphs() {
    let doc = parse_blocks("- a\n- b");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "a" }],
                        }],
                    },
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{ "type": "text", "text": "b" }],
                        }],
                    },
                ],
            }],
        })
    );
}

#[test]
fn blockquote_wraps_one_paragraph() {
    let doc = parse_blocks("> quoted\n> words");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "blockquote",
                "content": [{
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": "quoted words" }],
                }],
            }],
        })
    );
}

#[test]
fn code_block_language_defaults_to_null() {
    let doc = parse_blocks("```\ncode here\n```");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "codeBlock",
                "attrs": { "language": null },
                "content": [{ "type": "text", "text": "code here" }],
            }],
        })
    );
}

#[test]
fn table_header_and_padded_cell_wire_shape() {
    // Second row is one cell short; the padded cell is an empty tableCell.
    let doc = parse_blocks("| A | B |\n|---|---|\n| 1 |");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "content": [{
                "type": "table",
                "content": [
                    {
                        "type": "tableRow",
                        "content": [
                            {
                                "type": "tableHeader",
                                "attrs": { "colspan": 1, "rowspan": 1 },
                                "content": [{
                                    "type": "paragraph",
                                    "content": [{ "type": "text", "text": "A" }],
                                }],
                            },
                            {
                                "type": "tableHeader",
                                "attrs": { "colspan": 1, "rowspan": 1 },
                                "content": [{
                                    "type": "paragraph",
                                    "content": [{ "type": "text", "text": "B" }],
                                }],
                            },
                        ],
                    },
                    {
                        "type": "tableRow",
                        "content": [
                            {
                                "type": "tableCell",
                                "attrs": { "colspan": 1, "rowspan": 1 },
                                "content": [{
                                    "type": "paragraph",
                                    "content": [{ "type": "text", "text": "1" }],
                                }],
                            },
                            {
                                "type": "tableCell",
                                "attrs": { "colspan": 1, "rowspan": 1 },
                                "content": [{ "type": "paragraph" }],
                            },
                        ],
                    },
                ],
            }],
        })
    );
}

#[test]
fn parsed_article_content_serializes_directly() {
    let article = parse_document("# T\n\nbody");
    let value = serde_json::to_value(&article.content).unwrap();
    assert_eq!(value["type"], "doc");
    assert_eq!(value["content"][0]["type"], "paragraph");
}
