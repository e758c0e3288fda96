//! Block-level tokenizer
//!
//!     Converts an article body into a [StructuredDocument]: an ordered
//!     sequence of block nodes. The tokenizer walks the body line by line
//!     with an explicit cursor. Each iteration classifies the current line
//!     against a fixed precedence of patterns, first match wins:
//!
//!         blank -> heading (###, ##, #) -> horizontal rule -> table row
//!         -> code fence -> blockquote -> bullet item -> ordered item
//!         -> paragraph fallback
//!
//!     Single-line blocks (headings, rules) consume exactly one line.
//!     Grouped blocks (tables, fenced code, quotes, lists, paragraphs) keep
//!     consuming lines while their continuation condition holds, so the
//!     cursor always advances by at least one line per emitted block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{BlockNode, ListItem, StructuredDocument, TableCell, TableRow};
use crate::inlines::parse_inlines;

static BULLET_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s").unwrap());
static BULLET_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());
static ORDERED_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());
/// A separator cell contains only whitespace, hyphens and colons.
static SEPARATOR_CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s\-:]+$").unwrap());

/// Parse an article body into a structured document.
///
/// Malformed input never fails; anything that matches no block pattern
/// degrades into a paragraph. An empty body yields a document with one
/// empty-paragraph placeholder.
pub fn parse_blocks(body: &str) -> StructuredDocument {
    let lines: Vec<&str> = body.split('\n').collect();
    let mut blocks: Vec<BlockNode> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        // Headings, deepest marker first so "###" is not read as "#".
        if let Some(rest) = line.strip_prefix("### ") {
            blocks.push(heading(3, rest));
            i += 1;
            continue;
        }
        if let Some(rest) = line.strip_prefix("## ") {
            blocks.push(heading(2, rest));
            i += 1;
            continue;
        }
        if let Some(rest) = line.strip_prefix("# ") {
            blocks.push(heading(1, rest));
            i += 1;
            continue;
        }

        if matches!(line.trim(), "---" | "***" | "___") {
            blocks.push(BlockNode::HorizontalRule);
            i += 1;
            continue;
        }

        if is_table_row(line) {
            i = scan_table(&lines, i, &mut blocks);
            continue;
        }

        if line.starts_with("```") {
            i = scan_code_block(&lines, i, &mut blocks);
            continue;
        }

        if line.starts_with("> ") {
            i = scan_blockquote(&lines, i, &mut blocks);
            continue;
        }

        if BULLET_ITEM.is_match(line) {
            i = scan_list(&lines, i, &mut blocks, &BULLET_ITEM, &BULLET_STRIP, false);
            continue;
        }

        if ORDERED_ITEM.is_match(line) {
            i = scan_list(&lines, i, &mut blocks, &ORDERED_ITEM, &ORDERED_STRIP, true);
            continue;
        }

        i = scan_paragraph(&lines, i, &mut blocks);
    }

    StructuredDocument::from_blocks(blocks)
}

fn heading(level: u8, rest: &str) -> BlockNode {
    BlockNode::Heading {
        level,
        inline: parse_inlines(rest.trim_start()),
    }
}

fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table-row line into trimmed cell texts, dropping the empty
/// fragments outside the outer pipes.
fn split_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.trim().split('|').collect();
    if parts.len() <= 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// The header/body divider row: every cell is made of whitespace, hyphens
/// and colons with at least one hyphen. A row with no cells counts too.
fn is_separator_row(cells: &[String]) -> bool {
    cells
        .iter()
        .all(|cell| SEPARATOR_CELL.is_match(cell) && cell.contains('-'))
}

fn scan_table(lines: &[&str], start: usize, blocks: &mut Vec<BlockNode>) -> usize {
    let mut i = start;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    let mut has_separator = false;

    while i < lines.len() && is_table_row(lines[i]) {
        let cells = split_cells(lines[i]);
        if is_separator_row(&cells) {
            has_separator = true;
            i += 1;
            continue;
        }
        raw_rows.push(cells);
        i += 1;
    }

    if raw_rows.is_empty() {
        return i;
    }

    // Normalize every row to the widest one; short rows are padded with
    // empty non-header cells so columns stay aligned by position.
    let max_cols = raw_rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for (row_index, raw) in raw_rows.iter().enumerate() {
        let is_header = has_separator && row_index == 0;
        let mut cells = Vec::with_capacity(max_cols);
        for col in 0..max_cols {
            match raw.get(col) {
                Some(text) if !text.is_empty() => cells.push(TableCell {
                    is_header,
                    inline: parse_inlines(text),
                }),
                Some(_) => cells.push(TableCell {
                    is_header,
                    inline: Vec::new(),
                }),
                None => cells.push(TableCell {
                    is_header: false,
                    inline: Vec::new(),
                }),
            }
        }
        rows.push(TableRow { cells });
    }

    blocks.push(BlockNode::Table { rows });
    i
}

fn scan_code_block(lines: &[&str], start: usize, blocks: &mut Vec<BlockNode>) -> usize {
    let tag = lines[start][3..].trim();
    let language = if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    };

    let mut i = start + 1;
    let mut code: Vec<&str> = Vec::new();
    while i < lines.len() && !lines[i].starts_with("```") {
        code.push(lines[i]);
        i += 1;
    }

    // Code content is verbatim; no inline parsing.
    let text = if code.is_empty() {
        None
    } else {
        Some(code.join("\n"))
    };
    blocks.push(BlockNode::CodeBlock { language, text });

    // Step over the closing fence when one exists.
    i + 1
}

fn scan_blockquote(lines: &[&str], start: usize, blocks: &mut Vec<BlockNode>) -> usize {
    let mut i = start;
    let mut quote: Vec<&str> = Vec::new();
    while i < lines.len() && lines[i].starts_with("> ") {
        quote.push(lines[i].strip_prefix("> ").unwrap_or(lines[i]));
        i += 1;
    }
    blocks.push(BlockNode::Blockquote {
        inline: parse_inlines(&quote.join(" ")),
    });
    i
}

fn scan_list(
    lines: &[&str],
    start: usize,
    blocks: &mut Vec<BlockNode>,
    marker: &Regex,
    strip: &Regex,
    ordered: bool,
) -> usize {
    let mut i = start;
    let mut items: Vec<ListItem> = Vec::new();
    while i < lines.len() && marker.is_match(lines[i]) {
        let text = strip.replace(lines[i], "");
        items.push(ListItem {
            inline: parse_inlines(&text),
        });
        i += 1;
    }
    blocks.push(if ordered {
        BlockNode::OrderedList { items }
    } else {
        BlockNode::BulletList { items }
    });
    i
}

/// A line continues the current paragraph when it is non-blank and starts
/// no other block. The `#`, `>` and list checks are prefix/marker tests,
/// so lines like "#foo" break a paragraph without opening a heading.
fn continues_paragraph(line: &str) -> bool {
    !line.trim().is_empty()
        && !line.starts_with('#')
        && !line.starts_with('>')
        && !line.starts_with("```")
        && !BULLET_ITEM.is_match(line)
        && !ORDERED_ITEM.is_match(line)
        && line.trim() != "---"
}

fn scan_paragraph(lines: &[&str], start: usize, blocks: &mut Vec<BlockNode>) -> usize {
    let mut i = start;
    let mut paragraph: Vec<&str> = Vec::new();
    while i < lines.len() && continues_paragraph(lines[i]) {
        paragraph.push(lines[i]);
        i += 1;
    }

    if paragraph.is_empty() {
        // The line broke the paragraph scan but opened no block (e.g.
        // "#foo"). Emit it alone so the cursor keeps moving.
        blocks.push(BlockNode::Paragraph {
            inline: parse_inlines(lines[i]),
        });
        return i + 1;
    }

    blocks.push(BlockNode::Paragraph {
        inline: parse_inlines(&paragraph.join(" ")),
    });
    i
}
