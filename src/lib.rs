//! # coursemd
//!
//! Markdown importer core for course articles.
//!
//! Given an uploaded markdown file, this crate splits it into logical
//! documents, extracts a title per document, and parses each body into a
//! structured tree of blocks and styled text spans ready for storage.
//!
//! The pipeline, leaves first:
//!
//!     inline parser -> block tokenizer -> title/body extractor -> splitter
//!
//! All components are pure functions over in-memory strings: no I/O, no
//! shared state, deterministic, and linear in the input length. Malformed
//! markdown never fails; it degrades into plain paragraphs. The only
//! caller-facing rejection signals are ordinary values: an empty extracted
//! title, or zero segments from the splitter.
//!
//! Entry points:
//!
//! - [split_into_segments] — segment raw text into one chunk per article
//!   (used in "multiple documents" import mode).
//! - [parse_document] — title extraction plus block parsing for one segment.
//!
//! The resulting [StructuredDocument] serializes to the storage JSON
//! contract; see [ast::wire].

pub mod ast;
pub mod blocks;
pub mod extraction;
pub mod inlines;
pub mod slug;
pub mod splitting;

pub use ast::{BlockNode, ListItem, Mark, StructuredDocument, TableCell, TableRow, TextSpan};
pub use blocks::parse_blocks;
pub use extraction::{extract_title_and_body, parse_document, ImportCandidate, ParsedArticle};
pub use inlines::parse_inlines;
pub use slug::{generate_slug, unique_slug};
pub use splitting::split_into_segments;
