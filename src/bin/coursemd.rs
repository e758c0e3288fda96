//! Command-line interface for coursemd
//! This binary parses markdown files into the structured article JSON the
//! course platform stores.
//!
//! Usage:
//!   coursemd import `<path>` [--mode single|multiple]  - Parse a file into article JSON
//!   coursemd split `<path>`                            - Print the logical document segments

use std::collections::HashSet;

use clap::{Arg, Command};
use serde_json::{json, Value};

use coursemd::{generate_slug, parse_document, split_into_segments, unique_slug};

fn main() {
    let matches = Command::new("coursemd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for importing markdown files as structured course articles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("import")
                .about("Parse a markdown file into article JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .help("Import the file as one article, or split it into multiple")
                        .value_parser(["single", "multiple"])
                        .default_value("single"),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Print the logical document segments of a markdown file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("import", import_matches)) => {
            let path = import_matches.get_one::<String>("path").unwrap();
            let mode = import_matches.get_one::<String>("mode").unwrap();
            handle_import_command(path, mode);
        }
        Some(("split", split_matches)) => {
            let path = split_matches.get_one::<String>("path").unwrap();
            handle_split_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the import command
fn handle_import_command(path: &str, mode: &str) {
    let text = read_source(path);

    let segments = if mode == "multiple" {
        split_into_segments(&text)
    } else {
        vec![text]
    };

    let mut taken: HashSet<String> = HashSet::new();
    let mut articles: Vec<Value> = Vec::new();
    for segment in &segments {
        let article = parse_document(segment);
        // An empty title means the segment had no usable first line.
        if article.title.is_empty() {
            continue;
        }
        let slug = unique_slug(&generate_slug(&article.title), &taken);
        taken.insert(slug.clone());
        articles.push(json!({
            "title": article.title,
            "slug": slug,
            "content": article.content,
        }));
    }

    if articles.is_empty() {
        eprintln!("Error: could not parse any articles from the file");
        std::process::exit(1);
    }

    let output = serde_json::to_string_pretty(&Value::Array(articles)).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}

/// Handle the split command
fn handle_split_command(path: &str) {
    let text = read_source(path);
    let segments = split_into_segments(&text);

    if segments.is_empty() {
        eprintln!("Error: no content found in the file");
        std::process::exit(1);
    }

    let output = serde_json::to_string_pretty(&segments).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });
    println!("{}", output);
}
