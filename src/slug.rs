//! URL slug generation for imported articles
//!
//!     Titles become store keys: lowercased, stripped of punctuation,
//!     whitespace collapsed to single hyphens. Only ASCII word characters
//!     survive, matching what the store historically accepted. Uniqueness
//!     within one import batch is handled by numeric suffixes; conflicts
//!     against already-stored slugs are the persistence layer's problem.

use std::collections::HashSet;

/// Turn a title into a URL slug.
///
/// Lowercase, trim, drop everything that is not an ASCII word character,
/// whitespace or hyphen, collapse whitespace runs and hyphen runs to a
/// single hyphen, and trim hyphens from both ends.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut previous_hyphen = false;

    for ch in lowered.trim().chars() {
        if ch.is_whitespace() || ch == '-' {
            if !previous_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            previous_hyphen = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
            previous_hyphen = false;
        }
        // Punctuation and non-ASCII characters are dropped.
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Find a slug not present in `taken`, suffixing `-1`, `-2`, ... as needed.
pub fn unique_slug(base: &str, taken: &HashSet<String>) -> String {
    if !taken.contains(base) {
        return base.to_string();
    }
    let mut suffix = 1;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
