//! Document splitter
//!
//!     Splits uploaded text into logical document segments, one per article.
//!     A new segment begins exactly where a "# " heading follows a blank
//!     line (start of input counts as blank). Consecutive heading lines
//!     with no blank separation stay in the same segment, so a title line
//!     directly followed by another "#" line is not torn apart.
//!
//!     Segments are flushed with trailing blank lines trimmed; a segment
//!     that is empty after trimming is discarded, never emitted.

/// Split raw text into logical document segments.
///
/// All-blank input yields no segments; input with no headings yields one.
pub fn split_into_segments(text: &str) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut previous_was_blank = true;

    for line in text.split('\n') {
        let starts_article = line.starts_with("# ");
        if starts_article && previous_was_blank && !current.is_empty() {
            flush_segment(&mut current, &mut segments);
            current.push(line);
        } else {
            current.push(line);
        }
        previous_was_blank = line.trim().is_empty();
    }

    flush_segment(&mut current, &mut segments);
    segments
}

/// Drain the accumulator into a segment, trimming trailing blank lines and
/// dropping the segment entirely when nothing remains.
fn flush_segment(current: &mut Vec<&str>, segments: &mut Vec<String>) {
    while current.last().is_some_and(|line| line.trim().is_empty()) {
        current.pop();
    }
    if !current.is_empty() {
        segments.push(current.join("\n"));
    }
    current.clear();
}
