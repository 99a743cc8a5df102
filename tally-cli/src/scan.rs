//! Derives the flat descriptor stream the core expects from raw Markdown.
//!
//! This is the host side of the pipeline: it decides which lines are list
//! items and how deep they nest. Everything after that is the core's job.

use once_cell::sync::Lazy;
use regex::Regex;
use tally_core::LineDescriptor;

/// A bulleted (`-`, `*`, `+`) or numbered (`1.`) list item with optional
/// leading indentation.
static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t]*)(?:[-*+]|\d+\.)\s+").unwrap());

/// Scans a whole document into list-item descriptors, in document order.
///
/// Offsets are byte offsets into `text`. Non-list lines are skipped
/// entirely; they carry no depth and do not affect nesting. Indentation
/// maps to a 1-based level: every `tab_width` spaces (or one literal tab)
/// is one level deeper.
pub fn scan_document(text: &str, tab_width: usize) -> Vec<LineDescriptor> {
    let mut descriptors = Vec::new();
    let mut offset = 0;
    for raw in text.split_inclusive('\n') {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(caps) = LIST_ITEM_RE.captures(line) {
            let indent = caps.get(1).map_or("", |m| m.as_str());
            descriptors.push(LineDescriptor {
                level: indent_level(indent, tab_width),
                text: line.to_string(),
                line_start: offset,
                line_end: offset + line.len(),
            });
        }
        offset += raw.len();
    }
    descriptors
}

fn indent_level(indent: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let width: usize = indent
        .chars()
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum();
    width / tab_width + 1
}
