//! Extracts a time range and its highlightable span from one outline line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::duration::{TimeDuration, diff};

/// A half-open `[from, to)` span into the source text, marking the text a
/// renderer should highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkRange {
    pub from: usize,
    pub to: usize,
}

/// What a single line contributed: an elapsed duration, a highlight span,
/// both, or neither. Offsets are relative to the line; the tree builder
/// translates them into document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLine {
    pub duration: Option<TimeDuration>,
    pub mark: Option<MarkRange>,
}

/// Two `HH:MM` tokens separated by a hyphen or either Unicode dash, with
/// arbitrary text around them. Start time first, end time second.
static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}:\d{2})\s*[-–—]\s*(\d{2}:\d{2})").unwrap());

/// Mirror of [`RANGE_RE`] for span tracking: the first token plus an
/// optional dash-and-second-token tail. An empty tail means the line only
/// held a lone clock time, which gets no highlight.
static MARK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2}:\d{2})((?:\s*[-–—]\s*\d{2}:\d{2})?)").unwrap());

/// Parses one line of a task outline.
///
/// Two extractions run independently: the duration needs both clock
/// tokens, and the highlight span covers the first token through the end
/// of the dash-plus-second-token tail. Lines without a full time range are
/// the common case and simply contribute nothing.
///
/// # Examples
///
/// ```
/// use tally_core::parse_line::parse_task_line;
/// use tally_core::duration::TimeDuration;
///
/// let parsed = parse_task_line("- 09:00 - 10:00 Standup");
/// assert_eq!(parsed.duration, Some(TimeDuration { hours: 1, minutes: 0 }));
/// let mark = parsed.mark.unwrap();
/// assert_eq!(&"- 09:00 - 10:00 Standup"[mark.from..mark.to], "09:00 - 10:00");
/// ```
pub fn parse_task_line(text: &str) -> ParsedLine {
    let duration = RANGE_RE.captures(text).map(|caps| {
        let start = caps.get(1).map_or("", |m| m.as_str());
        let end = caps.get(2).map_or("", |m| m.as_str());
        diff(start, end)
    });

    let mark = MARK_RE.captures(text).and_then(|caps| {
        let full = caps.get(0)?;
        let token = caps.get(1).map_or("", |m| m.as_str());
        let tail = caps.get(2).map_or("", |m| m.as_str());
        if tail.is_empty() {
            return None;
        }
        Some(MarkRange {
            from: full.start(),
            to: full.start() + token.len() + tail.len(),
        })
    });

    ParsedLine { duration, mark }
}
