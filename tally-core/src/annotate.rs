//! Turns an aggregated task forest into position-ordered annotation
//! instructions for a rendering layer.

use crate::duration::TimeDuration;
use crate::outline::{NodeId, TaskTree};
use crate::parse_line::MarkRange;

/// Cosmetic payload attached to every highlight. Renderers are free to map
/// these onto whatever their medium offers (CSS classes, ANSI styling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub font_family: &'static str,
    pub color: &'static str,
    pub letter_spacing: &'static str,
}

/// The one style every time-range highlight carries.
pub const HIGHLIGHT_STYLE: HighlightStyle = HighlightStyle {
    font_family: "monospace",
    color: "accent",
    letter_spacing: "0.05em",
};

/// One instruction for the rendering layer.
///
/// A `Highlight` styles an existing span of text; a `Label` is a
/// zero-width insertion rendered to the right of `position`. A build's
/// instruction sequence is non-decreasing in position, so hosts that
/// require in-order insertion can consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Highlight {
        range: MarkRange,
        style: HighlightStyle,
    },
    Label {
        position: usize,
        text: String,
    },
}

impl Annotation {
    /// The anchor offset used for ordering.
    pub fn position(&self) -> usize {
        match self {
            Annotation::Highlight { range, .. } => range.from,
            Annotation::Label { position, .. } => *position,
        }
    }
}

/// Inline label text for a resolved duration: `" — ⏱️ 1 h 30 mins"` under
/// the default icon. The leading separator and the duration wording are a
/// compatibility contract.
pub fn label_text(duration: TimeDuration, icon: &str) -> String {
    format!(" — {icon} {duration}")
}

/// Walks the aggregated forest in document order and emits instructions.
///
/// Pre-order: each node's own highlight and label come before anything
/// from its descendants, which matches the document order of their
/// anchors. The synthetic root emits nothing, and a zero duration emits no
/// label.
pub fn emit(tree: &TaskTree, icon: &str) -> Vec<Annotation> {
    let mut out = Vec::new();
    for &id in tree.roots() {
        emit_node(tree, id, icon, &mut out);
    }
    debug_assert!(
        out.windows(2).all(|w| w[0].position() <= w[1].position()),
        "annotation sequence must be non-decreasing in position"
    );
    out
}

fn emit_node(tree: &TaskTree, id: NodeId, icon: &str, out: &mut Vec<Annotation>) {
    let node = tree.node(id);
    if let Some(range) = node.mark {
        out.push(Annotation::Highlight {
            range,
            style: HIGHLIGHT_STYLE,
        });
    }
    if let Some(duration) = node.duration {
        if !duration.is_zero() {
            out.push(Annotation::Label {
                position: node.position,
                text: label_text(duration, icon),
            });
        }
    }
    for &child in &node.children {
        emit_node(tree, child, icon, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::outline::LineDescriptor;

    fn descriptors(lines: &[(usize, &str)]) -> Vec<LineDescriptor> {
        let mut offset = 0;
        lines
            .iter()
            .map(|&(level, text)| {
                let d = LineDescriptor {
                    level,
                    text: text.to_string(),
                    line_start: offset,
                    line_end: offset + text.len(),
                };
                offset += text.len() + 1;
                d
            })
            .collect()
    }

    fn annotate(lines: &[(usize, &str)]) -> Vec<Annotation> {
        let mut tree = TaskTree::new();
        for d in descriptors(lines) {
            tree.push_line(&d);
        }
        aggregate(&mut tree);
        emit(&tree, "⏱️")
    }

    #[test]
    fn end_to_end_scenario() {
        let annotations = annotate(&[
            (1, "- 09:00-10:00 A"),
            (2, "    - 09:00-09:30 B"),
            (2, "    - child no time"),
        ]);

        let labels: Vec<&str> = annotations
            .iter()
            .filter_map(|a| match a {
                Annotation::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        // A keeps its parsed hour despite its children; the rangeless
        // child aggregates to zero and stays silent.
        assert_eq!(labels, vec![" — ⏱️ 1 h 0 mins", " — ⏱️ 30 mins"]);

        let highlights = annotations
            .iter()
            .filter(|a| matches!(a, Annotation::Highlight { .. }))
            .count();
        assert_eq!(highlights, 2);
    }

    #[test]
    fn positions_are_non_decreasing() {
        let annotations = annotate(&[
            (1, "- 09:00 - 10:00 morning block"),
            (2, "    - 09:00 - 09:15 standup"),
            (2, "    - 09:15 - 10:00 focus"),
            (1, "- afternoon"),
            (2, "    - 13:00 - 14:30 pairing"),
        ]);
        assert!(!annotations.is_empty());
        for pair in annotations.windows(2) {
            assert!(pair[0].position() <= pair[1].position());
        }
    }

    #[test]
    fn node_annotations_precede_descendants() {
        let annotations = annotate(&[(1, "- 09:00 - 11:00 outer"), (2, "    - 09:30 - 10:00 inner")]);
        // highlight(outer), label(outer), highlight(inner), label(inner)
        assert_eq!(annotations.len(), 4);
        assert!(matches!(annotations[0], Annotation::Highlight { .. }));
        assert!(matches!(annotations[1], Annotation::Label { .. }));
        assert!(matches!(annotations[2], Annotation::Highlight { .. }));
        assert!(matches!(annotations[3], Annotation::Label { .. }));
    }

    #[test]
    fn zero_duration_forest_emits_nothing() {
        let annotations = annotate(&[(1, "- groceries"), (2, "    - milk")]);
        assert!(annotations.is_empty());
    }

    #[test]
    fn label_honors_configured_icon() {
        let d = TimeDuration {
            hours: 0,
            minutes: 45,
        };
        assert_eq!(label_text(d, "🕐"), " — 🕐 45 mins");
    }

    #[test]
    fn highlight_carries_the_fixed_style() {
        let annotations = annotate(&[(1, "- 09:00 - 10:00 styled")]);
        match &annotations[0] {
            Annotation::Highlight { style, .. } => assert_eq!(*style, HIGHLIGHT_STYLE),
            other => panic!("expected a highlight, got {other:?}"),
        }
    }
}
