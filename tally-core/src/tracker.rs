//! The full pipeline: descriptor stream in, annotation instructions out.

use crate::aggregate::aggregate;
use crate::annotate::{Annotation, emit};
use crate::duration::TimeDuration;
use crate::outline::{LineDescriptor, TaskTree};

/// Everything one build produced: the position-ordered instruction
/// sequence plus the forest total (sum of the top-level tasks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationResult {
    pub annotations: Vec<Annotation>,
    pub total: TimeDuration,
}

/// Runs one full build over several disjoint visible sub-ranges.
///
/// All ranges feed a single tree, in order, so a task whose parent sits in
/// an earlier range still attaches correctly. The whole pass is a pure
/// function of its input: rebuilding from an unchanged stream yields an
/// identical result.
pub fn annotate_ranges(ranges: &[&[LineDescriptor]], icon: &str) -> AnnotationResult {
    let mut tree = TaskTree::new();
    for range in ranges {
        for desc in *range {
            tree.push_line(desc);
        }
    }
    let total = aggregate(&mut tree);
    let annotations = emit(&tree, icon);
    AnnotationResult { annotations, total }
}

/// Single-range convenience over [`annotate_ranges`].
pub fn annotate_lines(lines: &[LineDescriptor], icon: &str) -> AnnotationResult {
    annotate_ranges(&[lines], icon)
}
