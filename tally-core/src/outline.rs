//! Rebuilds the task forest from a flat, depth-tagged stream of lines.

use crate::duration::TimeDuration;
use crate::parse_line::{MarkRange, parse_task_line};

/// Index of a node inside a [`TaskTree`] arena.
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// One list-item line as reported by the host: its nesting depth (1-based),
/// raw text, and absolute start/end offsets in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDescriptor {
    pub level: usize,
    pub text: String,
    pub line_start: usize,
    pub line_end: usize,
}

/// One task in the outline.
///
/// `position` is the end of the item's own line, where an inline summary
/// label gets anchored. `mark` is present only when the line carried a
/// full time range; its offsets are absolute. `duration` starts as the
/// line's own parsed range and is filled in by aggregation otherwise.
#[derive(Debug, Clone)]
pub struct TaskNode {
    pub level: usize,
    pub position: usize,
    pub mark: Option<MarkRange>,
    pub duration: Option<TimeDuration>,
    pub parent: NodeId,
    pub children: Vec<NodeId>,
}

/// Arena-backed task forest, rebuilt from scratch on every host trigger.
///
/// Node 0 is a synthetic root at level 0. It owns the top-level tasks,
/// never emits annotations of its own, and guarantees the reparenting loop
/// in [`push_line`](Self::push_line) always terminates: no real list item
/// has a level below 1.
#[derive(Debug)]
pub struct TaskTree {
    nodes: Vec<TaskNode>,
    cursor: NodeId,
}

impl TaskTree {
    pub fn new() -> Self {
        let root = TaskNode {
            level: 0,
            position: 0,
            mark: None,
            duration: None,
            parent: ROOT,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            cursor: ROOT,
        }
    }

    /// Parses one line descriptor and attaches it to the forest.
    ///
    /// The parent is the nearest preceding node with a strictly smaller
    /// level, found by walking the current-parent cursor up its parent
    /// chain. This handles depth jumps of any size in both directions.
    /// The cursor persists across calls, so descriptors from several
    /// disjoint visible ranges still share one consistent tree within a
    /// single build.
    ///
    /// A descriptor with level 0 would collide with the synthetic root;
    /// the host never produces one, and if it did the line is skipped.
    pub fn push_line(&mut self, desc: &LineDescriptor) {
        if desc.level == 0 {
            return;
        }
        let parsed = parse_task_line(&desc.text);
        let mark = parsed.mark.map(|m| MarkRange {
            from: desc.line_start + m.from,
            to: desc.line_start + m.to,
        });

        while self.nodes[self.cursor].level >= desc.level {
            self.cursor = self.nodes[self.cursor].parent;
        }

        let id = self.nodes.len();
        self.nodes.push(TaskNode {
            level: desc.level,
            position: desc.line_end,
            mark,
            duration: parsed.duration,
            parent: self.cursor,
            children: Vec::new(),
        });
        self.nodes[self.cursor].children.push(id);
        self.cursor = id;
    }

    /// Top-level tasks, in document order.
    pub fn roots(&self) -> &[NodeId] {
        &self.nodes[ROOT].children
    }

    pub fn node(&self, id: NodeId) -> &TaskNode {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TaskNode {
        &mut self.nodes[id]
    }

    /// Number of real tasks (the synthetic root does not count).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

impl Default for TaskTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(level: usize, text: &str, line_start: usize) -> LineDescriptor {
        LineDescriptor {
            level,
            text: text.to_string(),
            line_start,
            line_end: line_start + text.len(),
        }
    }

    fn tree_of(descs: &[LineDescriptor]) -> TaskTree {
        let mut tree = TaskTree::new();
        for d in descs {
            tree.push_line(d);
        }
        tree
    }

    #[test]
    fn siblings_stay_on_one_level() {
        let tree = tree_of(&[desc(1, "- a", 0), desc(1, "- b", 10), desc(1, "- c", 20)]);
        assert_eq!(tree.roots().len(), 3);
        for &id in tree.roots() {
            assert!(tree.node(id).children.is_empty());
        }
    }

    #[test]
    fn children_nest_under_the_closest_shallower_node() {
        let tree = tree_of(&[
            desc(1, "- parent", 0),
            desc(2, "    - child", 20),
            desc(3, "        - grandchild", 40),
            desc(2, "    - second child", 70),
        ]);
        assert_eq!(tree.roots().len(), 1);
        let parent = tree.node(tree.roots()[0]);
        assert_eq!(parent.children.len(), 2);
        let child = tree.node(parent.children[0]);
        assert_eq!(child.children.len(), 1);
        let grandchild = tree.node(child.children[0]);
        assert_eq!(grandchild.parent, parent.children[0]);
    }

    #[test]
    fn depth_jump_down_then_large_dedent() {
        // 1 -> 3 skips a level; the next level-1 line must climb all the
        // way back to the root.
        let tree = tree_of(&[
            desc(1, "- a", 0),
            desc(3, "        - deep", 10),
            desc(1, "- b", 40),
        ]);
        assert_eq!(tree.roots().len(), 2);
        let a = tree.node(tree.roots()[0]);
        assert_eq!(a.children.len(), 1);
        assert_eq!(tree.node(a.children[0]).level, 3);
        let b = tree.node(tree.roots()[1]);
        assert!(b.children.is_empty());
    }

    #[test]
    fn every_parent_has_strictly_smaller_level() {
        let tree = tree_of(&[
            desc(2, "  - starts deep", 0),
            desc(4, "      - deeper", 20),
            desc(3, "    - back up", 50),
            desc(1, "- top", 80),
            desc(2, "  - child", 90),
        ]);
        for id in 1..=tree.len() {
            let node = tree.node(id);
            assert!(tree.node(node.parent).level < node.level);
        }
    }

    #[test]
    fn mark_is_translated_to_document_offsets() {
        let text = "- 09:00 - 10:00 Meeting";
        let tree = tree_of(&[desc(1, text, 100)]);
        let node = tree.node(tree.roots()[0]);
        let mark = node.mark.unwrap();
        assert_eq!(mark.from, 102);
        assert_eq!(mark.to, 102 + "09:00 - 10:00".len());
        assert_eq!(node.position, 100 + text.len());
    }

    #[test]
    fn level_zero_descriptor_is_skipped() {
        let mut tree = TaskTree::new();
        tree.push_line(&desc(0, "- not a real level", 0));
        assert!(tree.is_empty());
    }

    #[test]
    fn cursor_spans_disjoint_visible_ranges() {
        // Two visible sub-ranges of one document feed the same tree; the
        // child in the second range still attaches to the parent pushed
        // from the first.
        let mut tree = TaskTree::new();
        tree.push_line(&desc(1, "- parent", 0));
        tree.push_line(&desc(2, "    - visible child", 200));
        assert_eq!(tree.roots().len(), 1);
        let parent = tree.node(tree.roots()[0]);
        assert_eq!(parent.children.len(), 1);
    }
}
