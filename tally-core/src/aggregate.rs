//! Fills in missing durations bottom-up from each task's descendants.

use crate::duration::{TimeDuration, sum};
use crate::outline::{NodeId, TaskTree};

/// Resolves every node's duration and returns the forest total.
///
/// Children are resolved before their parent. A node that parsed its own
/// time range keeps it unchanged, even when it also has children; only
/// rangeless nodes take the sum of their children's resolved durations. A
/// childless, rangeless node resolves to zero, which is the identity for
/// the sums above it and later suppresses its inline label.
pub fn aggregate(tree: &mut TaskTree) -> TimeDuration {
    let mut total = TimeDuration::ZERO;
    for id in tree.roots().to_vec() {
        total = sum(total, resolve(tree, id));
    }
    total
}

fn resolve(tree: &mut TaskTree, id: NodeId) -> TimeDuration {
    let children = tree.node(id).children.clone();
    if let Some(own) = tree.node(id).duration {
        // Descendants still need resolving for their own labels, but the
        // parsed range wins over their sum.
        for child in children {
            resolve(tree, child);
        }
        return own;
    }

    let mut total = TimeDuration::ZERO;
    for child in children {
        total = sum(total, resolve(tree, child));
    }
    tree.node_mut(id).duration = Some(total);
    total
}
