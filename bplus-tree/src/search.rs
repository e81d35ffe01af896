//! Key scanning and root-to-leaf descent.
//!
//! Leaf and internal nodes scan with deliberately different comparisons:
//! a leaf scan finds the lowest index whose key is `>= k` (so an exact
//! match lands on its own slot), while an internal scan finds the lowest
//! index whose key is `> k` (so a child holding `k` is reached through the
//! child pointer to its *left*).

use crate::node::{Node, NodeId, NodeStore};

/// Lowest index `i` in `node`'s keys such that `keys[i] >= k`, or
/// `node.key_count()` if every key is smaller.
pub(crate) fn leaf_scan(node: &Node, k: u64) -> usize {
    let count = node.key_count();
    (0..count).find(|&i| node.get_key(i) >= k).unwrap_or(count)
}

/// Lowest index `i` in `node`'s keys such that `keys[i] > k`, or
/// `node.key_count()` if every key is smaller or equal.
pub(crate) fn internal_scan(node: &Node, k: u64) -> usize {
    let count = node.key_count();
    (0..count).find(|&i| node.get_key(i) > k).unwrap_or(count)
}

/// One step recorded while descending from the root towards a leaf: which
/// ancestor was visited, which child index was taken, how many keys that
/// ancestor held at the time, and (only meaningful during an insert's
/// preallocation pass) a preallocated split sibling for that ancestor.
#[derive(Clone, Copy)]
pub(crate) struct PathFrame {
    pub(crate) node: NodeId,
    pub(crate) child_index: usize,
    pub(crate) key_count: usize,
    pub(crate) sibling: Option<NodeId>,
}

impl PathFrame {
    pub(crate) fn empty() -> Self {
        // `node` is never read before this frame is overwritten by a real
        // descent step, so any valid handle is a safe placeholder; `root`
        // itself is always allocated by the time a path array grows.
        PathFrame {
            node: NodeId::placeholder(),
            child_index: 0,
            key_count: 0,
            sibling: None,
        }
    }
}

/// Walks from `root` to the leaf that would hold `k`, recording one
/// [`PathFrame`] per internal level into `path[0..depth]`. Returns the
/// reached leaf's id. `path` must already have capacity for `depth` frames.
pub(crate) fn find_leaf(
    store: &NodeStore,
    root: NodeId,
    depth: usize,
    path: &mut [PathFrame],
    k: u64,
) -> NodeId {
    let mut node = root;
    for frame in path.iter_mut().take(depth) {
        let n = store.get(node);
        let count = n.key_count();
        let i = internal_scan(n, k);
        *frame = PathFrame {
            node,
            child_index: i,
            key_count: count,
            sibling: None,
        };
        node = n.get_child(i).expect("internal node missing child");
    }
    node
}
