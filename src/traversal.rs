//! Depth-first and breadth-first walks over a subtree.
//!
//! Each walk returns a fresh `Vec` of values. They use explicit work lists rather than recursion
//! so a degenerate (chain shaped) tree can't overflow the stack.

use crate::node::{Entry, NodeId, NodeRef};
use crate::queue::Queue;

impl<'a, K, V> NodeRef<'a, K, V> {
    /// Values of the subtree rooted here, left subtree first, then this node, then the right
    /// subtree. For a valid tree this is ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rooted_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [5, 3, 8, 1, 4, 7, 9].iter().map(|&k| (k, k)).collect();
    /// assert_eq!(tree.root().dfs_in_order(), [&1, &3, &4, &5, &7, &8, &9]);
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&'a V> {
        self.entries_in_order()
            .into_iter()
            .map(|entry| &entry.value)
            .collect()
    }

    /// Values of the subtree rooted here, this node first, then the left subtree, then the right
    /// subtree.
    pub fn dfs_pre_order(&self) -> Vec<&'a V> {
        let mut values = Vec::new();
        let mut stack = vec![self.id];
        while let Some(id) = stack.pop() {
            let node = NodeRef::new(self.nodes, id);
            values.extend(node.value());
            // Right goes on first so that left comes off first.
            stack.extend(node.node.right);
            stack.extend(node.node.left);
        }
        values
    }

    /// Values of the subtree rooted here, shallowest level first and left to right within a
    /// level.
    pub fn bfs(&self) -> Vec<&'a V> {
        let mut values = Vec::new();
        let mut queue: Queue<NodeId> = Queue::new();
        queue.enqueue(self.id);
        while let Some(id) = queue.dequeue() {
            let node = NodeRef::new(self.nodes, id);
            values.extend(node.value());
            if let Some(left) = node.node.left {
                queue.enqueue(left);
            }
            if let Some(right) = node.node.right {
                queue.enqueue(right);
            }
        }
        values
    }

    /// Entries of the subtree rooted here in in-order sequence. The root of an empty tree has no
    /// entry and contributes nothing.
    pub(crate) fn entries_in_order(&self) -> Vec<&'a Entry<K, V>> {
        let mut entries = Vec::new();
        let mut stack = Vec::new();
        let mut current = Some(*self);
        loop {
            // Descend as far left as possible, remembering the path.
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            entries.extend(node.entry());
            current = node.right();
        }
        entries
    }
}
