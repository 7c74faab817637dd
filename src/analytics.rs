//! Structural queries: height, ordering validation and order statistics.

use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{NodeId, NodeRef};

impl<'a, K, V> NodeRef<'a, K, V> {
    /// The number of edges on the longest path from this node down to a leaf. A leaf (and the
    /// root of an empty tree) has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use rooted_bst::Tree;
    ///
    /// // Ascending keys build a chain.
    /// let tree: Tree<_, _> = (0..4).map(|x| (x, x)).collect();
    /// assert_eq!(tree.root().height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = vec![(self.id, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = NodeRef::new(self.nodes, id);
            if node.is_leaf() {
                height = height.max(depth);
                continue;
            }
            stack.extend(node.node.left.map(|left| (left, depth + 1)));
            stack.extend(node.node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns true if the in-order key sequence of this subtree never decreases. Equal keys
    /// next to each other are fine since duplicates are allowed.
    pub fn is_bst(&self) -> bool
    where
        K: Ord,
    {
        self.entries_in_order()
            .windows(2)
            .all(|pair| pair[0].key <= pair[1].key)
    }

    /// The value whose key ranks `k`-th from the top of this subtree; `k == 1` is the largest.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `k` is 0 or larger than the number of stored values.
    ///
    /// # Examples
    ///
    /// ```
    /// use rooted_bst::{Error, Tree};
    ///
    /// let tree: Tree<_, _> = [5, 3, 8].iter().map(|&k| (k, k * 10)).collect();
    ///
    /// assert_eq!(tree.root().find_kth_largest_value(1), Ok(&80));
    /// assert_eq!(tree.root().find_kth_largest_value(3), Ok(&30));
    /// assert_eq!(
    ///     tree.root().find_kth_largest_value(4),
    ///     Err(Error::OutOfRange { k: 4, len: 3 })
    /// );
    /// ```
    pub fn find_kth_largest_value(&self, k: usize) -> Result<&'a V> {
        let entries = self.entries_in_order();
        let len = entries.len();
        if k == 0 || k > len {
            debug!(k, len, "k-th largest query out of range");
            return Err(Error::OutOfRange { k, len });
        }
        Ok(&entries[len - k].value)
    }
}
