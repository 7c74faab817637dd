//! The tree container and the algorithms that change its shape.
//!
//! # Examples
//!
//! ```
//! use rooted_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Ok(2));
//! assert_eq!(tree.find(&1), Err(Error::KeyNotFound));
//! ```

use std::fmt;
use std::iter::FromIterator;
use std::mem;

use tracing::{debug, trace};

use crate::error::Result;
use crate::node::{Entry, Node, NodeId, NodeRef, Side};
use crate::slab::Slab;

/// An unbalanced Binary Search Tree mapping keys to values.
///
/// The shape of the tree is decided purely by insertion order. Keys that compare equal to an
/// existing key are stored again, to the right of it, rather than replacing it.
///
/// The root node is created with the tree and keeps its [`NodeId`] for the tree's whole life. An
/// empty tree is a root with no key; the first insert fills that root in, and removals that
/// would delete the root copy a replacement into it instead.
#[derive(Clone)]
pub struct Tree<K, V> {
    pub(crate) nodes: Slab<Node<K, V>>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("root", &self.root())
            .finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Generates a new, empty `Tree` with room for `capacity` nodes before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Slab::with_capacity(capacity.max(1));
        let root = nodes.push(Node::sentinel());
        debug_assert_eq!(root, NodeId::ROOT);
        Self { nodes }
    }

    /// The number of key/value pairs stored.
    pub fn len(&self) -> usize {
        self.nodes.len() - usize::from(self.root().is_sentinel())
    }

    /// Returns true if the tree stores nothing.
    pub fn is_empty(&self) -> bool {
        self.root().is_sentinel()
    }

    /// The root node. It exists even when the tree is empty, in which case it has no key.
    pub fn root(&self) -> NodeRef<'_, K, V> {
        NodeRef::new(&self.nodes, NodeId::ROOT)
    }

    /// The node with the given id, or `None` if no node currently has that id.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, K, V>> {
        self.nodes.get(id).map(|_| NodeRef::new(&self.nodes, id))
    }

    /// Values in ascending key order. See [`NodeRef::dfs_in_order`].
    pub fn dfs_in_order(&self) -> Vec<&V> {
        self.root().dfs_in_order()
    }

    /// Values in pre-order. See [`NodeRef::dfs_pre_order`].
    pub fn dfs_pre_order(&self) -> Vec<&V> {
        self.root().dfs_pre_order()
    }

    /// Values level by level from the root. See [`NodeRef::bfs`].
    pub fn bfs(&self) -> Vec<&V> {
        self.root().bfs()
    }

    /// Height of the whole tree. See [`NodeRef::height`].
    pub fn height(&self) -> usize {
        self.root().height()
    }

    /// The value with the `k`-th largest key. See [`NodeRef::find_kth_largest_value`].
    pub fn find_kth_largest_value(&self, k: usize) -> Result<&V> {
        self.root().find_kth_largest_value(k)
    }

    /// Inserts the given value into the tree stored at the given key.
    ///
    /// Keys less than a node's key go left, everything else goes right, so inserting a key that
    /// is already present adds a second node instead of overwriting the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rooted_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// let root = tree.root().id();
    ///
    /// // The first insert fills in the existing root.
    /// tree.insert(5, "a");
    /// assert_eq!(tree.root().id(), root);
    ///
    /// tree.insert(5, "b");
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.dfs_in_order(), [&"a", &"b"]);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut current = NodeId::ROOT;
        loop {
            let node = &self.nodes[current];
            let Some(entry) = &node.entry else {
                // Only an empty tree's root lacks an entry, and it has no children.
                trace!("populating empty root");
                self.nodes[current].entry = Some(Entry { key, value });
                return;
            };
            let side = if key < entry.key {
                Side::Left
            } else {
                Side::Right
            };
            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let leaf = self.nodes.push(Node::leaf(key, value, current));
                    *self.nodes[current].child_mut(side) = Some(leaf);
                    trace!(parent = ?current, node = ?leaf, ?side, "attached leaf");
                    self.debug_assert_links(current);
                    return;
                }
            }
        }
    }

    /// Finds the value associated with the given key. When the key was inserted more than once,
    /// the value of the shallowest matching node is returned.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`][crate::Error::KeyNotFound] if no node has the key.
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        self.root().find(key)
    }

    /// Returns true if some node has the given key.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_ok()
    }

    /// Returns true if the keys are in order. See [`NodeRef::is_bst`].
    pub fn is_bst(&self) -> bool
    where
        K: Ord,
    {
        self.root().is_bst()
    }

    /// Removes the node holding `key` (the one [`find`][Tree::find] would return) and returns
    /// its value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`][crate::Error::KeyNotFound] if no node has the key. The tree is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rooted_bst::{Error, Tree};
    ///
    /// let mut tree: Tree<_, _> = [5, 3, 8, 1, 4, 7, 9].iter().map(|&k| (k, k)).collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.find(&5), Err(Error::KeyNotFound));
    /// assert_eq!(tree.dfs_in_order(), [&1, &3, &4, &7, &8, &9]);
    ///
    /// // The in-order successor moved into the root.
    /// assert_eq!(tree.root().key(), Some(&7));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let target = self.root().search(key)?.0.id();
        Ok(self.remove_node(target))
    }

    fn remove_node(&mut self, target: NodeId) -> V {
        let node = &self.nodes[target];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                // The successor is the leftmost node of the right subtree, so it has no left
                // child and unlinking it is one of the simple cases.
                let successor = self.leftmost(right);
                debug!(node = ?target, ?successor, "removing node with two children");
                let successor_right = self.nodes[successor].right;
                let successor_entry = self.splice(successor, successor_right);
                let removed = mem::replace(&mut self.nodes[target].entry, Some(successor_entry));
                removed.expect("a node with children has an entry").value
            }
            (only_child, None) | (None, only_child) => {
                debug!(node = ?target, child = ?only_child, "removing node");
                self.splice(target, only_child).value
            }
        }
    }

    /// Follows left links from `id` until there are none.
    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Unlinks `target`, which has no children besides `replacement`, putting `replacement` in
    /// its place. Returns the entry `target` held.
    ///
    /// The root is never unlinked: it takes over the replacement's contents instead, or goes
    /// back to being empty.
    fn splice(&mut self, target: NodeId, replacement: Option<NodeId>) -> Entry<K, V> {
        let Some(parent) = self.nodes[target].parent else {
            return self.overwrite_root(replacement);
        };

        let side = if self.nodes[parent].left == Some(target) {
            Side::Left
        } else {
            Side::Right
        };
        *self.nodes[parent].child_mut(side) = replacement;
        if let Some(child) = replacement {
            self.nodes[child].parent = Some(parent);
        }
        self.debug_assert_links(parent);

        self.nodes
            .remove(target)
            .entry
            .expect("only the root may lack an entry")
    }

    fn overwrite_root(&mut self, replacement: Option<NodeId>) -> Entry<K, V> {
        let new_contents = match replacement {
            Some(child) => {
                let mut child = self.nodes.remove(child);
                child.parent = None;
                child
            }
            None => Node::sentinel(),
        };
        let old = mem::replace(&mut self.nodes[NodeId::ROOT], new_contents);

        // The adopted grandchildren still point at the node that was just freed.
        let root = &self.nodes[NodeId::ROOT];
        for grandchild in root.left.into_iter().chain(root.right) {
            self.nodes[grandchild].parent = Some(NodeId::ROOT);
        }
        self.debug_assert_links(NodeId::ROOT);

        old.entry.expect("removed the root of an empty tree")
    }

    /// In debug builds, checks that the children of `id` point back at it.
    fn debug_assert_links(&self, id: NodeId) {
        if cfg!(debug_assertions) {
            let node = &self.nodes[id];
            for child in node.left.into_iter().chain(node.right) {
                assert_eq!(self.nodes[child].parent, Some(id));
            }
            if node.entry.is_none() {
                assert_eq!(id, NodeId::ROOT);
                assert!(node.left.is_none() && node.right.is_none());
            }
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Tree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for Tree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
