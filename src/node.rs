//! Nodes of the tree and read-only handles to them.
//!
//! Every node is the root of its own subtree, so the read operations (lookup, traversals,
//! analytics) live on [`NodeRef`] and work from whichever node they are called on.

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use crate::error::{Error, Result};
use crate::slab::Slab;

/// Identifies a node within a [`Tree`][crate::Tree].
///
/// Ids are slot indices, not pointers. An id stays attached to the same node until that node is
/// removed; the root's id never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root is the first node a tree stores and is never removed.
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Which child link of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A stored node. `parent` is a plain id, so children never own their parent.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// `None` only for the root of an empty tree.
    pub(crate) entry: Option<Entry<K, V>>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// The key-less root of an empty tree.
    pub(crate) fn sentinel() -> Self {
        Self {
            entry: None,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub(crate) fn leaf(key: K, value: V, parent: NodeId) -> Self {
        Self {
            entry: Some(Entry { key, value }),
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A read-only view of one node and, through its links, the subtree below it.
///
/// Obtained from [`Tree::root`][crate::Tree::root] or [`Tree::node`][crate::Tree::node].
///
/// # Examples
///
/// ```
/// use rooted_bst::Tree;
///
/// let tree: Tree<_, _> = vec![(5, "five"), (3, "three"), (8, "eight")]
///     .into_iter()
///     .collect();
///
/// let three = tree.root().left().unwrap();
/// assert_eq!(three.key(), Some(&3));
/// assert_eq!(three.parent().unwrap().id(), tree.root().id());
/// assert_eq!(tree.root().right().unwrap().value(), Some(&"eight"));
/// ```
pub struct NodeRef<'a, K, V> {
    pub(crate) nodes: &'a Slab<Node<K, V>>,
    pub(crate) id: NodeId,
    pub(crate) node: &'a Node<K, V>,
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.key())
            .field("value", &self.value())
            .field("left", &self.node.left)
            .field("right", &self.node.right)
            .finish()
    }
}

impl<'a, K, V> PartialEq for NodeRef<'a, K, V> {
    /// Two handles are equal when they view the same node of the same tree.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.id == other.id
    }
}

impl<'a, K, V> Eq for NodeRef<'a, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    /// Views the node stored at `id`.
    ///
    /// ## Panics
    ///
    /// When `id` is vacant. Callers only pass ids taken from links or already checked against
    /// the slab.
    pub(crate) fn new(nodes: &'a Slab<Node<K, V>>, id: NodeId) -> Self {
        Self {
            nodes,
            id,
            node: &nodes[id],
        }
    }

    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// This node's key, or `None` for the root of an empty tree.
    pub fn key(&self) -> Option<&'a K> {
        self.node.entry.as_ref().map(|entry| &entry.key)
    }

    /// This node's value, or `None` for the root of an empty tree.
    pub fn value(&self) -> Option<&'a V> {
        self.node.entry.as_ref().map(|entry| &entry.value)
    }

    /// Returns true if this is the key-less root of an empty tree.
    pub fn is_sentinel(&self) -> bool {
        self.node.entry.is_none()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node.left.is_none() && self.node.right.is_none()
    }

    /// The node this one hangs from, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.node.parent.map(|id| Self::new(self.nodes, id))
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<Self> {
        self.node.left.map(|id| Self::new(self.nodes, id))
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<Self> {
        self.node.right.map(|id| Self::new(self.nodes, id))
    }

    pub(crate) fn entry(&self) -> Option<&'a Entry<K, V>> {
        self.node.entry.as_ref()
    }

    /// Finds the value for `key` in the subtree rooted here.
    ///
    /// When keys are duplicated, the value of the shallowest matching node is returned.
    pub fn find(&self, key: &K) -> Result<&'a V>
    where
        K: Ord,
    {
        let (_, entry) = self.search(key)?;
        Ok(&entry.value)
    }

    /// Walks down from this node the same way `insert` would, stopping at the first node whose
    /// key equals `key`.
    pub(crate) fn search(&self, key: &K) -> Result<(Self, &'a Entry<K, V>)>
    where
        K: Ord,
    {
        let mut current = *self;
        loop {
            let entry = current.entry().ok_or(Error::KeyNotFound)?;
            let next = match key.cmp(&entry.key) {
                Ordering::Less => current.left(),
                Ordering::Equal => return Ok((current, entry)),
                Ordering::Greater => current.right(),
            };
            current = next.ok_or(Error::KeyNotFound)?;
        }
    }
}
