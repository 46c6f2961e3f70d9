//! Utilities to traverse the KDTree structure.

use std::marker::PhantomData;

use crate::kdtree::distance::{LEFT, RIGHT};
use crate::kdtree::{Entry, KDTreeIndex};
use crate::r#type::IndexableNum;

/// A node in the KDTree.
///
/// Every node holds exactly one entry. Its children partition the remaining points of its
/// subtree on [`Node::axis`]: the left child holds keys strictly smaller than this node's key on
/// that axis, the right child holds everything else.
#[derive(Debug)]
pub struct Node<'a, V, N: IndexableNum, T: KDTreeIndex<V, N>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// Arena slot of this node, which is also its insertion index.
    slot: usize,

    depth: usize,

    phantom: PhantomData<(V, N)>,
}

impl<'a, V, N: IndexableNum, T: KDTreeIndex<V, N>> Node<'a, V, N, T> {
    pub(crate) fn from_root(tree: &'a T) -> Option<Self> {
        if tree.is_empty() {
            return None;
        }
        Some(Self::new(tree, 0, 0))
    }

    fn new(tree: &'a T, slot: usize, depth: usize) -> Self {
        Self {
            tree,
            slot,
            depth,
            phantom: PhantomData,
        }
    }

    /// The entry stored at this node.
    pub fn entry(&self) -> &'a Entry<V, N> {
        &self.tree.entries()[self.slot]
    }

    /// The position of this node's entry in [`KDTreeIndex::entries`].
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Distance from the root, which is at depth `0`.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The coordinate index this node splits its children on.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % self.tree.dims()
    }

    fn child(&self, side: usize) -> Option<Node<'a, V, N, T>> {
        self.tree.children()[self.slot][side]
            .map(|slot| Self::new(self.tree, slot, self.depth + 1))
    }

    /// The child holding keys strictly smaller than this node's on [`Self::axis`].
    pub fn left_child(&self) -> Option<Node<'a, V, N, T>> {
        self.child(LEFT)
    }

    /// The child holding keys greater than or equal to this node's on [`Self::axis`].
    pub fn right_child(&self) -> Option<Node<'a, V, N, T>> {
        self.child(RIGHT)
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.tree.children()[self.slot] == [None, None]
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}

impl<V, N: IndexableNum, T: KDTreeIndex<V, N>> Clone for Node<'_, V, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, N: IndexableNum, T: KDTreeIndex<V, N>> Copy for Node<'_, V, N, T> {}
