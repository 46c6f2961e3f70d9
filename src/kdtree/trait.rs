use geo_traits::CoordTrait;
use tinyvec::TinyVec;

use crate::error::{KDIndexError, Result};
use crate::kdtree::distance::{branch, check_dims, plane_distance, sq_euclidean, LEFT, RIGHT};
use crate::kdtree::{Entry, KDTree, Node};
use crate::r#type::IndexableNum;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<V, N: IndexableNum>: Sized {
    /// The number of coordinates in every point of this tree
    fn dims(&self) -> usize;

    /// All entries of this tree, in insertion order
    fn entries(&self) -> &[Entry<V, N>];

    /// The `[left, right]` child slots of each entry, parallel to [`Self::entries`]
    fn children(&self) -> &[[Option<usize>; 2]];

    /// The number of levels of this tree.
    ///
    /// `0` for an empty tree and `1` for a tree holding only its root. Because the tree is never
    /// rebalanced this can be as large as [`Self::len`] for adversarial (e.g. sorted) input.
    fn height(&self) -> usize;

    /// The number of items in this KDTree
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns `true` if nothing has been inserted yet.
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Iterate over all entries in insertion order.
    fn iter(&self) -> std::slice::Iter<'_, Entry<V, N>> {
        self.entries().iter()
    }

    /// Find the entry stored under exactly `key`.
    ///
    /// The search follows the same path an insertion of `key` would take and stops at the first
    /// node whose key equals `key` in every coordinate. When the same key was inserted more than
    /// once, that is the earliest of the duplicates; later ones sit deeper on the right-hand
    /// chain and are only reachable by traversal.
    ///
    /// Returns [`KDIndexError::NotFound`] if no such entry exists and
    /// [`KDIndexError::DimensionMismatch`] if `key` has the wrong number of coordinates.
    ///
    /// ```
    /// use kd_index::kdtree::{KDTree, KDTreeIndex};
    /// use kd_index::KDIndexError;
    ///
    /// let mut tree = KDTree::new(2);
    /// tree.insert(&[3., 4.], "Value 1").unwrap();
    /// tree.insert(&[5., 6.], "Value 2").unwrap();
    /// tree.insert(&[2., 7.], "Value 3").unwrap();
    ///
    /// assert_eq!(tree.lookup(&[3., 4.]).unwrap().value(), &"Value 1");
    /// assert_eq!(tree.lookup(&[9., 9.]), Err(KDIndexError::NotFound));
    /// ```
    fn lookup(&self, key: &[N]) -> Result<&Entry<V, N>> {
        check_dims(self.dims(), key)?;

        let entries = self.entries();
        let children = self.children();

        let mut current = if entries.is_empty() { None } else { Some(0) };
        let mut depth = 0;
        while let Some(slot) = current {
            let entry = &entries[slot];
            if entry.key() == key {
                return Ok(entry);
            }

            let axis = depth % self.dims();
            current = children[slot][branch(key, entry.key(), axis)];
            depth += 1;
        }

        Err(KDIndexError::NotFound)
    }

    /// Look up an entry by a coordinate of any type implementing [`CoordTrait`].
    fn lookup_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<&Entry<V, N>> {
        self.lookup(&coord_to_point(coord))
    }

    /// Find the entry closest to `query` by Euclidean distance.
    ///
    /// Returns the entry together with its distance to `query`. When several entries are
    /// equally close, the first one reached wins: parents before children, and the child on the
    /// query's side of a split before the other one.
    ///
    /// Returns [`KDIndexError::NotFound`] only if the tree is empty, and
    /// [`KDIndexError::DimensionMismatch`] if `query` has the wrong number of coordinates.
    ///
    /// ```
    /// use kd_index::kdtree::{KDTree, KDTreeIndex};
    ///
    /// let mut tree = KDTree::new(2);
    /// tree.insert(&[3., 4.], "Value 1").unwrap();
    /// tree.insert(&[5., 6.], "Value 2").unwrap();
    /// tree.insert(&[2., 7.], "Value 3").unwrap();
    ///
    /// let (entry, distance) = tree.nearest(&[4., 5.]).unwrap();
    /// assert_eq!(entry.value(), &"Value 1");
    /// assert_eq!(distance, 2f64.sqrt());
    /// ```
    fn nearest(&self, query: &[N]) -> Result<(&Entry<V, N>, N)> {
        check_dims(self.dims(), query)?;

        let entries = self.entries();
        let children = self.children();
        if entries.is_empty() {
            return Err(KDIndexError::NotFound);
        }

        // Seeded with the root, so NaN distances still yield a candidate.
        let mut best = 0;
        let mut best_dist = sq_euclidean(query, entries[0].key());

        // Frames are (slot, depth, guard). A far subtree carries its squared plane distance as
        // the guard and is skipped if that no longer beats the best distance once popped.
        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[(usize, usize, Option<N>); 32]> = TinyVec::new();
        stack.push((0, 0, None));

        while let Some((slot, depth, guard)) = stack.pop() {
            if guard.is_some_and(|plane| plane >= best_dist) {
                continue;
            }

            let key = entries[slot].key();
            let dist = sq_euclidean(query, key);
            if dist < best_dist {
                best = slot;
                best_dist = dist;
            }

            let axis = depth % self.dims();
            let near = branch(query, key, axis);
            let far = if near == LEFT { RIGHT } else { LEFT };

            // Note: pushed in reverse order to what gets popped
            if let Some(child) = children[slot][far] {
                let plane = plane_distance(query, key, axis);
                stack.push((child, depth + 1, Some(plane * plane)));
            }
            if let Some(child) = children[slot][near] {
                stack.push((child, depth + 1, None));
            }
        }

        Ok((&entries[best], best_dist.sqrt()))
    }

    /// Find the nearest entry to a coordinate of any type implementing [`CoordTrait`].
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<(&Entry<V, N>, N)> {
        self.nearest(&coord_to_point(coord))
    }

    /// Access the root node of the KDTree for manual traversal.
    ///
    /// Returns `None` if the tree is empty.
    fn root(&self) -> Option<Node<'_, V, N, Self>> {
        Node::from_root(self)
    }
}

impl<V, N: IndexableNum> KDTreeIndex<V, N> for KDTree<V, N> {
    fn dims(&self) -> usize {
        self.dims
    }

    fn entries(&self) -> &[Entry<V, N>] {
        &self.entries
    }

    fn children(&self) -> &[[Option<usize>; 2]] {
        &self.children
    }

    fn height(&self) -> usize {
        self.height
    }
}

/// Collect the coordinates of `coord` into a point.
fn coord_to_point<N: IndexableNum>(coord: &impl CoordTrait<T = N>) -> Vec<N> {
    (0..coord.dim().size()).map(|n| coord.nth_or_panic(n)).collect()
}
