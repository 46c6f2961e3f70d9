use crate::error::{KDIndexError, Result};
use crate::kdtree::distance::{branch, check_dims};
use crate::r#type::IndexableNum;

/// A key and its associated value, as stored in a [`KDTree`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V, N: IndexableNum = f64> {
    key: Box<[N]>,
    value: V,
}

impl<V, N: IndexableNum> Entry<V, N> {
    pub(crate) fn new(key: &[N], value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The point this entry was inserted under.
    pub fn key(&self) -> &[N] {
        &self.key
    }

    /// The payload associated with [`Self::key`].
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// A dynamic k-d tree over points with `N` coordinates, carrying a value of type `V` per point.
///
/// The tree is never rebalanced, so its shape is fully determined by insertion order. Nodes are
/// stored in an arena: slot `i` holds the `i`-th inserted entry, and slot `0` is the root.
///
/// Queries are provided by the [`KDTreeIndex`][crate::kdtree::KDTreeIndex] trait.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<V, N: IndexableNum = f64> {
    pub(crate) dims: usize,
    pub(crate) height: usize,
    pub(crate) entries: Vec<Entry<V, N>>,
    /// `[left, right]` child slots for each entry.
    pub(crate) children: Vec<[Option<usize>; 2]>,
}

impl<V, N: IndexableNum> KDTree<V, N> {
    /// Create a new, empty tree for points with `dims` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `dims` is zero. See [`Self::try_new`] for a fallible variant.
    pub fn new(dims: usize) -> Self {
        Self::with_capacity(dims, 0)
    }

    /// Create a new, empty tree with room for `capacity` entries before reallocating.
    ///
    /// # Panics
    ///
    /// Panics if `dims` is zero.
    pub fn with_capacity(dims: usize, capacity: usize) -> Self {
        assert!(dims > 0, "a k-d tree needs at least one dimension");

        Self {
            dims,
            height: 0,
            entries: Vec::with_capacity(capacity),
            children: Vec::with_capacity(capacity),
        }
    }

    /// Create a new, empty tree, returning an error if `dims` is zero.
    pub fn try_new(dims: usize) -> Result<Self> {
        if dims == 0 {
            return Err(KDIndexError::General(
                "A k-d tree needs at least one dimension.".to_string(),
            ));
        }
        Ok(Self::new(dims))
    }

    /// Insert `value` under the point `key`.
    ///
    /// The point descends from the root, going left when its coordinate on the node's split
    /// axis is strictly smaller than the node's and right otherwise, until it reaches an empty
    /// child slot. Existing entries are never overwritten: inserting a key that is already
    /// present adds another node further down the right-hand chain.
    ///
    /// Returns [`KDIndexError::DimensionMismatch`] if `key` does not have exactly
    /// [`dims`][crate::kdtree::KDTreeIndex::dims] coordinates, in which case the tree is left
    /// unchanged.
    ///
    /// ```
    /// use kd_index::kdtree::{KDTree, KDTreeIndex};
    ///
    /// let mut tree = KDTree::new(2);
    /// tree.insert(&[3., 4.], "Value 1").unwrap();
    /// tree.insert(&[5., 6.], "Value 2").unwrap();
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.insert(&[1., 2., 3.], "too many").is_err());
    /// ```
    pub fn insert(&mut self, key: &[N], value: V) -> Result<()> {
        check_dims(self.dims, key)?;

        let slot = self.entries.len();
        let mut depth = 0;

        if slot > 0 {
            let mut current = 0;
            loop {
                let axis = depth % self.dims;
                let side = branch(key, self.entries[current].key(), axis);
                depth += 1;
                match self.children[current][side] {
                    Some(child) => current = child,
                    None => {
                        self.children[current][side] = Some(slot);
                        break;
                    }
                }
            }
        }

        self.entries.push(Entry::new(key, value));
        self.children.push([None, None]);
        self.height = self.height.max(depth + 1);
        Ok(())
    }
}
