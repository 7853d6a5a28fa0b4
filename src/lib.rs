//! AVL tree based sorted containers.
//!
//! [`Ashwood`] is a height-balanced binary search tree ordered by a caller supplied
//! [`Comparator`]. [`AshwoodMap`] and [`AshwoodSet`] build the usual sorted map and set on top
//! of it.

extern crate alloc;

mod compare;
mod error;
mod iter;
mod map;
mod node;
mod set;

use core::{cmp::Ordering, fmt};

use alloc::boxed::Box;

pub use compare::{Comparator, NaturalOrder, Reversed};
pub use error::{AshwoodError, InvariantViolation};
pub use iter::{Traversal, TraversalOrder};
pub use map::{AshwoodMap, Keys, MapIter, Values};
pub use set::AshwoodSet;

use node::{AshwoodNode, Link};

/// A self-balancing (AVL) binary search tree of unique keys.
///
/// Every comparison goes through the comparator `C`, fixed at construction. Keys that compare
/// equal are the same key: inserting one replaces the stored key.
///
/// `insert`, `search`, `delete` and the minimum/maximum operations are O(log n).
pub struct Ashwood<K, C = NaturalOrder> {
    comparator: C,
    root: Link<K>,
    len: usize,
}

impl<K: Ord> Ashwood<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Ord> Default for Ashwood<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Ashwood<K, C> {
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            comparator,
            root: None,
            len: 0,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest path from the root; 0 for an empty tree.
    #[must_use]
    pub fn height(&self) -> usize {
        AshwoodNode::height(&self.root)
    }

    pub fn clear(&mut self) {
        tracing::debug!(len = self.len, "clearing tree");

        self.root = None;
        self.len = 0;
    }

    pub fn minimum(&self) -> Result<&K, AshwoodError> {
        let mut node = self.root.as_deref().ok_or(AshwoodError::EmptyTree {
            operation: "minimum",
        })?;

        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Ok(&node.key)
    }

    pub fn maximum(&self) -> Result<&K, AshwoodError> {
        let mut node = self.root.as_deref().ok_or(AshwoodError::EmptyTree {
            operation: "maximum",
        })?;

        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Ok(&node.key)
    }

    /// Removes and returns the smallest key.
    pub fn delete_minimum(&mut self) -> Result<K, AshwoodError> {
        let root = self.root.take().ok_or(AshwoodError::EmptyTree {
            operation: "delete_minimum",
        })?;

        let (rest, min) = root.split_min();
        self.root = rest;
        self.len -= 1;

        Ok(min)
    }

    /// Removes and returns the largest key.
    pub fn delete_maximum(&mut self) -> Result<K, AshwoodError> {
        let root = self.root.take().ok_or(AshwoodError::EmptyTree {
            operation: "delete_maximum",
        })?;

        let (rest, max) = root.split_max();
        self.root = rest;
        self.len -= 1;

        Ok(max)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, K> {
        Traversal::new(self.root.as_deref(), self.len, order)
    }

    /// Keys in ascending order.
    pub fn in_order(&self) -> Traversal<'_, K> {
        self.traverse(TraversalOrder::InOrder)
    }

    pub fn pre_order(&self) -> Traversal<'_, K> {
        self.traverse(TraversalOrder::PreOrder)
    }

    pub fn post_order(&self) -> Traversal<'_, K> {
        self.traverse(TraversalOrder::PostOrder)
    }

    pub fn iter(&self) -> Traversal<'_, K> {
        self.in_order()
    }

    /// Looks a key up by `probe`, which orders the wanted key against the stored key it is
    /// given, using the comparator it is given.
    pub(crate) fn search_by<F>(&self, mut probe: F) -> Option<&K>
    where
        F: FnMut(&C, &K) -> Ordering,
    {
        let mut link = self.root.as_deref();

        while let Some(node) = link {
            match probe(&self.comparator, &node.key) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
            }
        }

        None
    }

    /// The returned key must keep its position in the order.
    pub(crate) fn search_by_mut<F>(&mut self, mut probe: F) -> Option<&mut K>
    where
        F: FnMut(&C, &K) -> Ordering,
    {
        let comparator = &self.comparator;
        let mut link = self.root.as_deref_mut();

        while let Some(node) = link {
            match probe(comparator, &node.key) {
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Greater => link = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.key),
            }
        }

        None
    }

    pub(crate) fn delete_by<F>(&mut self, mut probe: F) -> Option<K>
    where
        F: FnMut(&C, &K) -> Ordering,
    {
        let comparator = &self.comparator;
        let (root, removed) = delete_from(self.root.take(), &mut |stored: &K| {
            probe(comparator, stored)
        });
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }

        removed
    }
}

impl<K, C: Comparator<K>> Ashwood<K, C> {
    /// Inserts `key`, returning the equal key it replaced, if there was one.
    pub fn insert(&mut self, key: K) -> Option<K> {
        let (root, replaced) = insert_into(self.root.take(), key, &self.comparator);
        self.root = Some(root);

        if replaced.is_none() {
            self.len += 1;
        }

        replaced
    }

    /// Returns the stored key equal to `key`.
    pub fn search(&self, key: &K) -> Option<&K> {
        self.search_by(|comparator, stored| comparator.compare(key, stored))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Removes the key equal to `key` and returns it. Deleting an absent key does nothing.
    pub fn delete(&mut self, key: &K) -> Option<K> {
        self.delete_by(|comparator, stored| comparator.compare(key, stored))
    }

    /// Checks every structural invariant of the tree in a single pass.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let (_, counted) = AshwoodNode::verify(&self.root, &self.comparator, None, None)?;

        if counted != self.len {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len,
                counted,
            });
        }

        Ok(())
    }
}

fn insert_into<K, C: Comparator<K>>(
    link: Link<K>,
    key: K,
    comparator: &C,
) -> (Box<AshwoodNode<K>>, Option<K>) {
    let Some(mut node) = link else {
        return (AshwoodNode::singleton(key), None);
    };

    let replaced = match comparator.compare(&key, &node.key) {
        Ordering::Less => {
            let (left, replaced) = insert_into(node.left.take(), key, comparator);
            node.left = Some(left);
            replaced
        }
        Ordering::Greater => {
            let (right, replaced) = insert_into(node.right.take(), key, comparator);
            node.right = Some(right);
            replaced
        }
        Ordering::Equal => Some(core::mem::replace(&mut node.key, key)),
    };

    (node.balanced(), replaced)
}

fn delete_from<K, F>(link: Link<K>, probe: &mut F) -> (Link<K>, Option<K>)
where
    F: FnMut(&K) -> Ordering,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match probe(&node.key) {
        Ordering::Less => {
            let (left, removed) = delete_from(node.left.take(), probe);
            node.left = left;
            removed
        }
        Ordering::Greater => {
            let (right, removed) = delete_from(node.right.take(), probe);
            node.right = right;
            removed
        }
        Ordering::Equal => {
            let (rest, removed) = node.unlinked();
            return (rest.map(AshwoodNode::balanced), Some(removed));
        }
    };

    (Some(node.balanced()), removed)
}

impl<K: Clone, C: Clone> Clone for Ashwood<K, C> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: fmt::Debug, C> fmt::Debug for Ashwood<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<K: PartialEq, C> PartialEq for Ashwood<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order().eq(other.in_order())
    }
}

impl<K: Eq, C> Eq for Ashwood<K, C> {}

impl<K: Ord> FromIterator<K> for Ashwood<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C: Comparator<K>> Extend<K> for Ashwood<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K, C> IntoIterator for &'a Ashwood<K, C> {
    type Item = &'a K;
    type IntoIter = Traversal<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
