use core::fmt;

use crate::{Ashwood, AshwoodError, Comparator, NaturalOrder, Traversal};

/// A sorted set of unique elements, backed by an Ashwood AVL tree.
pub struct AshwoodSet<T, C = NaturalOrder> {
    tree: Ashwood<T, C>,
}

impl<T: Ord> AshwoodSet<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for AshwoodSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AshwoodSet<T, C> {
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: Ashwood::with_comparator(comparator),
        }
    }

    pub fn comparator(&self) -> &C {
        self.tree.comparator()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn minimum(&self) -> Result<&T, AshwoodError> {
        self.tree.minimum()
    }

    pub fn maximum(&self) -> Result<&T, AshwoodError> {
        self.tree.maximum()
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.tree.in_order()
    }
}

impl<T, C: Comparator<T>> AshwoodSet<T, C> {
    /// Adds `element` to the set. Returns `false` if an equal element was already present, in
    /// which case it is replaced.
    pub fn insert(&mut self, element: T) -> bool {
        self.tree.insert(element).is_none()
    }

    pub fn contains(&self, element: &T) -> bool {
        self.tree.contains(element)
    }

    /// Returns the stored element equal to `element`.
    pub fn get(&self, element: &T) -> Option<&T> {
        self.tree.search(element)
    }

    /// Removes `element`, returning whether it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        self.tree.delete(element).is_some()
    }
}

impl<T: Clone, C: Clone> Clone for AshwoodSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AshwoodSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<T: PartialEq, C> PartialEq for AshwoodSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq, C> Eq for AshwoodSet<T, C> {}

impl<T: Ord> FromIterator<T> for AshwoodSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for AshwoodSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<'a, T, C> IntoIterator for &'a AshwoodSet<T, C> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
