use core::{cmp::Ordering, fmt, iter::FusedIterator};

use crate::{Ashwood, AshwoodError, Comparator, NaturalOrder, Traversal};

struct MapEntry<K, V> {
    key: K,
    value: V,
}

impl<K: Clone, V: Clone> Clone for MapEntry<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}

/// Orders map entries by key alone.
#[derive(Clone)]
struct EntryOrder<C>(C);

impl<K, V, C: Comparator<K>> Comparator<MapEntry<K, V>> for EntryOrder<C> {
    fn compare(&self, a: &MapEntry<K, V>, b: &MapEntry<K, V>) -> Ordering {
        self.0.compare(&a.key, &b.key)
    }
}

/// An associative array, storing key-value pairs sorted by key.
///
/// Uses an Ashwood AVL tree of entries ordered only by their key.
pub struct AshwoodMap<K, V, C = NaturalOrder> {
    tree: Ashwood<MapEntry<K, V>, EntryOrder<C>>,
}

impl<K: Ord, V> AshwoodMap<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K: Ord, V> Default for AshwoodMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AshwoodMap<K, V, C> {
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: Ashwood::with_comparator(EntryOrder(comparator)),
        }
    }

    pub fn comparator(&self) -> &C {
        &self.tree.comparator().0
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

    pub fn minimum(&self) -> Result<(&K, &V), AshwoodError> {
        self.tree.minimum().map(|e| (&e.key, &e.value))
    }

    pub fn maximum(&self) -> Result<(&K, &V), AshwoodError> {
        self.tree.maximum().map(|e| (&e.key, &e.value))
    }

    pub fn delete_minimum(&mut self) -> Result<(K, V), AshwoodError> {
        self.tree.delete_minimum().map(|e| (e.key, e.value))
    }

    pub fn delete_maximum(&mut self) -> Result<(K, V), AshwoodError> {
        self.tree.delete_maximum().map(|e| (e.key, e.value))
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter(self.tree.in_order())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.tree.in_order())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.tree.in_order())
    }
}

impl<K, V, C: Comparator<K>> AshwoodMap<K, V, C> {
    /// Inserts a key-value pair. If the key was already present its value is replaced, and the
    /// old value returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.tree
            .insert(MapEntry { key, value })
            .map(|replaced| replaced.value)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.tree
            .search_by(|order, entry| order.0.compare(key, &entry.key))
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.tree
            .search_by_mut(|order, entry| order.0.compare(key, &entry.key))
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.tree
            .delete_by(|order, entry| order.0.compare(key, &entry.key))
            .map(|entry| entry.value)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for AshwoodMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AshwoodMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AshwoodMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for AshwoodMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a AshwoodMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct MapIter<'a, K, V>(Traversal<'a, MapEntry<K, V>>);

impl<'a, K, V> Iterator for MapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Keys<'a, K, V>(Traversal<'a, MapEntry<K, V>>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &e.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct Values<'a, K, V>(Traversal<'a, MapEntry<K, V>>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for MapIter<'_, K, V> {}
impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for MapIter<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
