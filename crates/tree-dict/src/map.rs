use std::cmp::Ordering;
use std::fmt;

use crate::avl::{BalancedTree, Cursor, Iter};
use crate::error::DictError;
use crate::types::Comparator;

/// Dictionary with unique keys, kept in comparator order.
///
/// A thin facade over [`BalancedTree`]: `push` overwrites, `drop` ignores
/// absent keys and `get` reports [`DictError::KeyNotFound`] instead of
/// returning an `Option`.
pub struct OrderedMap<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    tree: BalancedTree<K, V, C>,
}

impl<K: Ord, V> OrderedMap<K, V, Comparator<K>> {
    pub fn new() -> Self {
        Self {
            tree: BalancedTree::new(),
        }
    }

    /// Builds a map by pushing `pairs` in order; later duplicates win.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().collect()
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V, Comparator<K>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            tree: BalancedTree::with_comparator(comparator),
        }
    }

    /// Inserts or updates `key`; returns the value it replaced.
    pub fn push(&mut self, key: K, value: V) -> Option<V> {
        self.tree.insert(key, value)
    }

    /// Removes `key` if present and returns its value.
    pub fn drop(&mut self, key: &K) -> Option<V> {
        self.tree.remove(key).map(|(_, value)| value)
    }

    pub fn get(&self, key: &K) -> Result<&V, DictError> {
        self.tree.get(key).ok_or(DictError::KeyNotFound)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, DictError> {
        self.tree.get_mut(key).ok_or(DictError::KeyNotFound)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn begin(&self) -> Cursor {
        self.tree.begin()
    }

    pub fn end(&self) -> Cursor {
        self.tree.end()
    }

    pub fn find(&self, key: &K) -> Cursor {
        self.tree.find(key)
    }

    pub fn lower_bound(&self, key: &K) -> Cursor {
        self.tree.lower_bound(key)
    }

    pub fn upper_bound(&self, key: &K) -> Cursor {
        self.tree.upper_bound(key)
    }

    pub fn entry(&self, at: &Cursor) -> Result<(&K, &V), DictError> {
        self.tree.entry(at)
    }

    pub fn value_mut(&mut self, at: &Cursor) -> Result<&mut V, DictError> {
        self.tree.value_mut(at)
    }

    pub fn advance(&self, at: &mut Cursor) -> Result<(), DictError> {
        self.tree.advance(at)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// The underlying tree, for traversals and diagnostics.
    pub fn tree(&self) -> &BalancedTree<K, V, C> {
        &self.tree
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        self.tree.assert_valid()
    }
}

impl<K, V, C> Clone for OrderedMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for OrderedMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, f)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V, Comparator<K>> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> Extend<(K, V)> for OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a OrderedMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
