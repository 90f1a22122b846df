use std::cmp::Ordering;
use std::fmt;

use bidi_list::Stack;

use super::cursor::{Cursor, Iter};
use super::node::TreeNode;
use super::util::{assert_avl_tree, balance, print, NodeArena};
use crate::error::DictError;
use crate::types::{default_comparator, Comparator};

/// Height-balanced binary search tree keyed by `C`.
///
/// Nodes live in an arena and link to their children by slot index. Every
/// insert and remove rebalances on the way back to the root, so the height
/// stays `O(log n)` and recursion depth is bounded by it.
///
/// Inserting an existing key overwrites its value in place; the tree never
/// holds two nodes with equal keys.
pub struct BalancedTree<K, V, C = Comparator<K>>
where
    C: Fn(&K, &K) -> Ordering,
{
    root: Option<u32>,
    arena: NodeArena<K, V>,
    comparator: C,
}

impl<K, V> BalancedTree<K, V, Comparator<K>>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for BalancedTree<K, V, Comparator<K>>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> BalancedTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            arena: NodeArena::new(),
            comparator,
        }
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.comparator)(a, b)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree; an empty tree has height 0.
    pub fn height(&self) -> i32 {
        self.root.map_or(0, |i| self.arena[i].height)
    }

    /// Arena slot of the root node.
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn node(&self, i: u32) -> Option<&TreeNode<K, V>> {
        self.arena.get(i)
    }

    pub(crate) fn arena(&self) -> &NodeArena<K, V> {
        &self.arena
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Inserts `key`, or overwrites the value of an equal key.
    ///
    /// Returns the previous value when the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old) = self.insert_into(self.root, key, value);
        self.root = Some(root);
        old
    }

    fn insert_into(&mut self, node: Option<u32>, key: K, value: V) -> (u32, Option<V>) {
        let Some(i) = node else {
            return (self.arena.alloc(TreeNode::new(key, value)), None);
        };
        match self.compare(&key, &self.arena[i].key) {
            Ordering::Less => {
                let left = self.arena[i].left;
                let (l, old) = self.insert_into(left, key, value);
                self.arena[i].left = Some(l);
                (balance(&mut self.arena, i), old)
            }
            Ordering::Greater => {
                let right = self.arena[i].right;
                let (r, old) = self.insert_into(right, key, value);
                self.arena[i].right = Some(r);
                (balance(&mut self.arena, i), old)
            }
            Ordering::Equal => {
                let old = std::mem::replace(&mut self.arena[i].value, value);
                (i, Some(old))
            }
        }
    }

    /// Removes `key` and returns the stored pair. Absent keys are a no-op.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let (root, removed) = self.remove_from(self.root, key);
        self.root = root;
        removed
    }

    fn remove_from(&mut self, node: Option<u32>, key: &K) -> (Option<u32>, Option<(K, V)>) {
        let Some(i) = node else {
            return (None, None);
        };
        match self.compare(key, &self.arena[i].key) {
            Ordering::Less => {
                let left = self.arena[i].left;
                let (l, removed) = self.remove_from(left, key);
                if removed.is_none() {
                    return (Some(i), None);
                }
                self.arena[i].left = l;
                (Some(balance(&mut self.arena, i)), removed)
            }
            Ordering::Greater => {
                let right = self.arena[i].right;
                let (r, removed) = self.remove_from(right, key);
                if removed.is_none() {
                    return (Some(i), None);
                }
                self.arena[i].right = r;
                (Some(balance(&mut self.arena, i)), removed)
            }
            Ordering::Equal => {
                let (left, right) = (self.arena[i].left, self.arena[i].right);
                match (left, right) {
                    (Some(l), Some(_)) => {
                        let (new_left, pred) = self.detach_max(l);
                        log::trace!("avl: slot {i} replaced by in-order predecessor {pred}");
                        let pred = self.arena.release(pred);
                        let node = &mut self.arena[i];
                        node.left = new_left;
                        let key = std::mem::replace(&mut node.key, pred.key);
                        let value = std::mem::replace(&mut node.value, pred.value);
                        (Some(balance(&mut self.arena, i)), Some((key, value)))
                    }
                    _ => {
                        let node = self.arena.release(i);
                        (left.or(right), Some((node.key, node.value)))
                    }
                }
            }
        }
    }

    /// Unlinks the rightmost node under `n`. Returns the rebalanced subtree
    /// and the slot of the detached node.
    fn detach_max(&mut self, n: u32) -> (Option<u32>, u32) {
        match self.arena[n].right {
            Some(r) => {
                let (new_right, max) = self.detach_max(r);
                self.arena[n].right = new_right;
                (Some(balance(&mut self.arena, n)), max)
            }
            None => (self.arena[n].left.take(), n),
        }
    }

    /// Removes the entry under `at` and returns a cursor to the entry after
    /// it. `at` and every other cursor into this tree are invalidated.
    pub fn remove_at(&mut self, at: &Cursor) -> Result<Cursor, DictError>
    where
        K: Clone,
    {
        let (key, _) = self.entry(at)?;
        let key = key.clone();
        match self.remove(&key) {
            Some((key, _)) => Ok(self.upper_bound(&key)),
            None => Err(DictError::InvalidIterator),
        }
    }

    /// Removes every entry in `[first, last)`.
    pub fn remove_range(&mut self, first: &Cursor, last: &Cursor) -> Result<usize, DictError>
    where
        K: Clone,
    {
        let stop = match last.node() {
            Some(_) => Some(self.entry(last)?.0.clone()),
            None => None,
        };
        let mut at = first.clone();
        let mut removed = 0;
        while !at.is_end() {
            if let Some(stop) = &stop {
                if self.compare(self.entry(&at)?.0, stop) != Ordering::Less {
                    break;
                }
            }
            at = self.remove_at(&at)?;
            removed += 1;
        }
        Ok(removed)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|i| &self.arena[i].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.find_node(key)?;
        Some(&mut self.arena[i].value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    fn find_node(&self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i];
            curr = match self.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    /// Cursor at `key`, or the end sentinel.
    ///
    /// The descent records every ancestor whose left subtree holds `key`, so
    /// advancing the returned cursor continues in key order.
    pub fn find(&self, key: &K) -> Cursor {
        let mut cursor = Cursor::end();
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i];
            match self.compare(key, &node.key) {
                Ordering::Less => {
                    cursor.push(i);
                    curr = node.left;
                }
                Ordering::Greater => curr = node.right,
                Ordering::Equal => {
                    cursor.push(i);
                    return cursor;
                }
            }
        }
        Cursor::end()
    }

    /// Cursor at the first key not less than `key`.
    pub fn lower_bound(&self, key: &K) -> Cursor {
        let mut cursor = Cursor::end();
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i];
            if self.compare(&node.key, key) == Ordering::Less {
                curr = node.right;
            } else {
                cursor.push(i);
                curr = node.left;
            }
        }
        cursor
    }

    /// Cursor at the first key strictly greater than `key`.
    pub fn upper_bound(&self, key: &K) -> Cursor {
        let mut cursor = Cursor::end();
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i];
            if self.compare(&node.key, key) == Ordering::Greater {
                cursor.push(i);
                curr = node.left;
            } else {
                curr = node.right;
            }
        }
        cursor
    }

    /// Cursor at the smallest key; equals `end()` on an empty tree.
    pub fn begin(&self) -> Cursor {
        let mut cursor = Cursor::end();
        cursor.descend_left(&self.arena, self.root);
        cursor
    }

    pub fn end(&self) -> Cursor {
        Cursor::end()
    }

    pub fn entry(&self, at: &Cursor) -> Result<(&K, &V), DictError> {
        let node = at
            .node()
            .and_then(|i| self.arena.get(i))
            .ok_or(DictError::InvalidIterator)?;
        Ok((&node.key, &node.value))
    }

    pub fn value_mut(&mut self, at: &Cursor) -> Result<&mut V, DictError> {
        let i = at.node().ok_or(DictError::InvalidIterator)?;
        self.arena
            .get_mut(i)
            .map(|node| &mut node.value)
            .ok_or(DictError::InvalidIterator)
    }

    /// Moves `at` to the next key. Advancing the end sentinel is an error.
    pub fn advance(&self, at: &mut Cursor) -> Result<(), DictError> {
        let i = at.pop().map_err(|_| DictError::InvalidIterator)?;
        let right = self
            .arena
            .get(i)
            .ok_or(DictError::InvalidIterator)?
            .right;
        at.descend_left(&self.arena, right);
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.begin(), self.len())
    }

    /// Drops every node, children before parents.
    pub fn clear(&mut self) {
        let mut pending = Stack::new();
        let mut post_order = Stack::new();
        if let Some(root) = self.root.take() {
            pending.push(root);
        }
        while let Ok(i) = pending.pop() {
            post_order.push(i);
            let node = &self.arena[i];
            if let Some(l) = node.left {
                pending.push(l);
            }
            if let Some(r) = node.right {
                pending.push(r);
            }
        }
        let released = post_order.len();
        while let Ok(i) = post_order.pop() {
            self.arena.release(i);
        }
        self.arena.clear();
        log::debug!("avl: cleared {released} nodes");
    }

    /// Checks ordering, cached heights, balance factors and the AVL bound.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)
    }

    /// Renders the tree shape, one node per line.
    pub fn print(&self) -> String
    where
        K: fmt::Debug,
        V: fmt::Debug,
    {
        print(&self.arena, self.root, "")
    }
}

impl<K, V, C> Clone for BalancedTree<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Fn(&K, &K) -> Ordering + Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root,
            arena: self.arena.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, V, C> fmt::Debug for BalancedTree<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for BalancedTree<K, V, Comparator<K>>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for BalancedTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a BalancedTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
