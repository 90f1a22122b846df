use bidi_list::{ContainerError, Dequeue};

use super::util::NodeArena;

/// Position inside a [`BalancedTree`](super::BalancedTree).
///
/// Holds the chain of ancestors still to be visited in key order, with the
/// current node on top. An empty chain is the end sentinel.
///
/// Two cursors compare equal when they point at the same node, regardless of
/// the rest of the chain. Comparing cursors taken from different trees is
/// meaningless. Any insert or remove invalidates every cursor of that tree.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    ancestors: Dequeue<u32>,
}

impl Cursor {
    pub fn end() -> Self {
        Self::default()
    }

    pub fn is_end(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Arena slot of the node under the cursor.
    pub fn node(&self) -> Option<u32> {
        self.ancestors.top().ok().copied()
    }

    /// Number of pending ancestors, current node included.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// The farthest pending ancestor, i.e. the last node this cursor will
    /// visit before it runs out of recorded ancestors.
    pub fn outermost(&self) -> Option<u32> {
        self.ancestors.opposite().ok().copied()
    }

    pub(crate) fn push(&mut self, node: u32) {
        self.ancestors.push(node);
    }

    pub(crate) fn pop(&mut self) -> Result<u32, ContainerError> {
        self.ancestors.pop()
    }

    /// Pushes `node` and its whole left spine.
    pub(crate) fn descend_left<K, V>(&mut self, arena: &NodeArena<K, V>, mut node: Option<u32>) {
        while let Some(i) = node {
            self.ancestors.push(i);
            node = arena[i].left;
        }
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.node() == other.node()
    }
}

impl Eq for Cursor {}

/// In-order iterator over `(&K, &V)`.
pub struct Iter<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    cursor: Cursor,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a NodeArena<K, V>, cursor: Cursor, remaining: usize) -> Self {
        Self {
            arena,
            cursor,
            remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.cursor.pop().ok()?;
        let arena = self.arena;
        let node = &arena[i];
        self.cursor.descend_left(arena, node.right);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> std::iter::FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            cursor: self.cursor.clone(),
            remaining: self.remaining,
        }
    }
}
