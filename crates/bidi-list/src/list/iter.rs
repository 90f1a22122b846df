use std::iter::FusedIterator;

use super::BidirectionalList;
use crate::arena::Arena;
use crate::node::LinkedNode;

/// Borrowing front-to-back iterator over a [`BidirectionalList`].
pub struct Iter<'a, T> {
    arena: &'a Arena<LinkedNode<T>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a BidirectionalList<T>) -> Self {
        Self {
            arena: &list.arena,
            front: list.head,
            back: list.tail,
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = &arena[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable front-to-back iterator over a [`BidirectionalList`].
///
/// Holds one `&mut` per occupied arena slot and takes each out exactly once,
/// so the yielded references never alias.
pub struct IterMut<'a, T> {
    nodes: Vec<Option<&'a mut LinkedNode<T>>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut BidirectionalList<T>) -> Self {
        let remaining = list.len();
        let (front, back) = (list.head, list.tail);
        Self {
            nodes: list.arena.slots_mut(),
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes[self.front? as usize].take()?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes[self.back? as usize].take()?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&mut node.value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator; pops from the ends of the list it consumed.
pub struct IntoIter<T> {
    list: BidirectionalList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: BidirectionalList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
