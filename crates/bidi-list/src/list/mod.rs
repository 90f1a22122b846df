//! Doubly linked list over an [`Arena`].
//!
//! Invariants:
//! - `head.is_none() == tail.is_none() == is_empty()`.
//! - For every node `n` with a successor `s`: `s.prev == n` and `n.next == s`.
//! - `head.prev` and `tail.next` are `None`.

pub mod cursor;
pub mod iter;

use std::fmt;

use crate::arena::Arena;
use crate::error::ContainerError;
use crate::node::LinkedNode;

pub use cursor::ListCursor;
pub use iter::{IntoIter, Iter, IterMut};

pub struct BidirectionalList<T> {
    head: Option<u32>,
    tail: Option<u32>,
    arena: Arena<LinkedNode<T>>,
}

impl<T> Default for BidirectionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BidirectionalList<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            arena: Arena::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    pub fn push_front(&mut self, value: T) {
        let n = self
            .arena
            .alloc(LinkedNode::with_links(value, None, self.head));
        match self.head {
            Some(h) => self.arena[h].prev = Some(n),
            None => self.tail = Some(n),
        }
        self.head = Some(n);
    }

    pub fn push_back(&mut self, value: T) {
        let n = self
            .arena
            .alloc(LinkedNode::with_links(value, self.tail, None));
        match self.tail {
            Some(t) => self.arena[t].next = Some(n),
            None => self.head = Some(n),
        }
        self.tail = Some(n);
    }

    pub fn pop_front(&mut self) -> Result<T, ContainerError> {
        let head = self.head.ok_or(ContainerError::EmptyContainer)?;
        Ok(self.unlink(head).value)
    }

    pub fn pop_back(&mut self) -> Result<T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::EmptyContainer)?;
        Ok(self.unlink(tail).value)
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        let head = self.head.ok_or(ContainerError::EmptyContainer)?;
        Ok(&self.arena[head].value)
    }

    pub fn back(&self) -> Result<&T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::EmptyContainer)?;
        Ok(&self.arena[tail].value)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ContainerError> {
        let head = self.head.ok_or(ContainerError::EmptyContainer)?;
        Ok(&mut self.arena[head].value)
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ContainerError> {
        let tail = self.tail.ok_or(ContainerError::EmptyContainer)?;
        Ok(&mut self.arena[tail].value)
    }

    pub fn begin(&self) -> ListCursor {
        ListCursor::from_link(self.head)
    }

    pub fn end(&self) -> ListCursor {
        ListCursor::end()
    }

    /// Cursor one step towards the back. Advancing `end()` is an error.
    pub fn next(&self, at: ListCursor) -> Result<ListCursor, ContainerError> {
        let node = self.node(at)?;
        Ok(ListCursor::from_link(node.next))
    }

    /// Cursor one step towards the front. `end()` steps back onto the tail;
    /// stepping back from the head is an error.
    pub fn prev(&self, at: ListCursor) -> Result<ListCursor, ContainerError> {
        let prev = match at.node {
            None => self.tail,
            Some(_) => self.node(at)?.prev,
        };
        prev.map(ListCursor::at).ok_or(ContainerError::InvalidIterator)
    }

    pub fn get(&self, at: ListCursor) -> Result<&T, ContainerError> {
        Ok(&self.node(at)?.value)
    }

    pub fn get_mut(&mut self, at: ListCursor) -> Result<&mut T, ContainerError> {
        let i = at.node.ok_or(ContainerError::InvalidIterator)?;
        self.arena
            .get_mut(i)
            .map(|node| &mut node.value)
            .ok_or(ContainerError::InvalidIterator)
    }

    /// Inserts `value` in front of `at` and returns a cursor to it.
    ///
    /// Inserting before `end()` appends.
    pub fn insert_before(
        &mut self,
        value: T,
        at: ListCursor,
    ) -> Result<ListCursor, ContainerError> {
        let Some(next) = at.node else {
            self.push_back(value);
            return Ok(ListCursor::from_link(self.tail));
        };
        let prev = self.node(at)?.prev;
        let n = self
            .arena
            .alloc(LinkedNode::with_links(value, prev, Some(next)));
        self.arena[next].prev = Some(n);
        match prev {
            Some(p) => self.arena[p].next = Some(n),
            None => self.head = Some(n),
        }
        Ok(ListCursor::at(n))
    }

    /// Removes the element under `at` and returns a cursor to its successor.
    pub fn erase(&mut self, at: ListCursor) -> Result<ListCursor, ContainerError> {
        let next = self.node(at)?.next;
        if let Some(i) = at.node {
            self.unlink(i);
        }
        Ok(ListCursor::from_link(next))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    fn node(&self, at: ListCursor) -> Result<&LinkedNode<T>, ContainerError> {
        at.node
            .and_then(|i| self.arena.get(i))
            .ok_or(ContainerError::InvalidIterator)
    }

    fn unlink(&mut self, i: u32) -> LinkedNode<T> {
        let node = self.arena.release(i);
        match node.prev {
            Some(p) => self.arena[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.arena[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        node
    }
}

impl<T: PartialEq> BidirectionalList<T> {
    /// First element equal to `value`, or `end()`.
    pub fn find(&self, value: &T) -> ListCursor {
        let mut curr = self.head;
        while let Some(i) = curr {
            let node = &self.arena[i];
            if node.value == *value {
                return ListCursor::at(i);
            }
            curr = node.next;
        }
        ListCursor::end()
    }

    pub fn contains(&self, value: &T) -> bool {
        !self.find(value).is_end()
    }
}

impl<T: Clone> Clone for BidirectionalList<T> {
    /// Copies node by node in list order, so the clone is compact and shares
    /// nothing with `self`.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for BidirectionalList<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a == b => {}
                _ => return false,
            }
        }
    }
}

impl<T: Eq> Eq for BidirectionalList<T> {}

impl<T: fmt::Debug> fmt::Debug for BidirectionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for BidirectionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for BidirectionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for BidirectionalList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for BidirectionalList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a BidirectionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BidirectionalList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
