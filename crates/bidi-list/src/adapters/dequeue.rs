use crate::error::ContainerError;
use crate::list::BidirectionalList;

/// Stack that can also look at its oldest element.
///
/// `push`, `top` and `pop` work on the newest end; `opposite` reads the
/// element pushed first among those still present. The balanced tree keeps
/// its cursor's ancestor chain in one of these.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dequeue<T> {
    items: BidirectionalList<T>,
}

impl<T> Default for Dequeue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Dequeue<T> {
    pub const fn new() -> Self {
        Self {
            items: BidirectionalList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn top(&self) -> Result<&T, ContainerError> {
        self.items.front()
    }

    pub fn opposite(&self) -> Result<&T, ContainerError> {
        self.items.back()
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Elements from the newest to the oldest.
    pub fn iter(&self) -> crate::list::Iter<'_, T> {
        self.items.iter()
    }
}
