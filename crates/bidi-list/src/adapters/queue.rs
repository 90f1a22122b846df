use crate::error::ContainerError;
use crate::list::BidirectionalList;

/// First-in-first-out work list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    items: BidirectionalList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Self {
            items: BidirectionalList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Element that the next `pop` returns.
    pub fn peek_next(&self) -> Result<&T, ContainerError> {
        self.items.front()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_order() {
        let mut queue = Queue::new();
        queue.push('a');
        queue.push('b');
        assert_eq!(queue.peek_next(), Ok(&'a'));
        assert_eq!(queue.pop(), Ok('a'));
        queue.push('c');
        assert_eq!(queue.pop(), Ok('b'));
        assert_eq!(queue.pop(), Ok('c'));
        assert_eq!(queue.peek_next(), Err(ContainerError::EmptyContainer));
        assert_eq!(queue.pop(), Err(ContainerError::EmptyContainer));
    }
}
