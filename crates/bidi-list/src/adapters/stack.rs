use crate::error::ContainerError;
use crate::list::BidirectionalList;

/// Last-in-first-out work list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T> {
    items: BidirectionalList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub const fn new() -> Self {
        Self {
            items: BidirectionalList::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    /// Most recently pushed element.
    pub fn top(&self) -> Result<&T, ContainerError> {
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
