/// Storage cell of a [`BidirectionalList`](crate::BidirectionalList).
///
/// `prev` and `next` are arena indices of the neighbours; the list's arena
/// owns the cell, the links own nothing.
#[derive(Clone, Debug)]
pub struct LinkedNode<T> {
    pub value: T,
    pub prev: Option<u32>,
    pub next: Option<u32>,
}

impl<T> LinkedNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            prev: None,
            next: None,
        }
    }

    pub fn with_links(value: T, prev: Option<u32>, next: Option<u32>) -> Self {
        Self { value, prev, next }
    }
}
