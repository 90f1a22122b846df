/// Position inside a [`BidirectionalList`](crate::BidirectionalList).
///
/// A cursor is a node handle, not a borrow: it stays `Copy` and can be stored
/// next to the list. Two cursors are equal when they name the same node; the
/// one-past-the-end sentinel has no node. A cursor whose node was erased is
/// stale and must not be used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListCursor {
    pub(crate) node: Option<u32>,
}

impl ListCursor {
    pub(crate) const fn at(node: u32) -> Self {
        Self { node: Some(node) }
    }

    pub(crate) const fn from_link(node: Option<u32>) -> Self {
        Self { node }
    }

    /// The one-past-the-end sentinel.
    pub const fn end() -> Self {
        Self { node: None }
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Arena slot of the node under the cursor.
    pub fn index(&self) -> Option<u32> {
        self.node
    }
}
