//! Access-restricted views over a private [`BidirectionalList`].
//!
//! | Adapter | push | read | pop | discipline |
//! |---------|------|------|-----|------------|
//! [`Stack`] | front | `top` = front | front | LIFO |
//! [`Queue`] | back | `peek_next` = front | front | FIFO |
//! [`Dequeue`] | front | `top` = front, `opposite` = back | front | LIFO with a view of the oldest end |
//!
//! [`BidirectionalList`]: crate::BidirectionalList

pub mod dequeue;
pub mod queue;
pub mod stack;

pub use dequeue::Dequeue;
pub use queue::Queue;
pub use stack::Stack;
