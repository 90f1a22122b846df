//! Arena-backed doubly linked list and the work-list adapters built on it.
//!
//! Nodes never own each other. Every [`LinkedNode`] lives in an [`Arena`]
//! owned by its list and neighbours are linked by `Option<u32>` slot
//! indices, so splicing is O(1) without shared or aliased pointers.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`arena`] | [`Arena`] slot storage with a free chain |
//! | [`node`] | [`LinkedNode`] storage cell |
//! | [`list`] | [`BidirectionalList`], [`ListCursor`], iterators |
//! | [`adapters`] | [`Stack`] (LIFO), [`Queue`] (FIFO), [`Dequeue`] |
//! | [`error`] | [`ContainerError`] |

pub mod adapters;
pub mod arena;
pub mod error;
pub mod list;
pub mod node;

pub use adapters::{Dequeue, Queue, Stack};
pub use arena::Arena;
pub use error::ContainerError;
pub use list::{BidirectionalList, IntoIter, Iter, IterMut, ListCursor};
pub use node::LinkedNode;
