//! Ordered dictionary on top of an arena-backed AVL tree.
//!
//! [`BalancedTree`] keeps its nodes in a [`bidi_list::Arena`] and rebalances
//! on both insert and remove, so lookups, inserts and removals are
//! `O(log n)`. [`OrderedMap`] wraps it with unique-key map semantics.
//!
//! Positions are detached [`Cursor`]s: they do not borrow the tree, and any
//! structural change invalidates them. Borrowing iteration goes through
//! [`BalancedTree::iter`] or the visitor traversals.
//!
//! ```
//! use tree_dict::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.push("b", 2);
//! map.push("a", 1);
//! map.push("b", 3);
//! assert_eq!(map.get(&"b"), Ok(&3));
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), ["a", "b"]);
//! ```

pub mod avl;
pub mod error;
pub mod map;
pub mod types;

pub use avl::{BalancedTree, Cursor, Iter, TreeNode};
pub use error::DictError;
pub use map::OrderedMap;
pub use types::{default_comparator, less_comparator, Comparator};

pub use bidi_list;
