//! Arena-backed AVL tree.

mod cursor;
mod node;
mod traverse;
mod tree;
pub(crate) mod util;

pub use cursor::{Cursor, Iter};
pub use node::TreeNode;
pub use tree::BalancedTree;
