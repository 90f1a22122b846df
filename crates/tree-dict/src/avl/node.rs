/// AVL tree node stored in the tree's arena.
///
/// `left` and `right` are arena indices. `height` is cached (a leaf has
/// height 1) and `bf` is `height(right) - height(left)`; both are refreshed
/// whenever the node's children change.
#[derive(Clone, Debug)]
pub struct TreeNode<K, V> {
    pub key: K,
    pub value: V,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub height: i32,
    pub bf: i32,
}

impl<K, V> TreeNode<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
            bf: 0,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
