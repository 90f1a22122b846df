use std::cmp::Ordering;

use bidi_list::{Queue, Stack};

use super::tree::BalancedTree;

impl<K, V, C> BalancedTree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    /// Visits every entry in ascending key order and hands the visitor back.
    pub fn traverse_ascending<F>(&self, mut visit: F) -> F
    where
        F: FnMut(&K, &V),
    {
        let arena = self.arena();
        let mut pending = Stack::new();
        let mut curr = self.root();
        loop {
            while let Some(i) = curr {
                pending.push(i);
                curr = arena[i].left;
            }
            let Ok(i) = pending.pop() else {
                break;
            };
            let node = &arena[i];
            visit(&node.key, &node.value);
            curr = node.right;
        }
        visit
    }

    /// Visits every entry in descending key order.
    pub fn traverse_descending<F>(&self, mut visit: F) -> F
    where
        F: FnMut(&K, &V),
    {
        let arena = self.arena();
        let mut pending = Stack::new();
        let mut curr = self.root();
        loop {
            while let Some(i) = curr {
                pending.push(i);
                curr = arena[i].right;
            }
            let Ok(i) = pending.pop() else {
                break;
            };
            let node = &arena[i];
            visit(&node.key, &node.value);
            curr = node.left;
        }
        visit
    }

    /// Visits entries level by level, left to right within a level.
    pub fn traverse_breadth<F>(&self, mut visit: F) -> F
    where
        F: FnMut(&K, &V),
    {
        let arena = self.arena();
        let mut pending = Queue::new();
        if let Some(root) = self.root() {
            pending.push(root);
        }
        while let Ok(i) = pending.pop() {
            let node = &arena[i];
            visit(&node.key, &node.value);
            if let Some(l) = node.left {
                pending.push(l);
            }
            if let Some(r) = node.right {
                pending.push(r);
            }
        }
        visit
    }
}
