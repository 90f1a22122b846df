use std::cmp::Ordering;
use std::fmt::Debug;

use bidi_list::Arena;

use super::node::TreeNode;

pub(crate) type NodeArena<K, V> = Arena<TreeNode<K, V>>;

#[inline]
pub(crate) fn height<K, V>(arena: &NodeArena<K, V>, node: Option<u32>) -> i32 {
    node.map_or(0, |i| arena[i].height)
}

/// Recomputes the cached height and balance factor of `i` from its children.
#[inline]
pub(crate) fn update<K, V>(arena: &mut NodeArena<K, V>, i: u32) {
    let lh = height(arena, arena[i].left);
    let rh = height(arena, arena[i].right);
    let node = &mut arena[i];
    node.height = 1 + lh.max(rh);
    node.bf = rh - lh;
}

/// Lifts the right child of `n` above it; returns the new subtree root.
pub(crate) fn rotate_left<K, V>(arena: &mut NodeArena<K, V>, n: u32) -> u32 {
    let nr = arena[n].right.expect("left rotation needs a right child");
    log::trace!("avl: rotate left at slot {n}, new subtree root {nr}");
    arena[n].right = arena[nr].left;
    arena[nr].left = Some(n);
    update(arena, n);
    update(arena, nr);
    nr
}

/// Lifts the left child of `n` above it; returns the new subtree root.
pub(crate) fn rotate_right<K, V>(arena: &mut NodeArena<K, V>, n: u32) -> u32 {
    let nl = arena[n].left.expect("right rotation needs a left child");
    log::trace!("avl: rotate right at slot {n}, new subtree root {nl}");
    arena[n].left = arena[nl].right;
    arena[nl].right = Some(n);
    update(arena, n);
    update(arena, nl);
    nl
}

/// Restores the AVL bound at `n` after one of its subtrees changed height by
/// at most one. Returns the root of the (possibly rotated) subtree.
pub(crate) fn balance<K, V>(arena: &mut NodeArena<K, V>, n: u32) -> u32 {
    update(arena, n);
    let bf = arena[n].bf;
    if bf > 1 {
        let nr = arena[n].right.expect("right-heavy node has a right child");
        if height(arena, arena[nr].right) < height(arena, arena[nr].left) {
            let lifted = rotate_right(arena, nr);
            arena[n].right = Some(lifted);
        }
        rotate_left(arena, n)
    } else if bf < -1 {
        let nl = arena[n].left.expect("left-heavy node has a left child");
        if height(arena, arena[nl].left) < height(arena, arena[nl].right) {
            let lifted = rotate_left(arena, nl);
            arena[n].left = Some(lifted);
        }
        rotate_right(arena, n)
    } else {
        n
    }
}

pub(crate) fn assert_avl_tree<K, V, C>(
    arena: &NodeArena<K, V>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn validate<K, V>(
        arena: &NodeArena<K, V>,
        node: u32,
        count: &mut usize,
    ) -> Result<i32, String> {
        *count += 1;
        let n = arena
            .get(node)
            .ok_or_else(|| format!("Link to vacant slot {node}"))?;
        let lh = match n.left {
            Some(l) => validate(arena, l, count)?,
            None => 0,
        };
        let rh = match n.right {
            Some(r) => validate(arena, r, count)?,
            None => 0,
        };

        let expected_height = 1 + lh.max(rh);
        if n.height != expected_height {
            return Err(format!(
                "Height mismatch at slot {node}: expected {expected_height}, got {}",
                n.height
            ));
        }
        let expected_bf = rh - lh;
        if n.bf != expected_bf {
            return Err(format!(
                "Balance factor mismatch at slot {node}: expected {expected_bf}, got {}",
                n.bf
            ));
        }
        if !(-1..=1).contains(&n.bf) {
            return Err(format!("AVL balance violated at slot {node}"));
        }
        Ok(expected_height)
    }

    fn check_order<K, V, C>(
        arena: &NodeArena<K, V>,
        node: Option<u32>,
        lower: Option<&K>,
        upper: Option<&K>,
        comparator: &C,
    ) -> Result<(), String>
    where
        C: Fn(&K, &K) -> Ordering,
    {
        let Some(i) = node else {
            return Ok(());
        };
        let n = &arena[i];
        if let Some(lower) = lower {
            if comparator(lower, &n.key) != Ordering::Less {
                return Err(format!("Node order violated at slot {i}"));
            }
        }
        if let Some(upper) = upper {
            if comparator(&n.key, upper) != Ordering::Less {
                return Err(format!("Node order violated at slot {i}"));
            }
        }
        check_order(arena, n.left, lower, Some(&n.key), comparator)?;
        check_order(arena, n.right, Some(&n.key), upper, comparator)
    }

    let mut count = 0usize;
    if let Some(root) = root {
        validate(arena, root, &mut count)?;
    }
    if count != arena.len() {
        return Err(format!(
            "Reachable node count {count} does not match arena size {}",
            arena.len()
        ));
    }
    check_order(arena, root, None, None, comparator)
}

/// Debug printer for AVL trees.
pub(crate) fn print<K, V>(arena: &NodeArena<K, V>, node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            if n.is_leaf() {
                return format!("Node[{i}] [bf={}] {{ {:?} = {:?} }}", n.bf, n.key, n.value);
            }
            let left = print(arena, n.left, &format!("{tab}  "));
            let right = print(arena, n.right, &format!("{tab}  "));
            format!(
                "Node[{i}] [bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.bf, n.key, n.value
            )
        }
    }
}
