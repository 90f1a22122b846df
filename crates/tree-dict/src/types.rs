//! Comparator helpers shared by [`BalancedTree`](crate::BalancedTree) and
//! [`OrderedMap`](crate::OrderedMap).

use std::cmp::Ordering;

/// Default comparator type parameter of the tree and the map.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

pub fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Builds a comparator out of a strict "less than" predicate.
///
/// Keys for which neither `less(a, b)` nor `less(b, a)` holds compare equal.
pub fn less_comparator<K, L>(less: L) -> impl Fn(&K, &K) -> Ordering
where
    L: Fn(&K, &K) -> bool,
{
    move |a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}
