//! Slot arena with stable `u32` indices.
//!
//! Both the list and the tree keep their nodes in an [`Arena`] and link them
//! by index. A released slot is pushed onto an intrusive free chain and is
//! handed out again by the next [`Arena::alloc`], so an index stays valid for
//! exactly as long as the node it names.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever handed out, occupied or vacant.
    pub fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        match self.free {
            Some(i) => {
                let slot = &mut self.slots[i as usize];
                self.free = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free chain reached occupied slot {i}"),
                };
                *slot = Slot::Occupied(node);
                i
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Vacates slot `i` and returns the node that lived there.
    ///
    /// Panics if the slot is already vacant.
    pub fn release(&mut self, i: u32) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match std::mem::replace(&mut self.slots[i as usize], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(i);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("arena slot {i} released twice"),
        }
    }

    pub fn get(&self, i: u32) -> Option<&N> {
        match self.slots.get(i as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, i: u32) -> Option<&mut N> {
        match self.slots.get_mut(i as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Mutable access to every slot at once, indexed by slot number.
    ///
    /// Vacant slots yield `None`. Lets callers hand out disjoint `&mut N`
    /// in an order of their choosing.
    pub fn slots_mut(&mut self) -> Vec<Option<&mut N>> {
        self.slots
            .iter_mut()
            .map(|slot| match slot {
                Slot::Occupied(node) => Some(node),
                Slot::Vacant { .. } => None,
            })
            .collect()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, i: u32) -> &N {
        match &self.slots[i as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {i} is vacant"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, i: u32) -> &mut N {
        match &mut self.slots[i as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena slot {i} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused_lifo() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");
        assert_eq!((a, b, c), (0, 1, 2));

        assert_eq!(arena.release(a), "a");
        assert_eq!(arena.release(c), "c");
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(a), None);

        assert_eq!(arena.alloc("d"), c);
        assert_eq!(arena.alloc("e"), a);
        assert_eq!(arena.alloc("f"), 3);
        assert_eq!(arena.capacity_used(), 4);
        assert_eq!(arena[b], "b");
    }

    #[test]
    fn get_out_of_range_is_none() {
        let mut arena: Arena<i32> = Arena::new();
        assert_eq!(arena.get(7), None);
        assert_eq!(arena.get_mut(0), None);
        assert!(arena.is_empty());
    }

    #[test]
    #[should_panic(expected = "released twice")]
    fn double_release_panics() {
        let mut arena = Arena::new();
        let i = arena.alloc(1);
        arena.release(i);
        arena.release(i);
    }

    #[test]
    fn slots_mut_skips_vacant() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.alloc(2);
        arena.release(a);
        let slots = arena.slots_mut();
        assert!(slots[0].is_none());
        assert_eq!(slots[1].as_deref(), Some(&2));
    }
}
