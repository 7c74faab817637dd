use std::mem;
use std::ops::{Index, IndexMut};

use crate::node::NodeId;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    /// A removed entry. `next` links to the next vacant slot, forming the free list.
    Vacant { next: Option<usize> },
}

/// Index-addressed storage for tree nodes.
///
/// Like a `Vec`, except removing an entry never shifts the others: its slot is put on a free
/// list and handed out again by the next [`push`][Slab::push]. Ids therefore stay valid for as
/// long as their entry is stored.
#[derive(Debug, Clone)]
pub(crate) struct Slab<T> {
    slots: Vec<Slot<T>>,
    /// Head of the free list threaded through the vacant slots.
    free_head: Option<usize>,
    len: usize,
}

impl<T> Slab<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Stores `value`, reusing the most recently vacated slot if there is one.
    pub(crate) fn push(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let slot = mem::replace(&mut self.slots[index], Slot::Occupied(value));
                match slot {
                    Slot::Vacant { next } => self.free_head = next,
                    Slot::Occupied(_) => unreachable!("free list pointed at an occupied slot"),
                }
                NodeId::new(index)
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId::new(self.slots.len() - 1)
            }
        }
    }

    /// Vacates the slot for `id`, returning what it held.
    ///
    /// ## Panics
    ///
    /// When the slot is already vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        let index = id.index();
        let vacant = Slot::Vacant {
            next: self.free_head,
        };
        match mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied(value) => {
                self.free_head = Some(index);
                self.len -= 1;
                value
            }
            Slot::Vacant { next } => {
                // Put the slot back the way we found it before complaining.
                self.slots[index] = Slot::Vacant { next };
                panic!("removed vacant slot {}", index)
            }
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }
}

// Nodes only link to occupied slots, so following a link never hits a vacant one.
impl<T> Index<NodeId> for Slab<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        self.get(id).expect("node links only point at occupied slots")
    }
}

impl<T> IndexMut<NodeId> for Slab<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.get_mut(id)
            .expect("node links only point at occupied slots")
    }
}
