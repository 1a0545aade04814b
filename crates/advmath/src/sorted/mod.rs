//! Always-ascending doubly linked list of `f32` values (`SortedSequence`).
//!
//! Purpose
//! - Keep values ordered on insert so that traversal is non-decreasing
//!   without a separate sort pass.
//! - Support positional reads and removals like [`crate::seq::Sequence`].
//!
//! Insertion scans from the head while `scanned <= value`, so equal values
//! land after the ones already stored (stable). `prev` links let positional
//! reads start from whichever end is closer.
//!
//! Invariants:
//! - Forward traversal yields values in non-decreasing order.
//! - `n.next == Some(m)` implies `m.prev == Some(n)`; `head.prev` and
//!   `tail.next` are `None`.
//! - `head.is_none()` iff `len == 0`.

use std::fmt;

use slab::Slab;

/// Slab key of a node cell.
type NodeId = usize;

#[derive(Clone, Copy, Debug)]
struct DNode {
    value: f32,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// Sorted linked container; see module docs for invariants.
#[derive(Clone, Default)]
pub struct SortedSequence {
    nodes: Slab<DNode>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl SortedSequence {
    /// One-element container holding `value`.
    ///
    /// A NaN seed yields an empty container; use [`Self::try_new`] to get a
    /// signal instead.
    pub fn new(value: f32) -> Self {
        let mut s = Self::default();
        s.add(value);
        s
    }

    /// One-element container, or `None` when `value` is NaN.
    pub fn try_new(value: f32) -> Option<Self> {
        let mut s = Self::default();
        s.add(value).then_some(s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest stored value.
    #[inline]
    pub fn first(&self) -> Option<f32> {
        self.head.map(|id| self.nodes[id].value)
    }

    /// Largest stored value.
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.tail.map(|id| self.nodes[id].value)
    }

    /// Insert `value` at its ordered position. Returns `false` for NaN,
    /// which has no place in the order; the container is left unchanged.
    pub fn add(&mut self, value: f32) -> bool {
        if value.is_nan() {
            tracing::trace!(len = self.len, "sorted add of NaN; ignored");
            return false;
        }
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if node.value <= value {
                prev = cur;
                cur = node.next;
            } else {
                break;
            }
        }
        let id = self.nodes.insert(DNode {
            value,
            next: cur,
            prev,
        });
        match prev {
            Some(p) => self.nodes[p].next = Some(id),
            None => self.head = Some(id),
        }
        match cur {
            Some(n) => self.nodes[n].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.len += 1;
        true
    }

    /// Value at `index` in ascending order, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.id_at(index).map(|id| self.nodes[id].value)
    }

    /// Unlink the node at `index` and return its value; `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<f32> {
        let Some(id) = self.id_at(index) else {
            tracing::trace!(index, len = self.len, "sorted remove out of range; ignored");
            return None;
        };
        let DNode { prev, next, .. } = self.nodes[id];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
        self.nodes.try_remove(id).map(|node| node.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Ascending iterator (follows `next`).
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.len,
        }
    }

    /// Descending iterator (follows `prev` from the tail).
    pub fn iter_rev(&self) -> IterRev<'_> {
        IterRev {
            nodes: &self.nodes,
            cur: self.tail,
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.iter().collect()
    }

    // Walks from whichever end is closer to `index`.
    fn id_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut cur = self.head;
            for _ in 0..index {
                cur = self.nodes[cur?].next;
            }
            cur
        } else {
            let mut cur = self.tail;
            for _ in 0..(self.len - 1 - index) {
                cur = self.nodes[cur?].prev;
            }
            cur
        }
    }
}

pub struct Iter<'a> {
    nodes: &'a Slab<DNode>,
    cur: Option<NodeId>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let node = &self.nodes[self.cur?];
        self.cur = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

pub struct IterRev<'a> {
    nodes: &'a Slab<DNode>,
    cur: Option<NodeId>,
    remaining: usize,
}

impl Iterator for IterRev<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let node = &self.nodes[self.cur?];
        self.cur = node.prev;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IterRev<'_> {}

impl<'a> IntoIterator for &'a SortedSequence {
    type Item = f32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<f32> for SortedSequence {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut s = Self::default();
        s.extend(iter);
        s
    }
}

impl Extend<f32> for SortedSequence {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl PartialEq for SortedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for SortedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
