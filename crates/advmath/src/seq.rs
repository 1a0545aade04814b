//! Insertion-order linked list of `f32` values (`Sequence`).
//!
//! Singly linked: each node owns the id of its successor; the list keeps
//! `head`, `tail` and `len` so prepend and append are O(1). Positional
//! access walks the chain and is O(n).
//!
//! Invariants:
//! - `len` equals the number of nodes reachable from `head`.
//! - `tail` is the last reachable node whenever `len > 0`.
//! - `head.is_none()` iff `len == 0` (and then `tail.is_none()` too).
//!
//! Out-of-range positions never panic: `get`/`remove` return `None` and
//! `add` returns `false`, leaving the list untouched.

use std::fmt;

use slab::Slab;

/// Slab key of a node cell.
type NodeId = usize;

#[derive(Clone, Copy, Debug)]
struct Node {
    value: f32,
    next: Option<NodeId>,
}

/// Linked sequence container with O(1) `add_first`/`add_last`.
#[derive(Clone, Default)]
pub struct Sequence {
    nodes: Slab<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Sequence {
    /// One-element list holding `value`.
    pub fn new(value: f32) -> Self {
        let mut seq = Self::default();
        seq.add_last(value);
        seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn first(&self) -> Option<f32> {
        self.head.map(|id| self.nodes[id].value)
    }

    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.tail.map(|id| self.nodes[id].value)
    }

    /// Prepend `value`.
    pub fn add_first(&mut self, value: f32) -> &mut Self {
        let id = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        if self.head.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
        self
    }

    /// Append `value` after the current tail.
    pub fn add_last(&mut self, value: f32) -> &mut Self {
        let id = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        self
    }

    /// Insert `value` so that it ends up at position `index`.
    ///
    /// `index == len()` appends. Returns `false` (list unchanged) when
    /// `index > len()`.
    pub fn add(&mut self, value: f32, index: usize) -> bool {
        if index > self.len {
            tracing::trace!(index, len = self.len, "sequence add out of range; ignored");
            return false;
        }
        if index == self.len {
            self.add_last(value);
            return true;
        }
        if index == 0 {
            self.add_first(value);
            return true;
        }
        let Some(prev) = self.id_at(index - 1) else {
            return false;
        };
        let next = self.nodes[prev].next;
        let id = self.nodes.insert(Node { value, next });
        self.nodes[prev].next = Some(id);
        self.len += 1;
        true
    }

    /// Value at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<f32> {
        if index >= self.len {
            return None;
        }
        self.id_at(index).map(|id| self.nodes[id].value)
    }

    /// Unlink the node at `index` and return its value; `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<f32> {
        if index >= self.len {
            tracing::trace!(index, len = self.len, "sequence remove out of range; ignored");
            return None;
        }
        let removed = if index == 0 {
            let id = self.head?;
            self.head = self.nodes[id].next;
            id
        } else {
            let prev = self.id_at(index - 1)?;
            let id = self.nodes[prev].next?;
            self.nodes[prev].next = self.nodes[id].next;
            if self.tail == Some(id) {
                self.tail = Some(prev);
            }
            id
        };
        self.len -= 1;
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        }
        self.nodes.try_remove(removed).map(|node| node.value)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cur: self.head,
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.iter().collect()
    }

    fn id_at(&self, index: usize) -> Option<NodeId> {
        let mut cur = self.head;
        for _ in 0..index {
            cur = self.nodes[cur?].next;
        }
        cur
    }
}

/// Front-to-back iterator over a [`Sequence`].
pub struct Iter<'a> {
    nodes: &'a Slab<Node>,
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

impl<'a> IntoIterator for &'a Sequence {
    type Item = f32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl FromIterator<f32> for Sequence {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut seq = Self::default();
        seq.extend(iter);
        seq
    }
}

impl Extend<f32> for Sequence {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for v in iter {
            self.add_last(v);
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// Walk the chain and check head/tail/len agree with it.
    fn assert_links(s: &Sequence) {
        let mut count = 0usize;
        let mut last = None;
        let mut cur = s.head;
        while let Some(id) = cur {
            count += 1;
            last = Some(id);
            cur = s.nodes[id].next;
        }
        assert_eq!(count, s.len);
        assert_eq!(last, s.tail);
        assert_eq!(s.head.is_none(), s.len == 0);
        assert_eq!(s.nodes.len(), s.len);
    }

    #[test]
    fn new_has_single_element() {
        let s = Sequence::new(2.5);
        assert_eq!(s.len(), 1);
        assert_eq!(s.head, s.tail);
        assert_eq!(s.get(0), Some(2.5));
        assert_links(&s);
    }

    #[test]
    fn add_first_and_last() {
        let mut s = Sequence::new(2.0);
        s.add_first(1.0).add_last(3.0).add_last(4.0);
        assert_eq!(s.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.first(), Some(1.0));
        assert_eq!(s.last(), Some(4.0));
        assert_links(&s);
    }

    #[test]
    fn add_at_index_places_value() {
        let mut s: Sequence = [0.0, 1.0, 2.0].into_iter().collect();
        assert!(s.add(9.0, 1));
        assert_eq!(s.get(1), Some(9.0));
        assert_eq!(s.to_vec(), vec![0.0, 9.0, 1.0, 2.0]);
        assert!(s.add(-1.0, 0));
        assert_eq!(s.first(), Some(-1.0));
        assert!(s.add(7.0, s.len()));
        assert_eq!(s.last(), Some(7.0));
        assert_eq!(s.len(), 6);
        assert_links(&s);
    }

    #[test]
    fn out_of_range_add_is_noop() {
        let mut s: Sequence = [1.0, 2.0, 3.0].into_iter().collect();
        let before = s.clone();
        assert!(!s.add(5.0, s.len() + 1));
        assert!(!s.add(5.0, usize::MAX));
        assert_eq!(s, before);
        for i in 0..s.len() {
            assert_eq!(s.get(i), before.get(i));
        }
        assert_links(&s);
    }

    #[test]
    fn get_distinguishes_minus_one_from_missing() {
        let s = Sequence::new(-1.0);
        assert_eq!(s.get(0), Some(-1.0));
        assert_eq!(s.get(1), None);
        assert_eq!(Sequence::default().get(0), None);
    }

    #[test]
    fn remove_shifts_following_values() {
        let mut s: Sequence = [1.0, 2.0, 3.0, 4.0].into_iter().collect();
        assert_eq!(s.remove(1), Some(2.0));
        assert_eq!(s.get(1), Some(3.0));
        assert_eq!(s.len(), 3);
        // tail removal repoints tail
        assert_eq!(s.remove(2), Some(4.0));
        assert_eq!(s.last(), Some(3.0));
        s.add_last(5.0);
        assert_eq!(s.to_vec(), vec![1.0, 3.0, 5.0]);
        // head removal repoints head
        assert_eq!(s.remove(0), Some(1.0));
        assert_eq!(s.first(), Some(3.0));
        assert_links(&s);
    }

    #[test]
    fn remove_only_element_empties() {
        let mut s = Sequence::new(1.0);
        assert_eq!(s.remove(0), Some(1.0));
        assert!(s.is_empty());
        assert!(s.head.is_none() && s.tail.is_none());
        assert_eq!(s.get(0), None);
        assert_eq!(s.remove(0), None);
        // usable again after emptying
        s.add_last(2.0);
        s.add_first(1.0);
        assert_eq!(s.to_vec(), vec![1.0, 2.0]);
        assert_links(&s);
    }

    #[test]
    fn released_nodes_are_reused() {
        let mut s = Sequence::new(0.0);
        for i in 0..100 {
            s.add_last(i as f32);
            s.remove(0);
        }
        assert_eq!(s.len(), 1);
        // vacated slab keys are handed out again
        assert!(s.nodes.iter().all(|(key, _)| key < 2));
        assert_eq!(s.nodes.len(), 1);

        let mut t: Sequence = [1.0, 2.0].into_iter().collect();
        let freed = t.head;
        assert_eq!(t.remove(0), Some(1.0));
        t.add_last(3.0);
        assert_eq!(t.tail, freed);
        assert_eq!(t.to_vec(), vec![2.0, 3.0]);
    }

    #[test]
    fn randomized_against_vec_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut s = Sequence::default();
        let mut model: Vec<f32> = Vec::new();
        for _ in 0..2000 {
            let v: f32 = rng.gen_range(-10.0..10.0);
            match rng.gen_range(0..4) {
                0 => {
                    s.add_first(v);
                    model.insert(0, v);
                }
                1 => {
                    s.add_last(v);
                    model.push(v);
                }
                2 => {
                    let i = rng.gen_range(0..=model.len() + 1);
                    let ok = s.add(v, i);
                    assert_eq!(ok, i <= model.len());
                    if ok {
                        model.insert(i, v);
                    }
                }
                _ => {
                    let i = rng.gen_range(0..=model.len());
                    let got = s.remove(i);
                    let want = (i < model.len()).then(|| model.remove(i));
                    assert_eq!(got, want);
                }
            }
        }
        assert_eq!(s.to_vec(), model);
        assert_links(&s);
    }

    proptest! {
        #[test]
        fn add_then_get_returns_value(
            values in prop::collection::vec(-1.0e3f32..1.0e3, 0..32),
            v in -1.0e3f32..1.0e3,
            pick in 0usize..64,
        ) {
            let mut s: Sequence = values.iter().copied().collect();
            let index = pick % (values.len() + 1);
            let before = s.len();
            prop_assert!(s.add(v, index));
            prop_assert_eq!(s.get(index), Some(v));
            prop_assert_eq!(s.len(), before + 1);
            assert_links(&s);
        }

        #[test]
        fn remove_then_get_sees_next(
            values in prop::collection::vec(-1.0e3f32..1.0e3, 1..32),
            pick in 0usize..64,
        ) {
            let mut s: Sequence = values.iter().copied().collect();
            let index = pick % values.len();
            prop_assert_eq!(s.remove(index), Some(values[index]));
            prop_assert_eq!(s.get(index), values.get(index + 1).copied());
            prop_assert_eq!(s.len(), values.len() - 1);
            assert_links(&s);
        }
    }
}
