//! Growable array-backed segment tree.

use crate::Aggregate;

/// Segment tree over a contiguous index range `[0, capacity)`.
///
/// The tree is stored as a flat array of `2 * capacity` nodes: leaf `i`
/// lives at `capacity + i`, internal node `p` holds the combined aggregate
/// of its children `2p` and `2p + 1`. Capacity is always a power of two
/// and grows by doubling; leaves that have never been written hold
/// [`Aggregate::NEUTRAL`] so they cannot perturb a query that reaches them.
#[derive(Debug, Clone, Default)]
pub struct AggregateTree {
    capacity: usize,
    nodes: Vec<Aggregate>,
}

impl AggregateTree {
    /// Creates an empty tree. No backing store is allocated until the
    /// first call to [`ensure_capacity`](Self::ensure_capacity).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            nodes: Vec::new(),
        }
    }

    /// Returns the current leaf capacity (a power of two, or zero).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grows the tree so that at least `n` leaves fit.
    ///
    /// Capacity doubles until it reaches the next power of two >= `n`;
    /// existing leaves are copied over and every internal aggregate is
    /// re-derived bottom-up. A no-op when `n` already fits, so the cost
    /// is amortized O(1) per logical append.
    pub fn ensure_capacity(&mut self, n: usize) {
        if n <= self.capacity {
            return;
        }
        let mut capacity = self.capacity.max(1);
        while capacity < n {
            capacity *= 2;
        }

        let mut nodes = vec![Aggregate::NEUTRAL; 2 * capacity];
        for i in 0..self.capacity {
            nodes[capacity + i] = self.nodes[self.capacity + i];
        }
        for p in (1..capacity).rev() {
            nodes[p] = nodes[2 * p].combine(&nodes[2 * p + 1]);
        }

        self.capacity = capacity;
        self.nodes = nodes;
    }

    /// Writes leaf `index` and recomputes its ancestor chain.
    ///
    /// O(log capacity).
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`. Callers grow the tree via
    /// [`ensure_capacity`](Self::ensure_capacity) before writing.
    pub fn set_leaf(&mut self, index: usize, value: f64) {
        assert!(
            index < self.capacity,
            "leaf index {index} out of bounds for capacity {}",
            self.capacity
        );
        let mut pos = self.capacity + index;
        self.nodes[pos] = Aggregate::leaf(value);
        pos /= 2;
        while pos > 0 {
            self.nodes[pos] = self.nodes[2 * pos].combine(&self.nodes[2 * pos + 1]);
            pos /= 2;
        }
    }

    /// Returns the combined aggregate over the half-open range `[lo, hi)`.
    ///
    /// Decomposes the range into at most O(log capacity) disjoint
    /// canonical nodes and combines them. Returns [`Aggregate::NEUTRAL`]
    /// for an empty range.
    #[must_use]
    pub fn range_query(&self, lo: usize, hi: usize) -> Aggregate {
        debug_assert!(lo <= hi);
        if lo >= hi || self.capacity == 0 {
            return Aggregate::NEUTRAL;
        }
        debug_assert!(hi <= self.capacity);

        let mut acc = Aggregate::NEUTRAL;
        let mut lo = lo + self.capacity;
        let mut hi = hi + self.capacity;
        while lo < hi {
            if lo % 2 == 1 {
                acc = acc.combine(&self.nodes[lo]);
                lo += 1;
            }
            if hi % 2 == 1 {
                hi -= 1;
                acc = acc.combine(&self.nodes[hi]);
            }
            lo /= 2;
            hi /= 2;
        }
        acc
    }
}
