//! Per-symbol series store with lazy fold and result caching.

use nazca_tree::AggregateTree;
use nazca_types::limits::{
    MAX_BATCH_VALUES, MAX_WINDOW_EXPONENT, MIN_WINDOW_EXPONENT, window_size,
};
use nazca_types::{NazcaError, Result, Stats};

/// Number of cacheable window classes (`k` in `1..=8`).
const WINDOW_CLASSES: usize = MAX_WINDOW_EXPONENT as usize;

/// A cached query result, valid only while the committed length it was
/// computed against is still current.
#[derive(Debug, Clone, Copy)]
struct CachedStats {
    committed: usize,
    stats: Stats,
}

/// Append-only value series for a single symbol.
///
/// Appends are cheap buffer writes; the aggregate tree is only brought up
/// to date when a query arrives (the lazy fold). A burst of appends
/// followed by one query therefore pays the O(log n)-per-value fold cost
/// once, and repeated queries at the same window class with no intervening
/// append are answered from the cache.
///
/// Callers must serialize operations on one store; the registry wraps each
/// store in a mutex to that end.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    tree: AggregateTree,
    /// Count of values already folded into the tree.
    committed: usize,
    /// Appended but not yet folded values, in chronological order.
    pending: Vec<f64>,
    /// Most recently appended value.
    last: Option<f64>,
    cache: [Option<CachedStats>; WINDOW_CLASSES],
}

impl SeriesStore {
    /// Creates an empty series store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: AggregateTree::new(),
            committed: 0,
            pending: Vec::new(),
            last: None,
            cache: [None; WINDOW_CLASSES],
        }
    }

    /// Validates a batch without touching any state.
    ///
    /// # Errors
    ///
    /// Returns [`NazcaError::EmptyBatch`] for an empty batch,
    /// [`NazcaError::BatchTooLarge`] when the batch exceeds
    /// [`MAX_BATCH_VALUES`], and [`NazcaError::InvalidValue`] when any
    /// value is NaN or infinite.
    pub fn validate_batch(values: &[f64]) -> Result<()> {
        if values.is_empty() {
            return Err(NazcaError::EmptyBatch);
        }
        if values.len() > MAX_BATCH_VALUES {
            return Err(NazcaError::BatchTooLarge { len: values.len() });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(NazcaError::InvalidValue { index });
        }
        Ok(())
    }

    /// Appends a batch of values, oldest to newest.
    ///
    /// The values are buffered; the aggregate tree is not touched until
    /// the next query folds them in. A failed append leaves the store
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Same conditions as [`validate_batch`](Self::validate_batch).
    pub fn append(&mut self, values: &[f64]) -> Result<()> {
        Self::validate_batch(values)?;
        self.pending.extend_from_slice(values);
        self.last = values.last().copied();
        Ok(())
    }

    /// Returns statistics over the trailing `min(10^k, len)` values.
    ///
    /// Folds any pending values into the tree first, then answers from the
    /// per-window cache when the series has not grown since the cached
    /// entry was computed, and otherwise from one O(log n) range query.
    ///
    /// # Errors
    ///
    /// Returns [`NazcaError::InvalidK`] when `k` is outside `1..=8` (the
    /// store is left unchanged, pending values included) and
    /// [`NazcaError::NoData`] when the series holds no values.
    pub fn query(&mut self, k: u32) -> Result<Stats> {
        if !(MIN_WINDOW_EXPONENT..=MAX_WINDOW_EXPONENT).contains(&k) {
            return Err(NazcaError::InvalidK(k));
        }

        self.fold_pending();
        if self.committed == 0 {
            return Err(NazcaError::NoData);
        }

        let window = window_size(k).min(self.committed);
        let slot = (k - MIN_WINDOW_EXPONENT) as usize;
        if let Some(cached) = self.cache[slot] {
            // Pending is empty after the fold, so an equal stamp means the
            // cached entry has seen every value.
            if cached.committed == self.committed {
                return Ok(cached.stats);
            }
        }

        let lo = self.committed - window;
        let agg = self.tree.range_query(lo, self.committed);
        let n = window as f64;
        let avg = agg.sum / n;
        let var = (agg.sum_sq / n - avg * avg).max(0.0);
        let Some(last) = self.last else {
            return Err(NazcaError::NoData);
        };

        let stats = Stats::new(agg.min, agg.max, last, avg, var);
        self.cache[slot] = Some(CachedStats {
            committed: self.committed,
            stats,
        });
        Ok(stats)
    }

    /// Returns the total number of values in the series, folded or not.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.committed + self.pending.len()
    }

    /// Returns `true` when the series holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Folds all pending values into the tree at consecutive indices.
    fn fold_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.tree.ensure_capacity(self.committed + self.pending.len());
        for value in self.pending.drain(..) {
            self.tree.set_leaf(self.committed, value);
            self.committed += 1;
        }
    }
}
