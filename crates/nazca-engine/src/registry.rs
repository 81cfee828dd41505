//! Bounded symbol-to-store registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use nazca_types::limits::MAX_SYMBOLS;
use nazca_types::{NazcaError, Result, Stats};

use crate::SeriesStore;

/// Process-wide mapping from symbol to its [`SeriesStore`].
///
/// Holds at most [`MAX_SYMBOLS`] entries; a store is created on the first
/// successful append for a new symbol and never removed. Operations on
/// different symbols may run concurrently, so the map itself is guarded
/// and symbol creation is an insert-if-absent under the write lock. The
/// external contract serializes operations on the same symbol; the
/// per-store mutex is only a safety net and is never contended under that
/// contract.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    series: RwLock<HashMap<String, Arc<Mutex<SeriesStore>>>>,
}

impl SymbolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: RwLock::new(HashMap::new()),
        }
    }

    /// Appends a batch of values to the series for `symbol`, creating the
    /// series if this is the first append.
    ///
    /// # Errors
    ///
    /// Returns the batch validation errors of [`SeriesStore::append`], or
    /// [`NazcaError::SymbolLimitExceeded`] when a new symbol would exceed
    /// the registry capacity. An invalid batch never registers a symbol.
    pub fn append(&self, symbol: &str, values: &[f64]) -> Result<()> {
        SeriesStore::validate_batch(values)?;
        let store = self.resolve_or_create(symbol)?;
        let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
        store.append(values)
    }

    /// Returns statistics for the trailing `10^k` window of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`NazcaError::UnknownSymbol`] when no series exists for
    /// `symbol`, or the query errors of [`SeriesStore::query`].
    pub fn query(&self, symbol: &str, k: u32) -> Result<Stats> {
        let store = self
            .read_map()
            .get(symbol)
            .cloned()
            .ok_or_else(|| NazcaError::UnknownSymbol(symbol.to_string()))?;
        let mut store = store.lock().unwrap_or_else(PoisonError::into_inner);
        store.query(k)
    }

    /// Returns the number of registered symbols.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.read_map().len()
    }

    /// Returns `true` when a series exists for `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.read_map().contains_key(symbol)
    }

    /// Resolves the store for `symbol`, creating it under the write lock
    /// when absent.
    fn resolve_or_create(&self, symbol: &str) -> Result<Arc<Mutex<SeriesStore>>> {
        if let Some(store) = self.read_map().get(symbol) {
            return Ok(Arc::clone(store));
        }

        let mut map = self
            .series
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another thread may have created the symbol between the read and
        // the write lock; re-check before counting against the limit.
        if let Some(store) = map.get(symbol) {
            return Ok(Arc::clone(store));
        }
        if map.len() >= MAX_SYMBOLS {
            return Err(NazcaError::SymbolLimitExceeded);
        }
        let store = Arc::new(Mutex::new(SeriesStore::new()));
        map.insert(symbol.to_string(), Arc::clone(&store));
        Ok(store)
    }

    fn read_map(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<String, Arc<Mutex<SeriesStore>>>> {
        self.series.read().unwrap_or_else(PoisonError::into_inner)
    }
}
