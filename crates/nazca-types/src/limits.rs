//! Service limits.
//!
//! These bounds are part of the engine's external contract and are
//! re-validated by the core even when the transport layer checks them.

/// Maximum number of values accepted in a single append batch.
pub const MAX_BATCH_VALUES: usize = 10_000;

/// Maximum number of distinct symbols tracked by one registry.
pub const MAX_SYMBOLS: usize = 10;

/// Smallest accepted window exponent `k` (window of `10^1` values).
pub const MIN_WINDOW_EXPONENT: u32 = 1;

/// Largest accepted window exponent `k` (window of `10^8` values).
pub const MAX_WINDOW_EXPONENT: u32 = 8;

/// Maximum length of a symbol identifier, enforced at the HTTP boundary.
pub const MAX_SYMBOL_LENGTH: usize = 20;

/// Returns the window size for exponent `k`, i.e. `10^k`.
///
/// Callers are expected to pass `k` within the accepted exponent range;
/// values up to 9 are representable without overflow on all supported
/// targets.
#[must_use]
pub const fn window_size(k: u32) -> usize {
    10usize.pow(k)
}
