//! Benchmark utilities for nazca.

/// Deterministic pseudo-random value generator for benchmark series.
///
/// A plain LCG; quality does not matter here, reproducibility does.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    state: u64,
}

impl ValueGenerator {
    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next value, roughly uniform in `[-1000, 1000)`.
    pub fn next_value(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.state >> 33) as f64) / 1_073_741.824 - 1000.0
    }

    /// Returns a batch of `len` values.
    pub fn batch(&mut self, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.next_value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_deterministic() {
        let mut a = ValueGenerator::new(7);
        let mut b = ValueGenerator::new(7);
        assert_eq!(a.batch(100), b.batch(100));
    }

    #[test]
    fn test_values_are_finite_and_bounded() {
        let mut generator = ValueGenerator::new(1);
        for value in generator.batch(10_000) {
            assert!(value.is_finite());
            assert!((-1000.0..1000.0).contains(&value));
        }
    }
}
