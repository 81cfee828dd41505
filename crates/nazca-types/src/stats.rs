//! Window statistics result.

use serde::{Deserialize, Serialize};

/// Summary statistics over the trailing window of a series.
///
/// `var` is the population variance `E[x^2] - E[x]^2` over the window,
/// clamped to zero to absorb floating-point cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Smallest value in the window.
    pub min: f64,
    /// Largest value in the window.
    pub max: f64,
    /// Most recently appended value of the series.
    pub last: f64,
    /// Arithmetic mean of the window.
    pub avg: f64,
    /// Population variance of the window.
    pub var: f64,
}

impl Stats {
    /// Creates a new stats result.
    #[must_use]
    pub const fn new(min: f64, max: f64, last: f64, avg: f64, var: f64) -> Self {
        Self {
            min,
            max,
            last,
            avg,
            var,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_field_names() {
        let stats = Stats::new(1.0, 3.0, 3.0, 2.0, 0.5);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["min"], 1.0);
        assert_eq!(json["max"], 3.0);
        assert_eq!(json["last"], 3.0);
        assert_eq!(json["avg"], 2.0);
        assert_eq!(json["var"], 0.5);
    }

    #[test]
    fn test_round_trip() {
        let stats = Stats::new(-2.5, 10.0, 4.0, 1.25, 3.75);
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }
}
