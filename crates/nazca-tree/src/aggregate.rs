//! Reducible aggregate carried by every tree node.

/// Combined minimum, maximum, sum, and sum of squares over a set of values.
///
/// The combine operation is associative and commutative, which is what
/// allows any contiguous index range to be decomposed into O(log n)
/// disjoint canonical tree nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// Smallest value in the covered range.
    pub min: f64,
    /// Largest value in the covered range.
    pub max: f64,
    /// Sum of the covered values.
    pub sum: f64,
    /// Sum of squares of the covered values.
    pub sum_sq: f64,
}

impl Aggregate {
    /// The neutral element: combining with it leaves any aggregate
    /// unchanged. Unwritten tree leaves hold this value.
    pub const NEUTRAL: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
        sum: 0.0,
        sum_sq: 0.0,
    };

    /// Creates the aggregate of a single value.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            sum_sq: value * value,
        }
    }

    /// Combines two aggregates element-wise.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_leaf() {
        let agg = Aggregate::leaf(3.0);
        assert_eq!(agg.min, 3.0);
        assert_eq!(agg.max, 3.0);
        assert_eq!(agg.sum, 3.0);
        assert_eq!(agg.sum_sq, 9.0);
    }

    #[test]
    fn test_combine() {
        let a = Aggregate::leaf(2.0);
        let b = Aggregate::leaf(-5.0);
        let c = a.combine(&b);
        assert_eq!(c.min, -5.0);
        assert_eq!(c.max, 2.0);
        assert_relative_eq!(c.sum, -3.0);
        assert_relative_eq!(c.sum_sq, 29.0);
    }

    #[test]
    fn test_neutral_is_identity() {
        let a = Aggregate::leaf(1.5);
        assert_eq!(a.combine(&Aggregate::NEUTRAL), a);
        assert_eq!(Aggregate::NEUTRAL.combine(&a), a);
    }

    #[test]
    fn test_combine_is_associative() {
        let a = Aggregate::leaf(1.0);
        let b = Aggregate::leaf(2.0);
        let c = Aggregate::leaf(3.0);
        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        assert_eq!(left, right);
    }
}
