//! Range Comparator
//!
//! Compares a farm value against a crop's inclusive optimal range and
//! reports where it falls and how far it is from the nearest bound.

use crate::catalog::ValueRange;

/// Where a farm value sits relative to a crop's optimal range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// value < low
    BelowRange,

    /// low <= value <= high
    WithinRange,

    /// value > high
    AboveRange,

    /// value is NaN and cannot be placed
    Incomparable,
}

/// Result of range comparison with distance context
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeComparison {
    pub fit: RangeFit,

    /// Distance from nearest bound (0 if within range, infinite if incomparable)
    pub distance_from_range: f64,
}

impl RangeComparison {
    pub fn is_within_range(&self) -> bool {
        self.fit == RangeFit::WithinRange
    }

    /// Outside the range but no further than `tolerance` from a bound
    pub fn is_near_range(&self, tolerance: f64) -> bool {
        !self.is_within_range() && self.distance_from_range <= tolerance
    }
}

/// Compare a farm value against an inclusive range
pub fn compare_to_range(value: f64, range: ValueRange) -> RangeComparison {
    let (fit, distance) = if value.is_nan() {
        (RangeFit::Incomparable, f64::INFINITY)
    } else if value < range.low {
        (RangeFit::BelowRange, range.low - value)
    } else if value > range.high {
        (RangeFit::AboveRange, value - range.high)
    } else {
        (RangeFit::WithinRange, 0.0)
    };

    RangeComparison {
        fit,
        distance_from_range: distance,
    }
}
