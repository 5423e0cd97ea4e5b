//! Numeric range filters sent to the station endpoint.

use serde::{Deserialize, Serialize};

/// Upper bound used when the user leaves a max field empty.
pub const DEFAULT_UPPER_BOUND: f64 = 9999.0;

/// An inclusive `[min, max]` range.
///
/// `min > max` is allowed and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterRange {
    pub min: f64,
    pub max: f64,
}

impl FilterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for FilterRange {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_UPPER_BOUND)
    }
}

/// The four active bounds, one range per metric.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterBounds {
    pub price: FilterRange,
    pub commute_time: FilterRange,
}

impl FilterBounds {
    pub fn new(price: FilterRange, commute_time: FilterRange) -> Self {
        Self {
            price,
            commute_time,
        }
    }

    /// Whether a station with these values passes both ranges.
    pub fn matches(&self, price: f64, commute_time: f64) -> bool {
        self.price.contains(price) && self.commute_time.contains(commute_time)
    }
}
