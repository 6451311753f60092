//! Display policy
//!
//! Rendering configuration supplied by the host. Controls rounding
//! granularity only; never mutates the underlying values.

use serde::{Deserialize, Serialize};

/// Rounding and transition configuration for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPolicy {
    /// Decimal places for nutrient amounts. 0 selects the whole-number
    /// rendering with its sub-gram thresholds.
    pub decimal_places: usize,
    /// While a transition animates, amounts in the decimal path render as
    /// whole numbers. Has no effect when `decimal_places` is 0.
    pub animating: bool,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            decimal_places: 1,
            animating: false,
        }
    }
}

impl DisplayPolicy {
    pub fn with_decimal_places(decimal_places: usize) -> Self {
        Self {
            decimal_places,
            animating: false,
        }
    }
}
