//! RDA reference value object
//!
//! The recommended daily allowance a %DV figure is computed against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::nutrients::{NutrientType, NutrientUnit};

/// A daily-value reference amount
///
/// Only references with a positive, finite amount anchor a percent figure;
/// anything else is treated as absent and the figure is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RdaReference {
    pub amount: f64,
    pub unit: NutrientUnit,
}

impl RdaReference {
    pub fn new(amount: f64, unit: NutrientUnit) -> Self {
        Self { amount, unit }
    }

    /// A gram reference
    pub fn grams(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::G)
    }

    /// A milligram reference
    pub fn milligrams(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Mg)
    }

    /// A microgram reference
    pub fn micrograms(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Mcg)
    }

    /// Whether this reference can anchor a percent figure
    pub fn is_usable(&self) -> bool {
        self.amount.is_finite() && self.amount > 0.0
    }
}

/// Host-supplied RDA overrides, keyed by nutrient
///
/// An entry here wins over the built-in daily-value table and raises the
/// custom marker on the row it applies to.
pub type CustomRdaValues = HashMap<NutrientType, RdaReference>;
