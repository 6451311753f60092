//! Nutrient value object
//!
//! An amount paired with the unit it is displayed in.

use serde::{Deserialize, Serialize};

use crate::nutrients::{NutrientUnit, KJ_PER_KCAL};

/// An immutable nutrient amount
///
/// Constructed fresh per render pass from host data. `new` clamps negative
/// and non-finite amounts to zero; the formatting entry points apply the
/// same policy to amounts built directly from struct literals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientValue {
    pub amount: f64,
    pub unit: NutrientUnit,
}

impl NutrientValue {
    /// Create a value, clamping negative or non-finite amounts to zero
    pub fn new(amount: f64, unit: NutrientUnit) -> Self {
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };
        Self { amount, unit }
    }

    /// A gram amount
    pub fn grams(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::G)
    }

    /// A milligram amount
    pub fn milligrams(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Mg)
    }

    /// A microgram amount
    pub fn micrograms(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Mcg)
    }

    /// An energy amount in kilocalories
    pub fn kcal(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Kcal)
    }

    /// An energy amount in kilojoules
    pub fn kilojoules(amount: f64) -> Self {
        Self::new(amount, NutrientUnit::Kj)
    }

    /// Energy figure expressed in kilocalories
    ///
    /// Amounts carrying any unit other than kJ are taken to already be in
    /// kilocalories.
    pub fn energy_in_kcal(&self) -> f64 {
        match self.unit {
            NutrientUnit::Kj => self.amount / KJ_PER_KCAL,
            _ => self.amount,
        }
    }

    /// Energy figure expressed in kilojoules
    pub fn energy_in_kj(&self) -> f64 {
        match self.unit {
            NutrientUnit::Kj => self.amount,
            _ => self.amount * KJ_PER_KCAL,
        }
    }
}
