//! Nutrient measurement units
//!
//! Provides the unit enum attached to label values and RDA references, plus
//! the minimal conversions the label needs for display.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit a nutrient amount or RDA reference is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientUnit {
    /// Grams
    G,
    /// Milligrams
    Mg,
    /// Micrograms
    Mcg,
    /// International units - substance-specific, never converted to mass
    Iu,
    /// Kilocalories
    Kcal,
    /// Kilojoules
    Kj,
    /// Percent (e.g. alcohol by volume)
    Percent,
}

/// Unit conversion error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("incompatible units: cannot convert {from} to {to}")]
    Incompatible { from: NutrientUnit, to: NutrientUnit },
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Milligrams per gram
pub const MG_PER_G: f64 = 1000.0;
/// Micrograms per milligram
pub const MCG_PER_MG: f64 = 1000.0;
/// Micrograms per gram
pub const MCG_PER_G: f64 = 1_000_000.0;
/// Kilojoules per kilocalorie
pub const KJ_PER_KCAL: f64 = 4.184;

impl NutrientUnit {
    /// The suffix appended after a formatted amount
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientUnit::G => "g",
            NutrientUnit::Mg => "mg",
            NutrientUnit::Mcg => "mcg",
            NutrientUnit::Iu => "IU",
            NutrientUnit::Kcal => "kcal",
            NutrientUnit::Kj => "kJ",
            NutrientUnit::Percent => "%",
        }
    }

    /// Parse from common spellings
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "g" | "gram" | "grams" => Some(NutrientUnit::G),
            "mg" | "milligram" | "milligrams" => Some(NutrientUnit::Mg),
            "mcg" | "ug" | "µg" | "microgram" | "micrograms" => Some(NutrientUnit::Mcg),
            "iu" => Some(NutrientUnit::Iu),
            "kcal" | "cal" | "calorie" | "calories" => Some(NutrientUnit::Kcal),
            "kj" | "kilojoule" | "kilojoules" => Some(NutrientUnit::Kj),
            "%" | "percent" => Some(NutrientUnit::Percent),
            _ => None,
        }
    }

    /// Convert an amount in this unit to the target unit
    ///
    /// Same-unit conversion is the identity for every unit. Mass units
    /// convert among themselves, as do the two energy units. Everything
    /// else (IU or percent to anything, mass to energy) fails with
    /// [`UnitError::Incompatible`].
    pub fn convert(&self, amount: f64, to: NutrientUnit) -> Result<f64, UnitError> {
        use NutrientUnit::*;

        if *self == to {
            return Ok(amount);
        }

        let converted = match (*self, to) {
            (G, Mg) => amount * MG_PER_G,
            (G, Mcg) => amount * MCG_PER_G,
            (Mg, G) => amount / MG_PER_G,
            (Mg, Mcg) => amount * MCG_PER_MG,
            (Mcg, G) => amount / MCG_PER_G,
            (Mcg, Mg) => amount / MCG_PER_MG,
            (Kcal, Kj) => amount * KJ_PER_KCAL,
            (Kj, Kcal) => amount / KJ_PER_KCAL,
            _ => return Err(UnitError::Incompatible { from: *self, to }),
        };

        Ok(converted)
    }
}

impl fmt::Display for NutrientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
