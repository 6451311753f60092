//! Nutrient enumerations
//!
//! Closed sets of nutrient types and measurement units.

pub mod types;
pub mod units;

pub use types::{NutrientType, MAIN_SECTION_NUTRIENTS};
pub use units::{NutrientUnit, UnitError, KJ_PER_KCAL, MCG_PER_G, MCG_PER_MG, MG_PER_G};
