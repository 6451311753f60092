//! Food Label Library
//!
//! Formats US-style "Nutrition Facts" labels: amount strings, percent
//! daily values, and rows in canonical order. Pure computation over
//! value objects; layout and styling stay in the host view layer.

pub mod label;
pub mod models;
pub mod nutrients;

pub use label::{FoodLabel, LabelRow, CUSTOM_RDA_MARKER, DAILY_VALUE_FOOTNOTE};
pub use models::{
    CustomNutrient, CustomRdaValues, DisplayPolicy, FoodLabelData, LabelDataSource,
    NutrientValue, RdaReference,
};
pub use nutrients::{NutrientType, NutrientUnit, UnitError};
