//! Label formatting module
//!
//! Amount formatting, %DV computation, and row construction.

pub mod format;
pub mod rda;
pub mod rows;

pub use format::{
    format_amount, format_amount_with_policy, format_energy_amount, format_quantity,
};
pub use rda::{
    default_daily_value, percent_for_value, percent_of_rda, resolve_rda_reference,
    PercentDailyValue, ResolvedRda,
};
pub use rows::{
    EnergyRow, FoodLabel, LabelRow, QuantityRow, CUSTOM_RDA_MARKER, DAILY_VALUE_FOOTNOTE,
};
