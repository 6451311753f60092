//! Percent daily value computation
//!
//! Resolves the reference amount a nutrient is measured against and turns a
//! value into the integer percent printed in the %DV column. Percentages
//! truncate rather than round; changing that would shift every printed
//! figure, so it is pinned by test.

use tracing::warn;

use crate::models::{CustomRdaValues, NutrientValue, RdaReference};
use crate::nutrients::NutrientType;

/// A resolved daily-value reference
///
/// `is_custom` is true when a host override supplied the reference, which
/// puts the marker glyph next to the percent figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRda {
    pub reference: RdaReference,
    pub is_custom: bool,
}

/// A computed percent figure for one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentDailyValue {
    pub percent: u32,
    pub uses_custom_rda: bool,
}

/// Built-in daily-value reference amounts
///
/// Adult values from the FDA nutrition labeling tables. Nutrients without
/// an established daily value return None and render without a %DV figure.
pub fn default_daily_value(nutrient: NutrientType) -> Option<RdaReference> {
    match nutrient {
        NutrientType::Fat => Some(RdaReference::grams(78.0)),
        NutrientType::SaturatedFat => Some(RdaReference::grams(20.0)),
        NutrientType::Cholesterol => Some(RdaReference::milligrams(300.0)),
        NutrientType::Carbohydrate => Some(RdaReference::grams(275.0)),
        NutrientType::DietaryFiber => Some(RdaReference::grams(28.0)),
        NutrientType::AddedSugars => Some(RdaReference::grams(50.0)),
        NutrientType::Protein => Some(RdaReference::grams(50.0)),

        NutrientType::Calcium => Some(RdaReference::milligrams(1300.0)),
        NutrientType::Chloride => Some(RdaReference::milligrams(2300.0)),
        NutrientType::Chromium => Some(RdaReference::micrograms(35.0)),
        NutrientType::Copper => Some(RdaReference::milligrams(0.9)),
        NutrientType::Iodine => Some(RdaReference::micrograms(150.0)),
        NutrientType::Iron => Some(RdaReference::milligrams(18.0)),
        NutrientType::Magnesium => Some(RdaReference::milligrams(420.0)),
        NutrientType::Manganese => Some(RdaReference::milligrams(2.3)),
        NutrientType::Molybdenum => Some(RdaReference::micrograms(45.0)),
        NutrientType::Phosphorus => Some(RdaReference::milligrams(1250.0)),
        NutrientType::Potassium => Some(RdaReference::milligrams(4700.0)),
        NutrientType::Selenium => Some(RdaReference::micrograms(55.0)),
        NutrientType::Sodium => Some(RdaReference::milligrams(2300.0)),
        NutrientType::Zinc => Some(RdaReference::milligrams(11.0)),

        NutrientType::VitaminA => Some(RdaReference::micrograms(900.0)),
        NutrientType::Thiamin => Some(RdaReference::milligrams(1.2)),
        NutrientType::Riboflavin => Some(RdaReference::milligrams(1.3)),
        NutrientType::Niacin => Some(RdaReference::milligrams(16.0)),
        NutrientType::PantothenicAcid => Some(RdaReference::milligrams(5.0)),
        NutrientType::VitaminB6 => Some(RdaReference::milligrams(1.7)),
        NutrientType::Biotin => Some(RdaReference::micrograms(30.0)),
        NutrientType::Folate => Some(RdaReference::micrograms(400.0)),
        NutrientType::VitaminB12 => Some(RdaReference::micrograms(2.4)),
        NutrientType::VitaminC => Some(RdaReference::milligrams(90.0)),
        NutrientType::VitaminD => Some(RdaReference::micrograms(20.0)),
        NutrientType::VitaminE => Some(RdaReference::milligrams(15.0)),
        NutrientType::VitaminK => Some(RdaReference::micrograms(120.0)),
        NutrientType::Choline => Some(RdaReference::milligrams(550.0)),

        // No established daily value: energy, trans fat, total sugars,
        // fiber subtypes, sugar alcohols, and the misc group
        _ => None,
    }
}

/// Resolve the daily-value reference for a nutrient
///
/// A host override wins over the built-in table even when both exist; only
/// then is the resolved reference flagged custom. Unusable overrides
/// (zero or negative amounts) are ignored rather than suppressing the
/// built-in reference.
pub fn resolve_rda_reference(
    nutrient: NutrientType,
    custom: &CustomRdaValues,
) -> Option<ResolvedRda> {
    if let Some(reference) = custom.get(&nutrient) {
        if reference.is_usable() {
            return Some(ResolvedRda {
                reference: *reference,
                is_custom: true,
            });
        }
        warn!(
            "Ignoring unusable custom RDA for {} ({} {})",
            nutrient.display_name(),
            reference.amount,
            reference.unit
        );
    }
    default_daily_value(nutrient).map(|reference| ResolvedRda {
        reference,
        is_custom: false,
    })
}

/// Percent of an RDA reference amount, truncated to a whole number
///
/// Absent, zero, or negative references yield None and the row omits its
/// %DV figure. A value of zero against a usable reference is Some(0);
/// "0%" prints, it is not omitted.
pub fn percent_of_rda(value: f64, rda_amount: Option<f64>) -> Option<u32> {
    let rda = rda_amount?;
    if !rda.is_finite() || rda <= 0.0 {
        return None;
    }
    let value = if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    };
    Some(((value / rda) * 100.0) as u32)
}

/// Percent daily value for one nutrient row
///
/// Resolves the reference, converts it into the value's display unit, and
/// truncates the ratio. Incompatible unit families log a warning and omit
/// the figure; a bad reference never aborts the render pass.
pub fn percent_for_value(
    nutrient: NutrientType,
    value: NutrientValue,
    custom: &CustomRdaValues,
) -> Option<PercentDailyValue> {
    let resolved = resolve_rda_reference(nutrient, custom)?;
    let reference = resolved.reference;
    let rda_amount = match reference.unit.convert(reference.amount, value.unit) {
        Ok(amount) => amount,
        Err(err) => {
            warn!("Omitting %DV for {}: {}", nutrient.display_name(), err);
            return None;
        }
    };
    percent_of_rda(value.amount, Some(rda_amount)).map(|percent| PercentDailyValue {
        percent,
        uses_custom_rda: resolved.is_custom,
    })
}
