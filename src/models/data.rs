//! Label data snapshot and data source
//!
//! The host supplies one `FoodLabelData` per render pass, either directly or
//! by implementing the `LabelDataSource` capability on its view-model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::nutrients::{NutrientType, NutrientUnit};

use super::{CustomRdaValues, NutrientValue};

/// A host-defined nutrient outside the closed enumeration
///
/// Rendered after the misc block, always without a %DV figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNutrient {
    pub name: String,
    pub value: NutrientValue,
}

/// Everything one render pass needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLabelData {
    /// Energy figure; its unit seeds the host's kcal/kJ display toggle
    pub energy: NutrientValue,
    /// Total carbohydrate in grams
    pub carb: f64,
    /// Total fat in grams
    pub fat: f64,
    /// Protein in grams
    pub protein: f64,
    /// Nutrient amounts; a row renders only for types present here
    pub nutrients: HashMap<NutrientType, NutrientValue>,
    /// Serving quantity shown in the "Amount per" header
    pub quantity_value: f64,
    pub quantity_unit: String,
    /// Whether %DV figures are computed and shown at all
    pub show_rda: bool,
    /// Host RDA overrides
    pub custom_rda_values: CustomRdaValues,
    /// Host-defined nutrients rendered after the misc block
    pub custom_nutrients: Vec<CustomNutrient>,
    /// Name of the diet the custom RDA values come from, passed through to
    /// the host untouched
    pub diet_name: Option<String>,
}

impl Default for FoodLabelData {
    fn default() -> Self {
        Self {
            energy: NutrientValue::kcal(0.0),
            carb: 0.0,
            fat: 0.0,
            protein: 0.0,
            nutrients: HashMap::new(),
            quantity_value: 0.0,
            quantity_unit: String::new(),
            show_rda: true,
            custom_rda_values: CustomRdaValues::new(),
            custom_nutrients: Vec::new(),
            diet_name: None,
        }
    }
}

impl FoodLabelData {
    /// Look up a nutrient amount
    pub fn nutrient_value(&self, nutrient: NutrientType) -> Option<NutrientValue> {
        self.nutrients.get(&nutrient).copied()
    }

    /// Whether any supplied nutrient belongs in the micronutrient section
    pub fn has_micronutrient_section(&self) -> bool {
        self.nutrients
            .keys()
            .any(|t| !t.is_included_in_main_section() && !t.is_macro_or_energy())
    }

    /// Initial state for the host's energy-unit toggle
    pub fn energy_defaults_to_calories(&self) -> bool {
        self.energy.unit != NutrientUnit::Kj
    }

    /// Snapshot a render pass from any data source
    pub fn from_source<S: LabelDataSource>(source: &S) -> Self {
        Self {
            energy: source.energy_value(),
            carb: source.carb_amount(),
            fat: source.fat_amount(),
            protein: source.protein_amount(),
            nutrients: source.nutrients(),
            quantity_value: source.quantity_value(),
            quantity_unit: source.quantity_unit(),
            show_rda: source.show_rda_values(),
            custom_rda_values: source.custom_rda_values(),
            custom_nutrients: source.custom_nutrients(),
            diet_name: source.diet_name(),
        }
    }
}

/// Capability implemented by host view-models that feed the label
///
/// Required methods cover the figures every label carries; the defaulted
/// ones are display flags hosts rarely override.
pub trait LabelDataSource {
    fn energy_value(&self) -> NutrientValue;
    fn carb_amount(&self) -> f64;
    fn fat_amount(&self) -> f64;
    fn protein_amount(&self) -> f64;
    fn nutrients(&self) -> HashMap<NutrientType, NutrientValue>;
    fn quantity_value(&self) -> f64;
    fn quantity_unit(&self) -> String;

    fn number_of_decimal_places(&self) -> usize {
        1
    }

    fn allow_tap_to_change_energy_unit(&self) -> bool {
        true
    }

    fn show_footer_text(&self) -> bool {
        true
    }

    fn show_rda_values(&self) -> bool {
        true
    }

    fn custom_rda_values(&self) -> CustomRdaValues {
        CustomRdaValues::new()
    }

    fn custom_nutrients(&self) -> Vec<CustomNutrient> {
        Vec::new()
    }

    fn diet_name(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micronutrient_section_detection() {
        let mut data = FoodLabelData::default();
        assert!(!data.has_micronutrient_section());

        // Main-section nutrients alone don't open the micro section
        data.nutrients.insert(
            NutrientType::SaturatedFat,
            NutrientValue::grams(5.0),
        );
        data.nutrients
            .insert(NutrientType::Sodium, NutrientValue::milligrams(450.0));
        assert!(!data.has_micronutrient_section());

        data.nutrients
            .insert(NutrientType::VitaminC, NutrientValue::milligrams(60.0));
        assert!(data.has_micronutrient_section());
    }

    #[test]
    fn test_energy_toggle_seed() {
        let mut data = FoodLabelData::default();
        data.energy = NutrientValue::kcal(235.0);
        assert!(data.energy_defaults_to_calories());

        data.energy = NutrientValue::kilojoules(983.0);
        assert!(!data.energy_defaults_to_calories());
    }

    struct FixtureSource;

    impl LabelDataSource for FixtureSource {
        fn energy_value(&self) -> NutrientValue {
            NutrientValue::kcal(235.0)
        }

        fn carb_amount(&self) -> f64 {
            45.5
        }

        fn fat_amount(&self) -> f64 {
            8.0
        }

        fn protein_amount(&self) -> f64 {
            12.0
        }

        fn nutrients(&self) -> HashMap<NutrientType, NutrientValue> {
            let mut nutrients = HashMap::new();
            nutrients.insert(NutrientType::AddedSugars, NutrientValue::grams(35.0));
            nutrients
        }

        fn quantity_value(&self) -> f64 {
            1.0
        }

        fn quantity_unit(&self) -> String {
            "serving (1 cup, chopped)".to_string()
        }
    }

    #[test]
    fn test_snapshot_from_source_uses_defaults() {
        let data = FoodLabelData::from_source(&FixtureSource);
        assert_eq!(data.carb, 45.5);
        assert!(data.show_rda);
        assert!(data.custom_rda_values.is_empty());
        assert_eq!(data.diet_name, None);
        assert_eq!(
            data.nutrient_value(NutrientType::AddedSugars),
            Some(NutrientValue::grams(35.0))
        );
        assert_eq!(FixtureSource.number_of_decimal_places(), 1);
        assert!(FixtureSource.allow_tap_to_change_energy_unit());
        assert!(FixtureSource.show_footer_text());
    }
}
