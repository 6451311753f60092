//! Label row construction
//!
//! Builds the complete row sequence of a Nutrition Facts label from one
//! data snapshot, in the canonical order: the fat block, the highlighted
//! cholesterol and sodium rows, the carbohydrate subtree, protein, then the
//! micronutrient groups and any host-defined nutrients. Rows carry display
//! strings plus layout hints; spacing, fonts, and dividers belong to the
//! host.

use serde::{Deserialize, Serialize};

use crate::models::{CustomNutrient, DisplayPolicy, FoodLabelData, LabelDataSource, NutrientValue};
use crate::nutrients::{NutrientType, NutrientUnit};

use super::format::{format_amount_with_policy, format_energy_amount, format_quantity};
use super::rda::percent_for_value;

/// Marker rendered beside a %DV figure computed from a host-supplied
/// reference instead of the built-in table
pub const CUSTOM_RDA_MARKER: &str = "\u{2020}";

/// Regulatory footnote printed under the label when %DV figures are shown
pub const DAILY_VALUE_FOOTNOTE: &str = "The % Daily Value (DV) tells you how much a nutrient \
in a serving of food contributes to a daily diet. 2,000 calories a day is used for general \
nutrition advice.";

/// One nutrient line on the label
///
/// `amount` and `unit` are kept separate so the host controls concatenation
/// and localization. `prefixed_with_includes` selects the "Includes Xg
/// Added Sugars" sentence form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRow {
    pub title: String,
    /// Italic lead-in before the title ("Trans" Fat)
    pub prefix: Option<String>,
    pub amount: String,
    pub unit: String,
    pub percent_daily_value: Option<u32>,
    /// True when the percent figure came from a host override; the host
    /// renders [`CUSTOM_RDA_MARKER`] beside it
    pub uses_custom_rda: bool,
    pub indent_level: u8,
    pub bold: bool,
    pub prefixed_with_includes: bool,
}

/// The energy line under the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyRow {
    /// "Calories" when showing kilocalories, "Energy" otherwise
    pub title: String,
    pub amount: String,
    /// "kJ" when showing kilojoules; the kilocalorie figure prints bare
    pub unit_suffix: Option<String>,
}

/// The serving quantity in the "Amount per" header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRow {
    pub amount: String,
    pub unit: String,
}

/// A fully formatted label, ready for the host to lay out
///
/// `micro_rows` is empty when no supplied nutrient belongs in the
/// micronutrient section, in which case the host skips that block and its
/// separator entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLabel {
    pub quantity: QuantityRow,
    pub energy: EnergyRow,
    /// Whether the "% Daily Value*" column header is shown
    pub show_percent_header: bool,
    pub main_rows: Vec<LabelRow>,
    pub micro_rows: Vec<LabelRow>,
    pub custom_rows: Vec<LabelRow>,
    pub footnote: Option<String>,
    /// Name of the diet behind any custom references, for the host to
    /// caption the markers with
    pub diet_name: Option<String>,
}

impl FoodLabel {
    /// Build a label from one data snapshot
    ///
    /// `in_calories` selects the energy representation; the host flips it
    /// when the user toggles units and rebuilds.
    pub fn build(data: &FoodLabelData, policy: &DisplayPolicy, in_calories: bool) -> Self {
        let builder = RowBuilder { data, policy };

        Self {
            quantity: QuantityRow {
                amount: format_quantity(data.quantity_value),
                unit: data.quantity_unit.clone(),
            },
            energy: EnergyRow {
                title: if in_calories { "Calories" } else { "Energy" }.to_string(),
                amount: format_energy_amount(data.energy, in_calories),
                unit_suffix: if in_calories {
                    None
                } else {
                    Some("kJ".to_string())
                },
            },
            show_percent_header: data.show_rda,
            main_rows: builder.main_rows(),
            micro_rows: builder.micro_rows(),
            custom_rows: data.custom_nutrients.iter().map(|c| builder.custom_row(c)).collect(),
            footnote: if data.show_rda {
                Some(DAILY_VALUE_FOOTNOTE.to_string())
            } else {
                None
            },
            diet_name: data.diet_name.clone(),
        }
    }

    /// Build a label straight from a host data source
    ///
    /// Snapshots the source and applies its decimal-place preference.
    pub fn from_source<S: LabelDataSource>(source: &S, in_calories: bool) -> Self {
        let data = FoodLabelData::from_source(source);
        let policy = DisplayPolicy::with_decimal_places(source.number_of_decimal_places());
        Self::build(&data, &policy, in_calories)
    }
}

struct RowBuilder<'a> {
    data: &'a FoodLabelData,
    policy: &'a DisplayPolicy,
}

impl RowBuilder<'_> {
    /// Percent figure for a row, or nothing when %DV display is off or no
    /// usable reference exists
    fn percent(&self, nutrient: NutrientType, value: NutrientValue) -> (Option<u32>, bool) {
        if !self.data.show_rda {
            return (None, false);
        }
        match percent_for_value(nutrient, value, &self.data.custom_rda_values) {
            Some(pdv) => (Some(pdv.percent), pdv.uses_custom_rda),
            None => (None, false),
        }
    }

    /// A bold total row for one of the three macros, always in grams
    fn macro_row(&self, nutrient: NutrientType, grams: f64) -> LabelRow {
        let value = NutrientValue::grams(grams);
        let (percent_daily_value, uses_custom_rda) = self.percent(nutrient, value);
        LabelRow {
            title: nutrient.display_name().to_string(),
            prefix: None,
            amount: format_amount_with_policy(value.amount, self.policy),
            unit: NutrientUnit::G.as_str().to_string(),
            percent_daily_value,
            uses_custom_rda,
            indent_level: 0,
            bold: true,
            prefixed_with_includes: false,
        }
    }

    /// A row for a supplied nutrient, or nothing when the snapshot has no
    /// amount for it
    fn nutrient_row(
        &self,
        nutrient: NutrientType,
        indent_level: u8,
        prefixed_with_includes: bool,
    ) -> Option<LabelRow> {
        let value = self.data.nutrient_value(nutrient)?;

        // Trans fat prints as an italic "Trans" before a plain "Fat"
        let (prefix, title) = if nutrient == NutrientType::TransFat {
            (Some("Trans".to_string()), "Fat")
        } else {
            (None, nutrient.display_name())
        };
        let bold = matches!(
            nutrient,
            NutrientType::Cholesterol | NutrientType::Sodium
        );
        let (percent_daily_value, uses_custom_rda) = self.percent(nutrient, value);

        Some(LabelRow {
            title: title.to_string(),
            prefix,
            amount: format_amount_with_policy(value.amount, self.policy),
            unit: value.unit.as_str().to_string(),
            percent_daily_value,
            uses_custom_rda,
            indent_level,
            bold,
            prefixed_with_includes,
        })
    }

    /// A host-defined nutrient row; never carries a %DV figure
    fn custom_row(&self, custom: &CustomNutrient) -> LabelRow {
        LabelRow {
            title: custom.name.clone(),
            prefix: None,
            amount: format_amount_with_policy(custom.value.amount, self.policy),
            unit: custom.value.unit.as_str().to_string(),
            percent_daily_value: None,
            uses_custom_rda: false,
            indent_level: 0,
            bold: false,
            prefixed_with_includes: false,
        }
    }

    /// The main section in canonical order
    fn main_rows(&self) -> Vec<LabelRow> {
        let mut rows = Vec::new();

        // Fat block
        rows.push(self.macro_row(NutrientType::Fat, self.data.fat));
        for nutrient in [
            NutrientType::SaturatedFat,
            NutrientType::TransFat,
            NutrientType::PolyunsaturatedFat,
            NutrientType::MonounsaturatedFat,
        ] {
            rows.extend(self.nutrient_row(nutrient, 1, false));
        }

        // Highlighted rows
        rows.extend(self.nutrient_row(NutrientType::Cholesterol, 0, false));
        rows.extend(self.nutrient_row(NutrientType::Sodium, 0, false));

        // Carbohydrate subtree
        rows.push(self.macro_row(NutrientType::Carbohydrate, self.data.carb));
        rows.extend(self.nutrient_row(NutrientType::DietaryFiber, 1, false));
        rows.extend(self.nutrient_row(NutrientType::SolubleFiber, 2, false));
        rows.extend(self.nutrient_row(NutrientType::InsolubleFiber, 2, false));
        rows.extend(self.nutrient_row(NutrientType::Sugars, 1, false));
        rows.extend(self.nutrient_row(NutrientType::AddedSugars, 2, true));
        rows.extend(self.nutrient_row(NutrientType::SugarAlcohols, 2, false));

        rows.push(self.macro_row(NutrientType::Protein, self.data.protein));

        rows
    }

    /// Vitamins, then minerals, then the misc group; sodium is excluded
    /// here because its row renders with the highlighted macros
    fn micro_rows(&self) -> Vec<LabelRow> {
        let mut rows = Vec::new();
        for nutrient in NutrientType::vitamins() {
            rows.extend(self.nutrient_row(*nutrient, 0, false));
        }
        for nutrient in NutrientType::minerals() {
            if *nutrient == NutrientType::Sodium {
                continue;
            }
            rows.extend(self.nutrient_row(*nutrient, 0, false));
        }
        for nutrient in NutrientType::misc() {
            rows.extend(self.nutrient_row(*nutrient, 0, false));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RdaReference;
    use std::collections::HashMap;

    fn fixture() -> FoodLabelData {
        let mut nutrients = HashMap::new();
        nutrients.insert(NutrientType::SaturatedFat, NutrientValue::grams(5.0));
        nutrients.insert(NutrientType::Sodium, NutrientValue::milligrams(450.0));
        nutrients.insert(NutrientType::AddedSugars, NutrientValue::grams(0.04));
        nutrients.insert(NutrientType::VitaminC, NutrientValue::milligrams(30.0));
        nutrients.insert(NutrientType::Iron, NutrientValue::milligrams(5.0));
        nutrients.insert(NutrientType::Caffeine, NutrientValue::milligrams(75.0));

        FoodLabelData {
            energy: NutrientValue::kcal(235.0),
            carb: 28.0,
            fat: 9.0,
            protein: 3.0,
            nutrients,
            quantity_value: 1.5,
            quantity_unit: "cups".to_string(),
            ..FoodLabelData::default()
        }
    }

    fn row<'a>(label: &'a FoodLabel, title: &str) -> &'a LabelRow {
        label
            .main_rows
            .iter()
            .chain(&label.micro_rows)
            .find(|r| r.title == title)
            .unwrap_or_else(|| panic!("no row titled {title}"))
    }

    #[test]
    fn test_canonical_row_order() {
        let mut data = fixture();
        data.nutrients
            .insert(NutrientType::TransFat, NutrientValue::grams(0.5));
        data.nutrients
            .insert(NutrientType::PolyunsaturatedFat, NutrientValue::grams(1.5));
        data.nutrients
            .insert(NutrientType::MonounsaturatedFat, NutrientValue::grams(3.0));

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);

        let main: Vec<String> = label
            .main_rows
            .iter()
            .map(|r| match r.prefix.as_deref() {
                Some(prefix) => format!("{prefix} {}", r.title),
                None => r.title.clone(),
            })
            .collect();
        assert_eq!(
            main,
            [
                "Total Fat",
                "Saturated Fat",
                "Trans Fat",
                "Polyunsaturated Fat",
                "Monounsaturated Fat",
                "Sodium",
                "Total Carbohydrate",
                "Added Sugars",
                "Protein"
            ]
        );

        let micros: Vec<&str> = label.micro_rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(micros, ["Vitamin C", "Iron", "Caffeine"]);
    }

    #[test]
    fn test_macro_rows_are_bold_totals() {
        let label = FoodLabel::build(&fixture(), &DisplayPolicy::default(), true);

        let fat = row(&label, "Total Fat");
        assert!(fat.bold);
        assert_eq!(fat.amount, "9");
        assert_eq!(fat.unit, "g");
        assert_eq!(fat.percent_daily_value, Some(11));

        let carb = row(&label, "Total Carbohydrate");
        assert_eq!(carb.percent_daily_value, Some(10));
        let protein = row(&label, "Protein");
        assert_eq!(protein.percent_daily_value, Some(6));
    }

    #[test]
    fn test_sodium_row_end_to_end() {
        let label = FoodLabel::build(&fixture(), &DisplayPolicy::default(), true);
        let sodium = row(&label, "Sodium");

        assert_eq!(sodium.amount, "450");
        assert_eq!(sodium.unit, "mg");
        assert_eq!(sodium.percent_daily_value, Some(19));
        assert!(sodium.bold);
        assert!(!sodium.uses_custom_rda);
        assert_eq!(sodium.indent_level, 0);
    }

    #[test]
    fn test_row_json_shape() {
        let label = FoodLabel::build(&fixture(), &DisplayPolicy::default(), true);
        let json = serde_json::to_string(row(&label, "Sodium")).unwrap();

        assert!(json.contains("\"title\":\"Sodium\""));
        assert!(json.contains("\"amount\":\"450\""));
        assert!(json.contains("\"unit\":\"mg\""));
        assert!(json.contains("\"percent_daily_value\":19"));
        assert!(json.contains("\"uses_custom_rda\":false"));
    }

    #[test]
    fn test_added_sugars_below_threshold() {
        let policy = DisplayPolicy::with_decimal_places(0);
        let label = FoodLabel::build(&fixture(), &policy, true);
        let added = row(&label, "Added Sugars");

        assert_eq!(added.amount, "< 0.1");
        assert!(added.prefixed_with_includes);
        assert_eq!(added.indent_level, 2);
        // 0.04g of a 50g reference truncates to a shown "0%"
        assert_eq!(added.percent_daily_value, Some(0));
    }

    #[test]
    fn test_trans_fat_prefix() {
        let mut data = fixture();
        data.nutrients
            .insert(NutrientType::TransFat, NutrientValue::grams(0.5));

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        let trans = row(&label, "Fat");
        assert_eq!(trans.prefix.as_deref(), Some("Trans"));
        assert_eq!(trans.indent_level, 1);
        assert_eq!(trans.percent_daily_value, None);
    }

    #[test]
    fn test_energy_row_toggles_representation() {
        let data = fixture();

        let kcal = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        assert_eq!(kcal.energy.title, "Calories");
        assert_eq!(kcal.energy.amount, "235");
        assert_eq!(kcal.energy.unit_suffix, None);

        let kj = FoodLabel::build(&data, &DisplayPolicy::default(), false);
        assert_eq!(kj.energy.title, "Energy");
        assert_eq!(kj.energy.amount, "983");
        assert_eq!(kj.energy.unit_suffix.as_deref(), Some("kJ"));
    }

    #[test]
    fn test_energy_grouping_in_kilojoules() {
        let mut data = fixture();
        data.energy = NutrientValue::kcal(1000.0);

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), false);
        assert_eq!(label.energy.amount, "4,184");
    }

    #[test]
    fn test_custom_rda_raises_marker_flag() {
        let mut data = fixture();
        data.custom_rda_values
            .insert(NutrientType::Sodium, RdaReference::milligrams(1500.0));
        data.diet_name = Some("Low Sodium".to_string());

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        let sodium = row(&label, "Sodium");
        assert_eq!(sodium.percent_daily_value, Some(30));
        assert!(sodium.uses_custom_rda);
        assert_eq!(label.diet_name.as_deref(), Some("Low Sodium"));
    }

    #[test]
    fn test_show_rda_off_strips_percent_column() {
        let mut data = fixture();
        data.show_rda = false;

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        assert!(!label.show_percent_header);
        assert_eq!(label.footnote, None);
        for r in label.main_rows.iter().chain(&label.micro_rows) {
            assert_eq!(r.percent_daily_value, None, "{}", r.title);
            assert!(!r.uses_custom_rda);
        }
    }

    #[test]
    fn test_footnote_present_with_rda() {
        let label = FoodLabel::build(&fixture(), &DisplayPolicy::default(), true);
        assert!(label.show_percent_header);
        assert_eq!(label.footnote.as_deref(), Some(DAILY_VALUE_FOOTNOTE));
    }

    #[test]
    fn test_quantity_header() {
        let label = FoodLabel::build(&fixture(), &DisplayPolicy::default(), true);
        assert_eq!(label.quantity.amount, "1.5");
        assert_eq!(label.quantity.unit, "cups");
    }

    #[test]
    fn test_custom_nutrient_rows() {
        let mut data = fixture();
        data.custom_nutrients.push(CustomNutrient {
            name: "Creatine".to_string(),
            value: NutrientValue::grams(5.0),
        });

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        assert_eq!(label.custom_rows.len(), 1);
        assert_eq!(label.custom_rows[0].title, "Creatine");
        assert_eq!(label.custom_rows[0].amount, "5");
        assert_eq!(label.custom_rows[0].percent_daily_value, None);
    }

    #[test]
    fn test_no_micronutrients_leaves_section_empty() {
        let mut data = fixture();
        data.nutrients.retain(|t, _| t.is_included_in_main_section());

        let label = FoodLabel::build(&data, &DisplayPolicy::default(), true);
        assert!(label.micro_rows.is_empty());
        assert!(!data.has_micronutrient_section());
    }

    #[test]
    fn test_build_from_data_source() {
        struct Source;

        impl LabelDataSource for Source {
            fn energy_value(&self) -> NutrientValue {
                NutrientValue::kilojoules(983.0)
            }

            fn carb_amount(&self) -> f64 {
                28.0
            }

            fn fat_amount(&self) -> f64 {
                9.0
            }

            fn protein_amount(&self) -> f64 {
                3.0
            }

            fn nutrients(&self) -> HashMap<NutrientType, NutrientValue> {
                HashMap::from([(NutrientType::Sodium, NutrientValue::milligrams(450.0))])
            }

            fn quantity_value(&self) -> f64 {
                1.0
            }

            fn quantity_unit(&self) -> String {
                "serving".to_string()
            }

            fn number_of_decimal_places(&self) -> usize {
                0
            }
        }

        let label = FoodLabel::from_source(&Source, false);
        assert_eq!(label.energy.title, "Energy");
        assert_eq!(label.energy.amount, "983");
        assert_eq!(row(&label, "Sodium").percent_daily_value, Some(19));
    }
}
