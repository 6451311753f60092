//! Nutrient type enumeration
//!
//! The closed set of nutrients the label can title, place, and reference.

use serde::{Deserialize, Serialize};

/// A nutrient known to the label
///
/// Energy and the three macro totals have dedicated fields and rows on the
/// label; everything else is supplied through the nutrients map and lands in
/// either the main section or the micronutrient section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientType {
    // Energy and macro totals
    Energy,
    Carbohydrate,
    Fat,
    Protein,

    // Fats
    SaturatedFat,
    MonounsaturatedFat,
    PolyunsaturatedFat,
    TransFat,
    Cholesterol,

    // Fibers
    DietaryFiber,
    SolubleFiber,
    InsolubleFiber,

    // Sugars
    Sugars,
    AddedSugars,
    SugarAlcohols,

    // Minerals
    Calcium,
    Chloride,
    Chromium,
    Copper,
    Iodine,
    Iron,
    Magnesium,
    Manganese,
    Molybdenum,
    Phosphorus,
    Potassium,
    Selenium,
    Sodium,
    Zinc,

    // Vitamins
    VitaminA,
    Thiamin,
    Riboflavin,
    Niacin,
    PantothenicAcid,
    VitaminB6,
    Biotin,
    Folate,
    VitaminB12,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Choline,

    // Misc
    Caffeine,
    Ethanol,
    Taurine,
    Water,
    Starch,
    Salt,
}

/// Nutrients that render inside the main label section rather than the
/// micronutrient section
pub const MAIN_SECTION_NUTRIENTS: &[NutrientType] = &[
    NutrientType::SaturatedFat,
    NutrientType::PolyunsaturatedFat,
    NutrientType::MonounsaturatedFat,
    NutrientType::TransFat,
    NutrientType::Cholesterol,
    NutrientType::Sodium,
    NutrientType::DietaryFiber,
    NutrientType::SolubleFiber,
    NutrientType::InsolubleFiber,
    NutrientType::Sugars,
    NutrientType::AddedSugars,
    NutrientType::SugarAlcohols,
];

/// Vitamin rows in display order
const VITAMINS: &[NutrientType] = &[
    NutrientType::VitaminA,
    NutrientType::Thiamin,
    NutrientType::Riboflavin,
    NutrientType::Niacin,
    NutrientType::PantothenicAcid,
    NutrientType::VitaminB6,
    NutrientType::Biotin,
    NutrientType::Folate,
    NutrientType::VitaminB12,
    NutrientType::VitaminC,
    NutrientType::VitaminD,
    NutrientType::VitaminE,
    NutrientType::VitaminK,
    NutrientType::Choline,
];

/// Mineral rows in display order; sodium stays here even though its row is
/// rendered with the highlighted macros
const MINERALS: &[NutrientType] = &[
    NutrientType::Calcium,
    NutrientType::Chloride,
    NutrientType::Chromium,
    NutrientType::Copper,
    NutrientType::Iodine,
    NutrientType::Iron,
    NutrientType::Magnesium,
    NutrientType::Manganese,
    NutrientType::Molybdenum,
    NutrientType::Phosphorus,
    NutrientType::Potassium,
    NutrientType::Selenium,
    NutrientType::Sodium,
    NutrientType::Zinc,
];

/// Remaining nutrient rows in display order
const MISC: &[NutrientType] = &[
    NutrientType::Caffeine,
    NutrientType::Ethanol,
    NutrientType::Taurine,
    NutrientType::Water,
    NutrientType::Starch,
    NutrientType::Salt,
];

impl NutrientType {
    /// Title as printed on the label
    pub fn display_name(&self) -> &'static str {
        match self {
            NutrientType::Energy => "Energy",
            NutrientType::Carbohydrate => "Total Carbohydrate",
            NutrientType::Fat => "Total Fat",
            NutrientType::Protein => "Protein",
            NutrientType::SaturatedFat => "Saturated Fat",
            NutrientType::MonounsaturatedFat => "Monounsaturated Fat",
            NutrientType::PolyunsaturatedFat => "Polyunsaturated Fat",
            NutrientType::TransFat => "Trans Fat",
            NutrientType::Cholesterol => "Cholesterol",
            NutrientType::DietaryFiber => "Dietary Fiber",
            NutrientType::SolubleFiber => "Soluble Fiber",
            NutrientType::InsolubleFiber => "Insoluble Fiber",
            NutrientType::Sugars => "Sugars",
            NutrientType::AddedSugars => "Added Sugars",
            NutrientType::SugarAlcohols => "Sugar Alcohols",
            NutrientType::Calcium => "Calcium",
            NutrientType::Chloride => "Chloride",
            NutrientType::Chromium => "Chromium",
            NutrientType::Copper => "Copper",
            NutrientType::Iodine => "Iodine",
            NutrientType::Iron => "Iron",
            NutrientType::Magnesium => "Magnesium",
            NutrientType::Manganese => "Manganese",
            NutrientType::Molybdenum => "Molybdenum",
            NutrientType::Phosphorus => "Phosphorus",
            NutrientType::Potassium => "Potassium",
            NutrientType::Selenium => "Selenium",
            NutrientType::Sodium => "Sodium",
            NutrientType::Zinc => "Zinc",
            NutrientType::VitaminA => "Vitamin A",
            NutrientType::Thiamin => "Thiamin",
            NutrientType::Riboflavin => "Riboflavin",
            NutrientType::Niacin => "Niacin",
            NutrientType::PantothenicAcid => "Pantothenic Acid",
            NutrientType::VitaminB6 => "Vitamin B6",
            NutrientType::Biotin => "Biotin",
            NutrientType::Folate => "Folate",
            NutrientType::VitaminB12 => "Vitamin B12",
            NutrientType::VitaminC => "Vitamin C",
            NutrientType::VitaminD => "Vitamin D",
            NutrientType::VitaminE => "Vitamin E",
            NutrientType::VitaminK => "Vitamin K",
            NutrientType::Choline => "Choline",
            NutrientType::Caffeine => "Caffeine",
            NutrientType::Ethanol => "Ethanol",
            NutrientType::Taurine => "Taurine",
            NutrientType::Water => "Water",
            NutrientType::Starch => "Starch",
            NutrientType::Salt => "Salt",
        }
    }

    /// Vitamin group in display order
    pub fn vitamins() -> &'static [NutrientType] {
        VITAMINS
    }

    /// Mineral group in display order
    pub fn minerals() -> &'static [NutrientType] {
        MINERALS
    }

    /// Misc group in display order
    pub fn misc() -> &'static [NutrientType] {
        MISC
    }

    /// Whether this nutrient renders in the main label section
    pub fn is_included_in_main_section(&self) -> bool {
        MAIN_SECTION_NUTRIENTS.contains(self)
    }

    /// Whether this is the energy figure or one of the macro totals, which
    /// have dedicated fields and never come from the nutrients map
    pub fn is_macro_or_energy(&self) -> bool {
        matches!(
            self,
            NutrientType::Energy
                | NutrientType::Carbohydrate
                | NutrientType::Fat
                | NutrientType::Protein
        )
    }
}
