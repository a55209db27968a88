// ABOUTME: Static educational records for nutrients tracked by the deficit calculator
// ABOUTME: Display names, health impact, deficiency symptoms, food sources and upper limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use nutrition_core::models::{Nutrient, NutrientCategory};
use serde::Serialize;

/// Educational record for a nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientInfo {
    /// Human-readable name
    pub display_name: &'static str,
    /// Measurement unit
    pub unit: &'static str,
    /// Category grouping
    pub category: NutrientCategory,
    /// What the nutrient does in the body
    pub health_impact: &'static [&'static str],
    /// Signs of inadequate intake
    pub deficiency_symptoms: &'static [&'static str],
    /// Foods that supply it
    pub food_sources: &'static [&'static str],
    /// Tolerable upper intake level, when one is set
    pub upper_limit: Option<f64>,
}

static PROTEIN: NutrientInfo = NutrientInfo {
    display_name: "Protein",
    unit: "g",
    category: NutrientCategory::Macro,
    health_impact: &["Muscle growth and repair", "Immune function", "Hormone production"],
    deficiency_symptoms: &["Muscle loss", "Weakness", "Poor wound healing"],
    food_sources: &["Chicken", "Fish", "Eggs", "Tofu", "Legumes", "Greek yogurt"],
    upper_limit: None,
};

static CARBS: NutrientInfo = NutrientInfo {
    display_name: "Carbohydrates",
    unit: "g",
    category: NutrientCategory::Macro,
    health_impact: &["Primary energy source", "Brain function", "Exercise performance"],
    deficiency_symptoms: &["Fatigue", "Brain fog", "Low energy"],
    food_sources: &["Whole grains", "Fruits", "Vegetables", "Legumes"],
    upper_limit: None,
};

static FAT: NutrientInfo = NutrientInfo {
    display_name: "Fat",
    unit: "g",
    category: NutrientCategory::Macro,
    health_impact: &["Hormone production", "Vitamin absorption", "Cell structure"],
    deficiency_symptoms: &["Dry skin", "Hair loss", "Vitamin deficiencies"],
    food_sources: &["Avocado", "Nuts", "Olive oil", "Fatty fish", "Seeds"],
    upper_limit: None,
};

static FIBER: NutrientInfo = NutrientInfo {
    display_name: "Fiber",
    unit: "g",
    category: NutrientCategory::Macro,
    health_impact: &["Digestive health", "Blood sugar control", "Heart health"],
    deficiency_symptoms: &["Constipation", "High cholesterol", "Blood sugar spikes"],
    food_sources: &["Whole grains", "Legumes", "Vegetables", "Fruits", "Nuts"],
    upper_limit: None,
};

static VITAMIN_D: NutrientInfo = NutrientInfo {
    display_name: "Vitamin D",
    unit: "mcg",
    category: NutrientCategory::Vitamin,
    health_impact: &["Bone health", "Immune function", "Mood regulation"],
    deficiency_symptoms: &["Weak bones", "Fatigue", "Depression", "Muscle weakness"],
    food_sources: &[
        "Fatty fish",
        "Egg yolks",
        "Fortified milk",
        "Mushrooms",
        "Sunlight exposure",
    ],
    upper_limit: Some(100.0),
};

static VITAMIN_C: NutrientInfo = NutrientInfo {
    display_name: "Vitamin C",
    unit: "mg",
    category: NutrientCategory::Vitamin,
    health_impact: &[
        "Immune function",
        "Antioxidant",
        "Collagen production",
        "Iron absorption",
    ],
    deficiency_symptoms: &["Slow wound healing", "Frequent infections", "Bleeding gums"],
    food_sources: &[
        "Citrus fruits",
        "Bell peppers",
        "Strawberries",
        "Broccoli",
        "Kiwi",
    ],
    upper_limit: Some(2000.0),
};

static VITAMIN_B12: NutrientInfo = NutrientInfo {
    display_name: "Vitamin B12",
    unit: "mcg",
    category: NutrientCategory::Vitamin,
    health_impact: &["Nerve function", "Red blood cell production", "DNA synthesis"],
    deficiency_symptoms: &["Fatigue", "Numbness", "Memory problems", "Anemia"],
    food_sources: &["Meat", "Fish", "Eggs", "Dairy", "Fortified cereals"],
    upper_limit: None,
};

static FOLATE: NutrientInfo = NutrientInfo {
    display_name: "Folate (B9)",
    unit: "mcg",
    category: NutrientCategory::Vitamin,
    health_impact: &["Cell division", "DNA synthesis", "Fetal development"],
    deficiency_symptoms: &["Anemia", "Fatigue", "Birth defects"],
    food_sources: &["Leafy greens", "Legumes", "Fortified grains", "Asparagus"],
    upper_limit: Some(1000.0),
};

static IRON: NutrientInfo = NutrientInfo {
    display_name: "Iron",
    unit: "mg",
    category: NutrientCategory::Mineral,
    health_impact: &["Oxygen transport", "Energy production", "Immune function"],
    deficiency_symptoms: &["Anemia", "Fatigue", "Pale skin", "Shortness of breath"],
    food_sources: &[
        "Red meat",
        "Spinach",
        "Legumes",
        "Fortified cereals",
        "Oysters",
    ],
    upper_limit: Some(45.0),
};

static CALCIUM: NutrientInfo = NutrientInfo {
    display_name: "Calcium",
    unit: "mg",
    category: NutrientCategory::Mineral,
    health_impact: &["Bone health", "Muscle function", "Nerve signaling"],
    deficiency_symptoms: &["Weak bones", "Osteoporosis", "Muscle cramps"],
    food_sources: &[
        "Dairy products",
        "Leafy greens",
        "Fortified foods",
        "Sardines",
    ],
    upper_limit: Some(2500.0),
};

static MAGNESIUM: NutrientInfo = NutrientInfo {
    display_name: "Magnesium",
    unit: "mg",
    category: NutrientCategory::Mineral,
    health_impact: &[
        "Muscle function",
        "Nerve function",
        "Energy production",
        "Sleep quality",
    ],
    deficiency_symptoms: &["Muscle cramps", "Fatigue", "Insomnia", "Anxiety"],
    food_sources: &[
        "Nuts",
        "Seeds",
        "Whole grains",
        "Leafy greens",
        "Dark chocolate",
    ],
    upper_limit: None,
};

static POTASSIUM: NutrientInfo = NutrientInfo {
    display_name: "Potassium",
    unit: "mg",
    category: NutrientCategory::Mineral,
    health_impact: &[
        "Blood pressure regulation",
        "Muscle function",
        "Fluid balance",
    ],
    deficiency_symptoms: &["Muscle weakness", "Fatigue", "Irregular heartbeat"],
    food_sources: &["Bananas", "Potatoes", "Spinach", "Beans", "Avocado"],
    upper_limit: None,
};

static ZINC: NutrientInfo = NutrientInfo {
    display_name: "Zinc",
    unit: "mg",
    category: NutrientCategory::Mineral,
    health_impact: &["Immune function", "Wound healing", "Taste and smell"],
    deficiency_symptoms: &["Slow wound healing", "Hair loss", "Frequent infections"],
    food_sources: &["Meat", "Shellfish", "Legumes", "Seeds", "Nuts"],
    upper_limit: Some(40.0),
};

static OMEGA3: NutrientInfo = NutrientInfo {
    display_name: "Omega-3",
    unit: "g",
    category: NutrientCategory::Other,
    health_impact: &[
        "Heart health",
        "Brain function",
        "Inflammation reduction",
    ],
    deficiency_symptoms: &["Dry skin", "Poor concentration", "Joint pain"],
    food_sources: &[
        "Fatty fish",
        "Walnuts",
        "Flax seeds",
        "Chia seeds",
        "Algae oil",
    ],
    upper_limit: None,
};

/// Educational record for a nutrient, if it has one
///
/// Nutrients without a record are never reported as deficits or excesses.
#[must_use]
pub fn nutrient_info(nutrient: Nutrient) -> Option<&'static NutrientInfo> {
    match nutrient {
        Nutrient::ProteinG => Some(&PROTEIN),
        Nutrient::CarbsG => Some(&CARBS),
        Nutrient::FatG => Some(&FAT),
        Nutrient::FiberG => Some(&FIBER),
        Nutrient::VitaminDMcg => Some(&VITAMIN_D),
        Nutrient::VitaminCMg => Some(&VITAMIN_C),
        Nutrient::VitaminB12Mcg => Some(&VITAMIN_B12),
        Nutrient::FolateMcg => Some(&FOLATE),
        Nutrient::IronMg => Some(&IRON),
        Nutrient::CalciumMg => Some(&CALCIUM),
        Nutrient::MagnesiumMg => Some(&MAGNESIUM),
        Nutrient::PotassiumMg => Some(&POTASSIUM),
        Nutrient::ZincMg => Some(&ZINC),
        Nutrient::Omega3G => Some(&OMEGA3),
        Nutrient::VitaminAMcg
        | Nutrient::VitaminEMg
        | Nutrient::VitaminKMcg
        | Nutrient::ThiaminMg
        | Nutrient::RiboflavinMg
        | Nutrient::NiacinMg
        | Nutrient::VitaminB6Mg
        | Nutrient::PhosphorusMg
        | Nutrient::SodiumMg
        | Nutrient::CopperMg
        | Nutrient::ManganeseMg
        | Nutrient::SeleniumMcg
        | Nutrient::Omega6G
        | Nutrient::WaterL => None,
    }
}

/// Human-readable name, falling back to the nutrient key
#[must_use]
pub fn display_name(nutrient: Nutrient) -> &'static str {
    nutrient_info(nutrient).map_or_else(|| nutrient.key(), |info| info.display_name)
}

/// Nutrients with an educational record, in tracking order
///
/// Deficit, excess and weekly results follow this order whenever sort keys tie.
pub const DOCUMENTED: [Nutrient; 14] = [
    Nutrient::ProteinG,
    Nutrient::CarbsG,
    Nutrient::FatG,
    Nutrient::FiberG,
    Nutrient::VitaminDMcg,
    Nutrient::VitaminCMg,
    Nutrient::VitaminB12Mcg,
    Nutrient::FolateMcg,
    Nutrient::IronMg,
    Nutrient::CalciumMg,
    Nutrient::MagnesiumMg,
    Nutrient::PotassiumMg,
    Nutrient::ZincMg,
    Nutrient::Omega3G,
];

/// Nutrients that carry an educational record, in tracking order
pub fn documented_nutrients() -> impl Iterator<Item = (Nutrient, &'static NutrientInfo)> {
    DOCUMENTED
        .into_iter()
        .filter_map(|nutrient| nutrient_info(nutrient).map(|info| (nutrient, info)))
}
