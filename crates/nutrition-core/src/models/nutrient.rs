// ABOUTME: Closed enumeration of every nutrient the engine tracks
// ABOUTME: Provides stable string keys, display units, and category grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient grouping used for display and reference tables
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCategory {
    /// Protein, carbohydrate, fat, fiber
    Macro,
    /// Fat- and water-soluble vitamins
    Vitamin,
    /// Dietary minerals
    Mineral,
    /// Essential fatty acids and water
    Other,
}

/// Identifier of a tracked nutrient
///
/// Serialized as the unit-suffixed key used in intake logs
/// (`protein_g`, `vitamin_d_mcg`, `water_l`, ...). Unknown keys fail to
/// deserialize instead of silently reading as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    // Macros
    /// Protein (g)
    ProteinG,
    /// Carbohydrates (g)
    CarbsG,
    /// Fat (g)
    FatG,
    /// Fiber (g)
    FiberG,

    // Vitamins
    /// Vitamin D (mcg)
    VitaminDMcg,
    /// Vitamin C (mg)
    VitaminCMg,
    /// Vitamin A (mcg)
    VitaminAMcg,
    /// Vitamin E (mg)
    VitaminEMg,
    /// Vitamin K (mcg)
    VitaminKMcg,
    /// Thiamin, B1 (mg)
    ThiaminMg,
    /// Riboflavin, B2 (mg)
    RiboflavinMg,
    /// Niacin, B3 (mg)
    NiacinMg,
    /// Vitamin B6 (mg)
    VitaminB6Mg,
    /// Folate, B9 (mcg)
    FolateMcg,
    /// Vitamin B12 (mcg)
    VitaminB12Mcg,

    // Minerals
    /// Calcium (mg)
    CalciumMg,
    /// Iron (mg)
    IronMg,
    /// Magnesium (mg)
    MagnesiumMg,
    /// Phosphorus (mg)
    PhosphorusMg,
    /// Potassium (mg)
    PotassiumMg,
    /// Sodium (mg)
    SodiumMg,
    /// Zinc (mg)
    ZincMg,
    /// Copper (mg)
    CopperMg,
    /// Manganese (mg)
    ManganeseMg,
    /// Selenium (mcg)
    SeleniumMcg,

    // Essential fatty acids
    /// Omega-3 fatty acids (g)
    Omega3G,
    /// Omega-6 fatty acids (g)
    Omega6G,

    /// Water (L)
    WaterL,
}

impl Nutrient {
    /// Every nutrient in catalog order
    pub const ALL: [Self; 28] = [
        Self::ProteinG,
        Self::CarbsG,
        Self::FatG,
        Self::FiberG,
        Self::VitaminDMcg,
        Self::VitaminCMg,
        Self::VitaminAMcg,
        Self::VitaminEMg,
        Self::VitaminKMcg,
        Self::ThiaminMg,
        Self::RiboflavinMg,
        Self::NiacinMg,
        Self::VitaminB6Mg,
        Self::FolateMcg,
        Self::VitaminB12Mcg,
        Self::CalciumMg,
        Self::IronMg,
        Self::MagnesiumMg,
        Self::PhosphorusMg,
        Self::PotassiumMg,
        Self::SodiumMg,
        Self::ZincMg,
        Self::CopperMg,
        Self::ManganeseMg,
        Self::SeleniumMcg,
        Self::Omega3G,
        Self::Omega6G,
        Self::WaterL,
    ];

    /// Stable key used in logs and JSON
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ProteinG => "protein_g",
            Self::CarbsG => "carbs_g",
            Self::FatG => "fat_g",
            Self::FiberG => "fiber_g",
            Self::VitaminDMcg => "vitamin_d_mcg",
            Self::VitaminCMg => "vitamin_c_mg",
            Self::VitaminAMcg => "vitamin_a_mcg",
            Self::VitaminEMg => "vitamin_e_mg",
            Self::VitaminKMcg => "vitamin_k_mcg",
            Self::ThiaminMg => "thiamin_mg",
            Self::RiboflavinMg => "riboflavin_mg",
            Self::NiacinMg => "niacin_mg",
            Self::VitaminB6Mg => "vitamin_b6_mg",
            Self::FolateMcg => "folate_mcg",
            Self::VitaminB12Mcg => "vitamin_b12_mcg",
            Self::CalciumMg => "calcium_mg",
            Self::IronMg => "iron_mg",
            Self::MagnesiumMg => "magnesium_mg",
            Self::PhosphorusMg => "phosphorus_mg",
            Self::PotassiumMg => "potassium_mg",
            Self::SodiumMg => "sodium_mg",
            Self::ZincMg => "zinc_mg",
            Self::CopperMg => "copper_mg",
            Self::ManganeseMg => "manganese_mg",
            Self::SeleniumMcg => "selenium_mcg",
            Self::Omega3G => "omega3_g",
            Self::Omega6G => "omega6_g",
            Self::WaterL => "water_l",
        }
    }

    /// Measurement unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::ProteinG
            | Self::CarbsG
            | Self::FatG
            | Self::FiberG
            | Self::Omega3G
            | Self::Omega6G => "g",
            Self::VitaminCMg
            | Self::VitaminEMg
            | Self::ThiaminMg
            | Self::RiboflavinMg
            | Self::NiacinMg
            | Self::VitaminB6Mg
            | Self::CalciumMg
            | Self::IronMg
            | Self::MagnesiumMg
            | Self::PhosphorusMg
            | Self::PotassiumMg
            | Self::SodiumMg
            | Self::ZincMg
            | Self::CopperMg
            | Self::ManganeseMg => "mg",
            Self::VitaminDMcg
            | Self::VitaminAMcg
            | Self::VitaminKMcg
            | Self::FolateMcg
            | Self::VitaminB12Mcg
            | Self::SeleniumMcg => "mcg",
            Self::WaterL => "L",
        }
    }

    /// Category grouping
    #[must_use]
    pub const fn category(&self) -> NutrientCategory {
        match self {
            Self::ProteinG | Self::CarbsG | Self::FatG | Self::FiberG => NutrientCategory::Macro,
            Self::VitaminDMcg
            | Self::VitaminCMg
            | Self::VitaminAMcg
            | Self::VitaminEMg
            | Self::VitaminKMcg
            | Self::ThiaminMg
            | Self::RiboflavinMg
            | Self::NiacinMg
            | Self::VitaminB6Mg
            | Self::FolateMcg
            | Self::VitaminB12Mcg => NutrientCategory::Vitamin,
            Self::CalciumMg
            | Self::IronMg
            | Self::MagnesiumMg
            | Self::PhosphorusMg
            | Self::PotassiumMg
            | Self::SodiumMg
            | Self::ZincMg
            | Self::CopperMg
            | Self::ManganeseMg
            | Self::SeleniumMcg => NutrientCategory::Mineral,
            Self::Omega3G | Self::Omega6G | Self::WaterL => NutrientCategory::Other,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
