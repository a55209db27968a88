// ABOUTME: Nutrition engine configuration for BMR, energy balance, and macronutrient split
// ABOUTME: Defaults reproduce the published formulas; environment variables may override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrition Engine Contributors

//! Nutrition Engine Configuration
//!
//! Tunable coefficients for target calculation. Calculators take the
//! relevant section by reference; nothing here is read implicitly.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Fiber: Institute of Medicine DRI, 14 g per 1000 kcal

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Complete nutrition engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Goal-specific calorie adjustments
    pub energy_balance: EnergyBalanceConfig,
    /// Macronutrient distribution targets
    pub macronutrients: MacronutrientConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Constant for users who decline a binary sex: midpoint of male and female (-78)
    pub msj_other_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_other_constant: -78.0,
        }
    }
}

/// Calorie target multipliers applied to TDEE per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalanceConfig {
    /// Weight loss factor: 0.8 (20% deficit)
    pub lose_calorie_factor: f64,
    /// Weight gain factor: 1.15 (15% surplus)
    pub gain_calorie_factor: f64,
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            lose_calorie_factor: 0.8,
            gain_calorie_factor: 1.15,
        }
    }
}

/// Macronutrient recommendation configuration
///
/// References:
/// - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
/// - Fats: DRI (Dietary Reference Intakes)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacronutrientConfig {
    /// Protein while in a deficit (g/kg): 2.2
    pub protein_lose_g_per_kg: f64,
    /// Protein while in a surplus (g/kg): 2.0
    pub protein_gain_g_per_kg: f64,
    /// Protein at maintenance (g/kg): 1.6
    pub protein_maintain_g_per_kg: f64,
    /// Fraction of calories from fat: 0.27
    pub fat_calorie_fraction: f64,
    /// Fiber per 1000 kcal (g): 14
    pub fiber_g_per_1000_kcal: f64,
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_lose_g_per_kg: 2.2,
            protein_gain_g_per_kg: 2.0,
            protein_maintain_g_per_kg: 1.6,
            fat_calorie_fraction: 0.27,
            fiber_g_per_1000_kcal: 14.0,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a coefficient is non-positive or goal factors are misordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        let energy = &self.energy_balance;
        if energy.lose_calorie_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Lose calorie factor must be positive",
            ));
        }
        if energy.lose_calorie_factor >= 1.0 || energy.gain_calorie_factor <= 1.0 {
            return Err(ConfigError::InvalidRange(
                "Calorie factors must satisfy lose < 1.0 < gain",
            ));
        }

        let macros = &self.macronutrients;
        if [
            macros.protein_lose_g_per_kg,
            macros.protein_gain_g_per_kg,
            macros.protein_maintain_g_per_kg,
        ]
        .iter()
        .any(|g_per_kg| !(0.5..=3.0).contains(g_per_kg))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Protein targets must be between 0.5 and 3.0 g/kg",
            ));
        }
        if macros.fat_calorie_fraction <= 0.0 || macros.fat_calorie_fraction > 0.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat calorie fraction must be in (0, 0.5]",
            ));
        }
        if macros.fiber_g_per_1000_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fiber per 1000 kcal must be positive",
            ));
        }

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::EnvVar(e)),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRITION_BMR_OTHER_CONSTANT",
            &mut self.bmr.msj_other_constant,
        )?;

        Self::apply_env_var(
            "NUTRITION_LOSE_CALORIE_FACTOR",
            &mut self.energy_balance.lose_calorie_factor,
        )?;
        Self::apply_env_var(
            "NUTRITION_GAIN_CALORIE_FACTOR",
            &mut self.energy_balance.gain_calorie_factor,
        )?;

        Self::apply_env_var(
            "NUTRITION_FAT_CALORIE_FRACTION",
            &mut self.macronutrients.fat_calorie_fraction,
        )?;
        Self::apply_env_var(
            "NUTRITION_FIBER_G_PER_1000_KCAL",
            &mut self.macronutrients.fiber_g_per_1000_kcal,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_LOSE_G_PER_KG",
            &mut self.macronutrients.protein_lose_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_GAIN_G_PER_KG",
            &mut self.macronutrients.protein_gain_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_PROTEIN_MAINTAIN_G_PER_KG",
            &mut self.macronutrients.protein_maintain_g_per_kg,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_misordered_calorie_factors_rejected() {
        let mut config = NutritionConfig::default();
        config.energy_balance.gain_calorie_factor = 0.95;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_fat_fraction_upper_bound_inclusive() {
        let mut config = NutritionConfig::default();
        config.macronutrients.fat_calorie_fraction = 0.5;
        assert!(config.validate().is_ok());

        config.macronutrients.fat_calorie_fraction = 0.51;
        assert!(config.validate().is_err());
    }
}
