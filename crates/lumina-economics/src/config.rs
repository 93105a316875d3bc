//! # Projection Configuration
//!
//! All assumption tables gathered into one structure. The tables carry the
//! canonical platform figures by default and can be overridden from a TOML
//! file; after loading they are immutable and passed by reference into the
//! calculators.
//!
//! Calculation inputs themselves are never validated; validation applies
//! only here, where a malformed table would skew every projection made
//! with it.

use crate::casino::CasinoParams;
use crate::revenue::ScenarioTable;
use crate::staking::{FarmingParams, FlexiblePoolParams, StakingRates};
use crate::supply::{BurnParams, SupplySchedule};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Complete projection configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Lock staking APY table
    #[serde(default)]
    pub staking: StakingRates,

    /// Flexible staking pool parameters
    #[serde(default)]
    pub flexible: FlexiblePoolParams,

    /// Farming parameters
    #[serde(default)]
    pub farming: FarmingParams,

    /// Revenue scenario assumptions
    #[serde(default)]
    pub scenarios: ScenarioTable,

    /// Casino revenue assumptions
    #[serde(default)]
    pub casino: CasinoParams,

    /// Token supply schedule
    #[serde(default)]
    pub supply: SupplySchedule,

    /// Luca burn assumptions
    #[serde(default)]
    pub burn: BurnParams,
}

/// Configuration errors
#[derive(Clone, Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("initial circulation {initial} exceeds total supply {total}")]
    InitialCirculationExceedsSupply { initial: f64, total: f64 },
}

impl ProjectionConfig {
    /// Check every table entry is usable. Rates may be zero; supply,
    /// pool size and block figures must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        rate("staking.apy_24_months", self.staking.apy_24_months)?;
        rate("staking.apy_36_months", self.staking.apy_36_months)?;
        rate("staking.apy_48_months", self.staking.apy_48_months)?;
        rate("staking.default_apy", self.staking.default_apy)?;

        positive("flexible.reward_per_block", self.flexible.reward_per_block)?;
        positive("flexible.blocks_per_day", self.flexible.blocks_per_day)?;
        positive("flexible.pool_size", self.flexible.pool_size)?;

        rate("farming.default_apr", self.farming.default_apr)?;

        rate("casino.default_house_edge", self.casino.default_house_edge)?;
        rate(
            "casino.operating_cost_fraction",
            self.casino.operating_cost_fraction,
        )?;

        positive("supply.total_supply", self.supply.total_supply)?;
        rate("supply.initial_circulation", self.supply.initial_circulation)?;
        rate(
            "supply.monthly_staking_emission",
            self.supply.monthly_staking_emission,
        )?;
        rate(
            "supply.monthly_farming_emission",
            self.supply.monthly_farming_emission,
        )?;

        if self.supply.initial_circulation > self.supply.total_supply {
            return Err(ConfigError::InitialCirculationExceedsSupply {
                initial: self.supply.initial_circulation,
                total: self.supply.total_supply,
            });
        }

        rate("burn.luca_volume_share", self.burn.luca_volume_share)?;
        rate("burn.default_usage", self.burn.default_usage)?;

        Ok(())
    }
}

fn rate(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProjectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_pool_size_rejected() {
        let mut config = ProjectionConfig::default();
        config.flexible.pool_size = 0.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { .. })
        ));
    }

    #[test]
    fn test_negative_apy_rejected() {
        let mut config = ProjectionConfig::default();
        config.staking.apy_36_months = -0.1;

        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn test_nan_rate_rejected() {
        let mut config = ProjectionConfig::default();
        config.casino.default_house_edge = f64::NAN;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_initial_circulation_bound() {
        let mut config = ProjectionConfig::default();
        config.supply.initial_circulation = config.supply.total_supply * 2.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InitialCirculationExceedsSupply { .. })
        ));
    }

    #[test]
    fn test_partial_toml_overrides() {
        let config: ProjectionConfig = toml::from_str(
            r#"
            [staking]
            apy_48_months = 0.45

            [supply]
            total_supply = 2000000000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.staking.apy_48_months, 0.45);
        assert_eq!(config.staking.apy_24_months, 0.30);
        assert_eq!(config.supply.total_supply, 2_000_000_000.0);
        assert_eq!(config.supply.initial_circulation, 45_000_000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let config = ProjectionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ProjectionConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.staking.apy_48_months, config.staking.apy_48_months);
        assert_eq!(back.supply.total_supply, config.supply.total_supply);
    }
}
