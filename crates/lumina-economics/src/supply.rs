//! # Token Supply Projections
//!
//! Circulating supply growth from staking/farming emissions, and the
//! deflationary effect of Luca burned through the casino.
//!
//! Circulation grows linearly with elapsed months and is capped at the
//! total supply. Luca spent in the casino is returned to the treasury and
//! counted as burned.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Token supply and emission assumptions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SupplySchedule {
    /// Total supply
    #[serde(default = "default_total_supply")]
    pub total_supply: f64,

    /// Circulating supply at launch
    #[serde(default = "default_initial_circulation")]
    pub initial_circulation: f64,

    /// Staking rewards entering circulation per month
    #[serde(default = "default_monthly_staking_emission")]
    pub monthly_staking_emission: f64,

    /// Farming rewards entering circulation per month
    #[serde(default = "default_monthly_farming_emission")]
    pub monthly_farming_emission: f64,
}

fn default_total_supply() -> f64 {
    TOTAL_SUPPLY
}

fn default_initial_circulation() -> f64 {
    INITIAL_CIRCULATION
}

fn default_monthly_staking_emission() -> f64 {
    MONTHLY_STAKING_EMISSION
}

fn default_monthly_farming_emission() -> f64 {
    MONTHLY_FARMING_EMISSION
}

impl Default for SupplySchedule {
    fn default() -> Self {
        Self {
            total_supply: default_total_supply(),
            initial_circulation: default_initial_circulation(),
            monthly_staking_emission: default_monthly_staking_emission(),
            monthly_farming_emission: default_monthly_farming_emission(),
        }
    }
}

impl SupplySchedule {
    /// Combined emission entering circulation per month
    pub fn monthly_emission(&self) -> f64 {
        self.monthly_staking_emission + self.monthly_farming_emission
    }
}

/// Circulating supply at a point in time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CirculationSnapshot {
    /// Total supply
    pub total_supply: f64,

    /// Circulating supply at launch
    pub initial_circulation: f64,

    /// Circulating supply after the elapsed months
    pub current_circulation: f64,

    /// Circulating fraction of total supply
    pub circulation_percent: f64,

    /// Supply not yet in circulation
    pub remaining_supply: f64,
}

impl CirculationSnapshot {
    /// Project circulating supply after a number of elapsed months.
    /// Circulation never exceeds the total supply.
    pub fn at_month(schedule: &SupplySchedule, months: u32) -> Self {
        let emitted = schedule.monthly_emission() * months as f64;
        let current_circulation =
            (schedule.initial_circulation + emitted).min(schedule.total_supply);

        Self {
            total_supply: schedule.total_supply,
            initial_circulation: schedule.initial_circulation,
            current_circulation,
            circulation_percent: current_circulation / schedule.total_supply,
            remaining_supply: schedule.total_supply - current_circulation,
        }
    }
}

/// Luca burn assumptions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BurnParams {
    /// Share of casino volume held as Luca
    #[serde(default = "default_luca_volume_share")]
    pub luca_volume_share: f64,

    /// Average usage rate applied when the caller does not supply one
    #[serde(default = "default_luca_usage")]
    pub default_usage: f64,
}

fn default_luca_volume_share() -> f64 {
    LUCA_VOLUME_SHARE
}

fn default_luca_usage() -> f64 {
    DEFAULT_LUCA_USAGE
}

impl Default for BurnParams {
    fn default() -> Self {
        Self {
            luca_volume_share: default_luca_volume_share(),
            default_usage: default_luca_usage(),
        }
    }
}

/// Luca burned through casino usage
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BurnSnapshot {
    /// Luca in circulation for the given casino volume
    pub total_luca: f64,

    /// Luca consumed and returned to the treasury
    pub luca_burned: f64,

    /// Usage rate applied
    pub burn_rate: f64,

    /// Burned Luca as a fraction of total supply
    pub deflationary_effect: f64,
}

impl BurnSnapshot {
    /// Project the burn for a casino volume; `avg_usage` falls back to the
    /// configured default when not given
    pub fn project(
        params: &BurnParams,
        schedule: &SupplySchedule,
        casino_volume: f64,
        avg_usage: Option<f64>,
    ) -> Self {
        let burn_rate = avg_usage.unwrap_or(params.default_usage);
        let total_luca = casino_volume * params.luca_volume_share;
        let luca_burned = total_luca * burn_rate;

        Self {
            total_luca,
            luca_burned,
            burn_rate,
            deflationary_effect: luca_burned / schedule.total_supply,
        }
    }
}
