//! # Luca Casino Model
//!
//! Lock staking issues Luca 1:1 with the staked principal. Luca spent in the
//! casino is consumed; whatever remains converts back to LUMINA 1:1 at
//! unlock, on top of the ordinary staking rewards.
//!
//! The payoff is linear in the usage fraction, so the break-even point has a
//! closed form: net profit is zero when `usage = rewards / principal`. Any
//! usage below that fraction leaves the staker in profit.

use crate::constants::*;
use crate::staking::{LockStakingProjection, StakingRates};
use serde::{Deserialize, Serialize};

/// A lock staking position evaluated through the casino
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CasinoStake {
    /// Staked principal in LUMINA
    pub principal: f64,

    /// Lock term in months
    pub lock_months: u32,
}

impl CasinoStake {
    /// Create a casino stake position
    pub fn new(principal: f64, lock_months: u32) -> Self {
        Self {
            principal,
            lock_months,
        }
    }

    /// Luca issued for this position (1:1 with principal)
    pub fn luca_received(&self) -> f64 {
        self.principal
    }

    /// Staking rewards accrued over the full lock term
    pub fn staking_rewards(&self, rates: &StakingRates) -> f64 {
        LockStakingProjection::project(rates, self.principal, self.lock_months).rewards
    }

    /// Evaluate the position at a given Luca usage fraction in [0, 1]
    pub fn returns(&self, rates: &StakingRates, usage_fraction: f64) -> CasinoReturn {
        let luca_received = self.luca_received();
        let luca_used = luca_received * usage_fraction;
        let luca_remaining = luca_received - luca_used;
        let lumina_from_luca = luca_remaining;
        let staking_rewards = self.staking_rewards(rates);
        let total_return = lumina_from_luca + staking_rewards;
        let net_profit = total_return - self.principal;

        CasinoReturn {
            initial_stake: self.principal,
            luca_received,
            luca_used,
            luca_remaining,
            lumina_from_luca,
            staking_rewards,
            total_return,
            net_profit,
            profit_percent: net_profit / self.principal,
        }
    }

    /// Usage fraction at which net profit is exactly zero.
    ///
    /// Net profit is `rewards - usage * principal`, so break-even sits at
    /// `rewards / principal`. Positions whose rewards exceed the principal
    /// cannot go negative; those clamp to 1.0.
    pub fn break_even_usage(&self, rates: &StakingRates) -> f64 {
        (self.staking_rewards(rates) / self.principal).clamp(0.0, 1.0)
    }
}

/// Casino return evaluated at a usage fraction
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CasinoReturn {
    /// Staked principal
    pub initial_stake: f64,

    /// Luca issued (1:1 with principal)
    pub luca_received: f64,

    /// Luca consumed in the casino
    pub luca_used: f64,

    /// Luca left unspent
    pub luca_remaining: f64,

    /// LUMINA recovered from unspent Luca (1:1)
    pub lumina_from_luca: f64,

    /// Staking rewards over the lock term
    pub staking_rewards: f64,

    /// LUMINA received at unlock: recovered Luca plus rewards
    pub total_return: f64,

    /// Total return minus the original principal
    pub net_profit: f64,

    /// Net profit as a fraction of the principal
    pub profit_percent: f64,
}

/// Casino revenue assumptions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CasinoParams {
    /// House edge applied when the caller does not supply one
    #[serde(default = "default_house_edge")]
    pub default_house_edge: f64,

    /// Operating costs as a fraction of gross revenue
    #[serde(default = "default_operating_cost_fraction")]
    pub operating_cost_fraction: f64,
}

fn default_house_edge() -> f64 {
    DEFAULT_HOUSE_EDGE
}

fn default_operating_cost_fraction() -> f64 {
    OPERATING_COST_FRACTION
}

impl Default for CasinoParams {
    fn default() -> Self {
        Self {
            default_house_edge: default_house_edge(),
            operating_cost_fraction: default_operating_cost_fraction(),
        }
    }
}

/// Projected casino revenue for a betting volume
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CasinoRevenue {
    /// Total bets placed
    pub total_bets_volume: f64,

    /// House edge applied
    pub house_edge: f64,

    /// Volume retained by the house
    pub gross_revenue: f64,

    /// Operating costs
    pub operating_cost: f64,

    /// Gross revenue after operating costs
    pub net_revenue: f64,

    /// Net revenue as a fraction of volume
    pub profit_margin: f64,
}

impl CasinoRevenue {
    /// Project casino revenue for a betting volume; `house_edge` falls back
    /// to the configured default when not given
    pub fn project(params: &CasinoParams, volume: f64, house_edge: Option<f64>) -> Self {
        let house_edge = house_edge.unwrap_or(params.default_house_edge);
        let gross_revenue = volume * house_edge;
        let operating_cost = gross_revenue * params.operating_cost_fraction;
        let net_revenue = gross_revenue - operating_cost;

        Self {
            total_bets_volume: volume,
            house_edge,
            gross_revenue,
            operating_cost,
            net_revenue,
            profit_margin: net_revenue / volume,
        }
    }
}
