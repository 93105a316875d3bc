//! # Staking Projections
//!
//! Lock staking, flexible staking and LP farming return calculators.
//!
//! ## Lock Staking
//!
//! | Lock Period | APY | Example: 10,000 LUMINA |
//! |-------------|-----|------------------------|
//! | 24 months | 30% | 6,000 rewards |
//! | 36 months | 40% | 12,000 rewards |
//! | 48 months | 50% | 20,000 rewards |
//!
//! Lock staking also issues Luca 1:1 with the staked principal; see
//! [`crate::casino`] for what that Luca is worth.

use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Supported lock staking terms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockPeriod {
    /// 24-month lock: 30% APY
    TwoYears,
    /// 36-month lock: 40% APY
    ThreeYears,
    /// 48-month lock: 50% APY
    FourYears,
}

impl LockPeriod {
    /// Lock term in months
    pub fn months(&self) -> u32 {
        match self {
            Self::TwoYears => 24,
            Self::ThreeYears => 36,
            Self::FourYears => 48,
        }
    }

    /// Lock term in years
    pub fn years(&self) -> f64 {
        self.months() as f64 / MONTHS_PER_YEAR
    }

    /// Get the period for a month count, if it is a listed term
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            24 => Some(Self::TwoYears),
            36 => Some(Self::ThreeYears),
            48 => Some(Self::FourYears),
            _ => None,
        }
    }

    /// Get period name
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwoYears => "24 months",
            Self::ThreeYears => "36 months",
            Self::FourYears => "48 months",
        }
    }
}

/// APY table for lock staking terms
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StakingRates {
    /// APY for a 24-month lock
    #[serde(default = "default_apy_24")]
    pub apy_24_months: f64,

    /// APY for a 36-month lock
    #[serde(default = "default_apy_36")]
    pub apy_36_months: f64,

    /// APY for a 48-month lock
    #[serde(default = "default_apy_48")]
    pub apy_48_months: f64,

    /// Fallback APY for unlisted lock periods
    #[serde(default = "default_apy")]
    pub default_apy: f64,
}

fn default_apy_24() -> f64 {
    0.30
}

fn default_apy_36() -> f64 {
    0.40
}

fn default_apy_48() -> f64 {
    0.50
}

fn default_apy() -> f64 {
    DEFAULT_APY
}

impl Default for StakingRates {
    fn default() -> Self {
        Self {
            apy_24_months: default_apy_24(),
            apy_36_months: default_apy_36(),
            apy_48_months: default_apy_48(),
            default_apy: default_apy(),
        }
    }
}

impl StakingRates {
    /// APY for a listed lock period
    pub fn apy(&self, period: LockPeriod) -> f64 {
        match period {
            LockPeriod::TwoYears => self.apy_24_months,
            LockPeriod::ThreeYears => self.apy_36_months,
            LockPeriod::FourYears => self.apy_48_months,
        }
    }

    /// APY for an arbitrary month count. Unlisted periods use the default
    /// rate rather than failing.
    pub fn apy_for_months(&self, months: u32) -> f64 {
        match LockPeriod::from_months(months) {
            Some(period) => self.apy(period),
            None => {
                log::debug!("no APY listed for {} months, using default rate", months);
                self.default_apy
            }
        }
    }
}

/// Projected outcome of a lock staking position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LockStakingProjection {
    /// Staked principal
    pub principal: f64,

    /// Lock term in months
    pub lock_months: u32,

    /// Annual yield applied
    pub apy: f64,

    /// Lock term in years
    pub years: f64,

    /// Rewards accrued over the full term
    pub rewards: f64,

    /// Principal plus rewards at unlock
    pub total: f64,

    /// Luca issued at stake time (1:1 with principal)
    pub luca_issued: f64,
}

impl LockStakingProjection {
    /// Project a lock staking position over its full term
    pub fn project(rates: &StakingRates, principal: f64, lock_months: u32) -> Self {
        let apy = rates.apy_for_months(lock_months);
        let years = lock_months as f64 / MONTHS_PER_YEAR;
        let rewards = principal * apy * years;

        Self {
            principal,
            lock_months,
            apy,
            years,
            rewards,
            total: principal + rewards,
            luca_issued: principal,
        }
    }
}

/// Flexible staking pool parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlexiblePoolParams {
    /// LUMINA emitted per block
    #[serde(default = "default_reward_per_block")]
    pub reward_per_block: f64,

    /// Blocks per day (~3s block time)
    #[serde(default = "default_blocks_per_day")]
    pub blocks_per_day: f64,

    /// Assumed total pool size
    #[serde(default = "default_pool_size")]
    pub pool_size: f64,
}

fn default_reward_per_block() -> f64 {
    0.01
}

fn default_blocks_per_day() -> f64 {
    28_800.0
}

fn default_pool_size() -> f64 {
    1_000_000.0
}

impl Default for FlexiblePoolParams {
    fn default() -> Self {
        Self {
            reward_per_block: default_reward_per_block(),
            blocks_per_day: default_blocks_per_day(),
            pool_size: default_pool_size(),
        }
    }
}

impl FlexiblePoolParams {
    /// Total pool emission per day
    pub fn daily_reward(&self) -> f64 {
        self.reward_per_block * self.blocks_per_day
    }
}

/// Projected outcome of a flexible staking position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlexibleStakingProjection {
    /// Staked principal
    pub principal: f64,

    /// Staking duration in days
    pub days: f64,

    /// Rewards accrued over the period
    pub estimated_reward: f64,

    /// Principal plus rewards
    pub total: f64,

    /// Annualized rate for the period
    pub apr: f64,
}

impl FlexibleStakingProjection {
    /// Project a flexible staking position over a period
    pub fn project(pool: &FlexiblePoolParams, principal: f64, days: f64) -> Self {
        let estimated_reward = (pool.daily_reward() / pool.pool_size) * principal * days;

        Self {
            principal,
            days,
            estimated_reward,
            total: principal + estimated_reward,
            apr: (estimated_reward / principal) * (DAYS_PER_YEAR / days),
        }
    }
}

/// Farming parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FarmingParams {
    /// APR applied when the caller does not supply one
    #[serde(default = "default_farming_apr")]
    pub default_apr: f64,
}

fn default_farming_apr() -> f64 {
    DEFAULT_FARMING_APR
}

impl Default for FarmingParams {
    fn default() -> Self {
        Self {
            default_apr: default_farming_apr(),
        }
    }
}

/// Projected outcome of an LP farming position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FarmingProjection {
    /// LP tokens deposited
    pub lp_amount: f64,

    /// Farming duration in days
    pub days: f64,

    /// APR applied
    pub apr: f64,

    /// Rewards accrued per day
    pub daily_rewards: f64,

    /// Rewards accrued over the full period
    pub total_rewards: f64,

    /// Deposit plus rewards
    pub total: f64,
}

impl FarmingProjection {
    /// Project an LP farming position; `apr` falls back to the configured
    /// default when not given
    pub fn project(params: &FarmingParams, lp_amount: f64, days: f64, apr: Option<f64>) -> Self {
        let apr = apr.unwrap_or(params.default_apr);
        let daily_rate = apr / DAYS_PER_YEAR;
        let total_rewards = lp_amount * daily_rate * days;

        Self {
            lp_amount,
            days,
            apr,
            daily_rewards: lp_amount * daily_rate,
            total_rewards,
            total: lp_amount + total_rewards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_periods() {
        assert_eq!(LockPeriod::from_months(24), Some(LockPeriod::TwoYears));
        assert_eq!(LockPeriod::from_months(36), Some(LockPeriod::ThreeYears));
        assert_eq!(LockPeriod::from_months(48), Some(LockPeriod::FourYears));
        assert_eq!(LockPeriod::from_months(12), None);
        assert_eq!(LockPeriod::FourYears.years(), 4.0);
    }

    #[test]
    fn test_apy_table() {
        let rates = StakingRates::default();

        assert_eq!(rates.apy_for_months(24), 0.30);
        assert_eq!(rates.apy_for_months(36), 0.40);
        assert_eq!(rates.apy_for_months(48), 0.50);
    }

    #[test]
    fn test_unlisted_period_uses_default_rate() {
        let rates = StakingRates::default();

        assert_eq!(rates.apy_for_months(0), DEFAULT_APY);
        assert_eq!(rates.apy_for_months(12), DEFAULT_APY);
        assert_eq!(rates.apy_for_months(1000), DEFAULT_APY);
    }

    #[test]
    fn test_lock_staking_projection() {
        let rates = StakingRates::default();
        let projection = LockStakingProjection::project(&rates, 10_000.0, 48);

        assert_eq!(projection.apy, 0.50);
        assert_eq!(projection.years, 4.0);
        assert_eq!(projection.rewards, 20_000.0);
        assert_eq!(projection.total, 30_000.0);
        assert_eq!(projection.luca_issued, 10_000.0);
    }

    #[test]
    fn test_flexible_staking_projection() {
        let pool = FlexiblePoolParams::default();
        let projection = FlexibleStakingProjection::project(&pool, 10_000.0, 30.0);

        // 288 LUMINA/day across a 1M pool
        assert_eq!(pool.daily_reward(), 288.0);
        assert!((projection.estimated_reward - 86.4).abs() < 1e-9);
        assert!((projection.total - 10_086.4).abs() < 1e-9);
    }

    #[test]
    fn test_flexible_apr_is_principal_invariant() {
        let pool = FlexiblePoolParams::default();

        let small = FlexibleStakingProjection::project(&pool, 100.0, 90.0);
        let large = FlexibleStakingProjection::project(&pool, 1_000_000.0, 90.0);

        assert!((small.apr - large.apr).abs() < 1e-12);
    }

    #[test]
    fn test_farming_projection() {
        let params = FarmingParams::default();
        let projection = FarmingProjection::project(&params, 5_000.0, 365.0, None);

        assert_eq!(projection.apr, 0.50);
        assert!((projection.total_rewards - 2_500.0).abs() < 1e-9);
        assert!((projection.total - 7_500.0).abs() < 1e-9);
    }

    #[test]
    fn test_farming_custom_apr() {
        let params = FarmingParams::default();
        let projection = FarmingProjection::project(&params, 1_000.0, 73.0, Some(0.10));

        assert_eq!(projection.apr, 0.10);
        assert!((projection.total_rewards - 20.0).abs() < 1e-9);
    }
}
