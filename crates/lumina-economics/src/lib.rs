//! # Lumina Economics - Staking, Casino & Tokenomics Projections
//!
//! Projection engine for the LUMINA DEX platform. Every projection is a pure
//! transform from a numeric input snapshot plus an immutable table of
//! assumptions to a derived result record.
//!
//! ## Key Features
//!
//! - **Lock staking**: fixed-term APY by lock period (24/36/48 months)
//! - **Flexible staking & farming**: linear pool-rate accrual
//! - **Luca Casino model**: 1:1 secondary-token issuance, usage-based
//!   returns and a closed-form break-even usage fraction
//! - **Platform projections**: scenario revenue, payback period, token
//!   circulation and burn
//!
//! ## LUMINA Tokenomics
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                 LUMINA SUPPLY PROJECTION                   │
//! ├────────────────────────────────────────────────────────────┤
//! │  Total Supply:          1,000,000,000 LUMINA (1 billion)   │
//! │  Initial Circulation:      45,000,000 LUMINA (4.5%)        │
//! │  Staking Emission:          5,000,000 LUMINA / month       │
//! │  Farming Emission:          3,000,000 LUMINA / month       │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lock Staking Rates
//!
//! | Lock Period | APY |
//! |-------------|-----|
//! | 24 months | 30% |
//! | 36 months | 40% |
//! | 48 months | 50% |
//!
//! Unlisted lock periods fall back to the 30% default rate.

pub mod casino;
pub mod config;
pub mod revenue;
pub mod staking;
pub mod supply;

// Re-exports
pub use casino::{CasinoParams, CasinoReturn, CasinoRevenue, CasinoStake};
pub use config::{ConfigError, ProjectionConfig};
pub use revenue::{PaybackProjection, PlatformRevenue, RevenueAssumptions, Scenario, ScenarioTable};
pub use staking::{
    FarmingParams, FarmingProjection, FlexiblePoolParams, FlexibleStakingProjection, LockPeriod,
    LockStakingProjection, StakingRates,
};
pub use supply::{BurnParams, BurnSnapshot, CirculationSnapshot, SupplySchedule};

/// LUMINA token constants
pub mod constants {
    /// Primary token symbol
    pub const SYMBOL: &str = "LUMINA";

    /// Secondary (casino) token symbol, issued 1:1 with staked principal
    pub const SECONDARY_SYMBOL: &str = "LUCA";

    /// Total supply: 1 billion LUMINA
    pub const TOTAL_SUPPLY: f64 = 1_000_000_000.0;

    /// Initial circulating supply: 45 million LUMINA (4.5%)
    pub const INITIAL_CIRCULATION: f64 = 45_000_000.0;

    /// Estimated staking emission per month: ~0.5% of supply
    pub const MONTHLY_STAKING_EMISSION: f64 = 5_000_000.0;

    /// Estimated farming emission per month: ~0.3% of supply
    pub const MONTHLY_FARMING_EMISSION: f64 = 3_000_000.0;

    /// Fallback APY for unlisted lock periods: 30%
    pub const DEFAULT_APY: f64 = 0.30;

    /// Casino house edge: 5%
    pub const DEFAULT_HOUSE_EDGE: f64 = 0.05;

    /// Casino operating costs as a fraction of gross revenue: 20%
    pub const OPERATING_COST_FRACTION: f64 = 0.20;

    /// Default farming APR: 50%
    pub const DEFAULT_FARMING_APR: f64 = 0.50;

    /// Assumed average Luca usage rate in the casino: 30%
    pub const DEFAULT_LUCA_USAGE: f64 = 0.30;

    /// Share of casino volume held as Luca: 10%
    pub const LUCA_VOLUME_SHARE: f64 = 0.10;

    /// Days per year used in rate annualization
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Months per year
    pub const MONTHS_PER_YEAR: f64 = 12.0;
}

pub use constants::*;
