//! # Platform Revenue Projections
//!
//! Scenario-based revenue projections and payback analysis.
//!
//! ## Revenue Scenarios (annual)
//!
//! | Scenario | Luca Casino | Launchpad | DEX Fees | Total |
//! |----------|-------------|-----------|----------|-------|
//! | Conservative | $100K | $30K | $20K | $150K |
//! | Realistic | $400K | $100K | $50K | $550K |
//! | Optimistic | $800K | $200K | $100K | $1.1M |

use serde::{Deserialize, Serialize};

/// Named revenue scenario
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Low-end assumptions
    Conservative,
    /// Base-case assumptions
    Realistic,
    /// High-end assumptions
    Optimistic,
}

impl Scenario {
    /// Get scenario name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }

    /// Parse a scenario name. Unrecognized names map to the realistic
    /// base case rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "conservative" => Self::Conservative,
            "realistic" => Self::Realistic,
            "optimistic" => Self::Optimistic,
            other => {
                log::debug!("unknown scenario {:?}, using realistic", other);
                Self::Realistic
            }
        }
    }

    /// All scenarios, low to high
    pub fn all() -> [Scenario; 3] {
        [Self::Conservative, Self::Realistic, Self::Optimistic]
    }
}

/// Annual revenue assumptions for one scenario
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RevenueAssumptions {
    /// Luca Casino revenue
    pub casino: f64,

    /// Launchpad revenue
    pub launchpad: f64,

    /// DEX trading fee revenue
    pub dex_fees: f64,
}

impl RevenueAssumptions {
    /// Total annual revenue across categories
    pub fn total(&self) -> f64 {
        self.casino + self.launchpad + self.dex_fees
    }

    /// Average monthly revenue
    pub fn monthly(&self) -> f64 {
        self.total() / 12.0
    }
}

/// Revenue assumptions for every scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScenarioTable {
    /// Low-end assumptions
    #[serde(default = "default_conservative")]
    pub conservative: RevenueAssumptions,

    /// Base-case assumptions
    #[serde(default = "default_realistic")]
    pub realistic: RevenueAssumptions,

    /// High-end assumptions
    #[serde(default = "default_optimistic")]
    pub optimistic: RevenueAssumptions,
}

fn default_conservative() -> RevenueAssumptions {
    RevenueAssumptions {
        casino: 100_000.0,
        launchpad: 30_000.0,
        dex_fees: 20_000.0,
    }
}

fn default_realistic() -> RevenueAssumptions {
    RevenueAssumptions {
        casino: 400_000.0,
        launchpad: 100_000.0,
        dex_fees: 50_000.0,
    }
}

fn default_optimistic() -> RevenueAssumptions {
    RevenueAssumptions {
        casino: 800_000.0,
        launchpad: 200_000.0,
        dex_fees: 100_000.0,
    }
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self {
            conservative: default_conservative(),
            realistic: default_realistic(),
            optimistic: default_optimistic(),
        }
    }
}

impl ScenarioTable {
    /// Assumptions for a scenario
    pub fn assumptions(&self, scenario: Scenario) -> &RevenueAssumptions {
        match scenario {
            Scenario::Conservative => &self.conservative,
            Scenario::Realistic => &self.realistic,
            Scenario::Optimistic => &self.optimistic,
        }
    }
}

/// Annual platform revenue broken down by category
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlatformRevenue {
    /// Scenario evaluated
    pub scenario: Scenario,

    /// Luca Casino revenue
    pub casino: f64,

    /// Casino share of total
    pub casino_share: f64,

    /// Launchpad revenue
    pub launchpad: f64,

    /// Launchpad share of total
    pub launchpad_share: f64,

    /// DEX fee revenue
    pub dex_fees: f64,

    /// DEX fee share of total
    pub dex_share: f64,

    /// Total annual revenue
    pub total: f64,
}

impl PlatformRevenue {
    /// Project platform revenue for a scenario
    pub fn for_scenario(table: &ScenarioTable, scenario: Scenario) -> Self {
        let assumptions = table.assumptions(scenario);
        let total = assumptions.total();

        Self {
            scenario,
            casino: assumptions.casino,
            casino_share: assumptions.casino / total,
            launchpad: assumptions.launchpad,
            launchpad_share: assumptions.launchpad / total,
            dex_fees: assumptions.dex_fees,
            dex_share: assumptions.dex_fees / total,
            total,
        }
    }
}

/// Months until an initial investment is recovered, per scenario
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaybackProjection {
    /// Initial investment
    pub investment: f64,

    /// Months to recover under conservative revenue
    pub conservative_months: u32,

    /// Months to recover under realistic revenue
    pub realistic_months: u32,

    /// Months to recover under optimistic revenue
    pub optimistic_months: u32,
}

impl PaybackProjection {
    /// Project payback periods for an initial investment against each
    /// scenario's average monthly revenue
    pub fn project(table: &ScenarioTable, investment: f64) -> Self {
        let months = |scenario: Scenario| -> u32 {
            (investment / table.assumptions(scenario).monthly()).ceil() as u32
        };

        Self {
            investment,
            conservative_months: months(Scenario::Conservative),
            realistic_months: months(Scenario::Realistic),
            optimistic_months: months(Scenario::Optimistic),
        }
    }
}
