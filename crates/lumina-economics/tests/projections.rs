//! End-to-end projection checks across the calculator modules, plus
//! property tests for the algebraic guarantees the records advertise.

use lumina_economics::{
    BurnSnapshot, CasinoRevenue, CasinoStake, CirculationSnapshot, FlexibleStakingProjection,
    LockStakingProjection, PaybackProjection, PlatformRevenue, ProjectionConfig, Scenario,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

#[test]
fn lock_staking_headline_example() {
    let config = ProjectionConfig::default();
    let projection = LockStakingProjection::project(&config.staking, 10_000.0, 48);

    assert_eq!(projection.apy, 0.50);
    assert_eq!(projection.years, 4.0);
    assert_eq!(projection.rewards, 20_000.0);
    assert_eq!(projection.total, 30_000.0);
    assert_eq!(projection.luca_issued, 10_000.0);
}

#[test]
fn casino_headline_example() {
    let config = ProjectionConfig::default();
    let ret = CasinoStake::new(10_000.0, 48).returns(&config.staking, 0.30);

    assert!((ret.luca_used - 3_000.0).abs() < EPS);
    assert!((ret.luca_remaining - 7_000.0).abs() < EPS);
    assert!((ret.staking_rewards - 20_000.0).abs() < EPS);
    assert!((ret.total_return - 27_000.0).abs() < EPS);
    assert!((ret.net_profit - 17_000.0).abs() < EPS);
}

#[test]
fn casino_revenue_headline_example() {
    let config = ProjectionConfig::default();
    let revenue = CasinoRevenue::project(&config.casino, 1_000_000.0, Some(0.05));

    assert!((revenue.gross_revenue - 50_000.0).abs() < EPS);
    assert!((revenue.operating_cost - 10_000.0).abs() < EPS);
    assert!((revenue.net_revenue - 40_000.0).abs() < EPS);
    assert!((revenue.profit_margin - 0.04).abs() < EPS);
}

#[test]
fn circulation_headline_example() {
    let config = ProjectionConfig::default();
    let snapshot = CirculationSnapshot::at_month(&config.supply, 0);

    assert_eq!(snapshot.current_circulation, 45_000_000.0);
}

#[test]
fn realistic_revenue_totals() {
    let config = ProjectionConfig::default();
    let revenue = PlatformRevenue::for_scenario(&config.scenarios, Scenario::Realistic);

    assert_eq!(revenue.casino + revenue.launchpad + revenue.dex_fees, revenue.total);
    assert!((revenue.casino_share + revenue.launchpad_share + revenue.dex_share - 1.0).abs() < EPS);
}

#[test]
fn flexible_apr_matches_pool_rate() {
    let config = ProjectionConfig::default();
    let projection = FlexibleStakingProjection::project(&config.flexible, 10_000.0, 30.0);

    // daily pool rate annualized: 288 / 1M * 365
    assert!((projection.apr - 0.10512).abs() < EPS);
}

#[test]
fn payback_headline_example() {
    let config = ProjectionConfig::default();
    let payback = PaybackProjection::project(&config.scenarios, 200_000.0);

    assert_eq!(payback.conservative_months, 16);
    assert_eq!(payback.realistic_months, 5);
    assert_eq!(payback.optimistic_months, 3);
}

#[test]
fn burn_headline_example() {
    let config = ProjectionConfig::default();
    let burn = BurnSnapshot::project(&config.burn, &config.supply, 1_000_000.0, None);

    assert!((burn.total_luca - 100_000.0).abs() < EPS);
    assert!((burn.luca_burned - 30_000.0).abs() < EPS);
}

proptest! {
    #[test]
    fn break_even_is_always_a_fraction(
        principal in 1.0f64..1e12,
        months in 0u32..600,
    ) {
        let config = ProjectionConfig::default();
        let break_even = CasinoStake::new(principal, months).break_even_usage(&config.staking);

        prop_assert!((0.0..=1.0).contains(&break_even));
    }

    #[test]
    fn luca_is_conserved(
        principal in 1.0f64..1e12,
        months in 0u32..600,
        usage in 0.0f64..=1.0,
    ) {
        let config = ProjectionConfig::default();
        let ret = CasinoStake::new(principal, months).returns(&config.staking, usage);

        let issued = ret.luca_used + ret.luca_remaining;
        prop_assert!((issued - ret.luca_received).abs() <= ret.luca_received * 1e-12);
        prop_assert!((ret.luca_received - principal).abs() <= principal * 1e-12);
    }

    #[test]
    fn net_profit_vanishes_at_break_even_when_unclamped(
        principal in 1.0f64..1e9,
    ) {
        // 24-month locks accrue 60% of principal, so break-even sits
        // strictly inside (0, 1) and the round trip must land on zero
        let config = ProjectionConfig::default();
        let stake = CasinoStake::new(principal, 24);
        let break_even = stake.break_even_usage(&config.staking);
        let ret = stake.returns(&config.staking, break_even);

        prop_assert!(ret.net_profit.abs() <= principal * 1e-9);
    }

    #[test]
    fn circulation_never_exceeds_total_supply(months in 0u32..=u32::MAX) {
        let config = ProjectionConfig::default();
        let snapshot = CirculationSnapshot::at_month(&config.supply, months);

        prop_assert!(snapshot.current_circulation <= snapshot.total_supply);
        prop_assert!(snapshot.remaining_supply >= 0.0);
    }

    #[test]
    fn staking_totals_are_principal_plus_rewards(
        principal in 0.0f64..1e12,
        months in 0u32..600,
    ) {
        let config = ProjectionConfig::default();
        let projection = LockStakingProjection::project(&config.staking, principal, months);

        prop_assert!(projection.rewards >= 0.0);
        prop_assert!(
            (projection.total - (projection.principal + projection.rewards)).abs()
                <= projection.total.abs() * 1e-12
        );
    }
}
