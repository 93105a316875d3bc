//! LUMINA DEX CLI
//!
//! Command-line projection toolkit for staking, casino and tokenomics
//! scenarios.

mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use display::{comparison_chart, format_currency, format_number, format_percentage, progress_bar};
use lumina_economics::{
    BurnSnapshot, CasinoRevenue, CasinoStake, CirculationSnapshot, FarmingProjection,
    FlexibleStakingProjection, LockStakingProjection, PaybackProjection, PlatformRevenue,
    ProjectionConfig, Scenario,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "lumina")]
#[command(author = "Lumina Labs")]
#[command(version = "0.1.0")]
#[command(about = "LUMINA DEX - Staking & Casino Projection Toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Projection assumptions file
    #[arg(short, long, global = true, default_value = "lumina.toml")]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a lock staking position
    Stake {
        /// Principal in LUMINA
        amount: f64,

        /// Lock period in months
        #[arg(short, long, default_value = "48")]
        months: u32,
    },

    /// Project a flexible staking position
    Flexible {
        /// Principal in LUMINA
        amount: f64,

        /// Staking duration in days
        #[arg(short, long, default_value = "30")]
        days: f64,
    },

    /// Project an LP farming position
    Farm {
        /// LP tokens deposited
        amount: f64,

        /// Farming duration in days
        #[arg(short, long, default_value = "365")]
        days: f64,

        /// Override the farming APR
        #[arg(long)]
        apr: Option<f64>,
    },

    /// Evaluate a lock stake through the Luca Casino
    Casino {
        /// Principal in LUMINA
        amount: f64,

        /// Lock period in months
        #[arg(short, long, default_value = "48")]
        months: u32,

        /// Fraction of Luca spent in the casino
        #[arg(short, long, default_value = "0.30")]
        usage: f64,
    },

    /// Break-even Luca usage for a lock stake
    BreakEven {
        /// Principal in LUMINA
        amount: f64,

        /// Lock period in months
        #[arg(short, long, default_value = "48")]
        months: u32,
    },

    /// Project annual platform revenue for a scenario
    Revenue {
        /// Scenario: conservative, realistic or optimistic
        #[arg(default_value = "realistic")]
        scenario: String,
    },

    /// Project casino revenue for a betting volume
    CasinoRevenue {
        /// Total bets volume
        volume: f64,

        /// Override the house edge
        #[arg(long)]
        house_edge: Option<f64>,
    },

    /// Months until an initial investment is recovered
    Payback {
        /// Initial investment
        #[arg(default_value = "200000")]
        investment: f64,
    },

    /// Project circulating supply after a number of months
    Supply {
        /// Months since launch
        months: u32,
    },

    /// Project Luca burned through casino usage
    Burn {
        /// Casino volume
        volume: f64,

        /// Override the average Luca usage rate
        #[arg(long)]
        usage: Option<f64>,
    },

    /// Version information
    Version,
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false),
        )
        .init();
}

fn load_config(path: &PathBuf) -> anyhow::Result<ProjectionConfig> {
    if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {:?}", path))?;
        let config: ProjectionConfig =
            toml::from_str(&content).with_context(|| format!("parsing config {:?}", path))?;
        config.validate()?;
        tracing::debug!("loaded projection assumptions from {:?}", path);
        Ok(config)
    } else {
        tracing::debug!("no config at {:?}, using platform defaults", path);
        Ok(ProjectionConfig::default())
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Stake { amount, months } => {
            let projection = LockStakingProjection::project(&config.staking, amount, months);

            if cli.json {
                print_json(&projection)?;
            } else {
                println!("Lock Staking Projection");
                println!("  Principal:        {} LUMINA", format_number(projection.principal));
                println!(
                    "  Lock period:      {} months ({} APY)",
                    projection.lock_months,
                    format_percentage(projection.apy, 0)
                );
                println!("  Rewards:          {} LUMINA", format_number(projection.rewards));
                println!("  Total at unlock:  {} LUMINA", format_number(projection.total));
                println!("  Luca issued:      {} LUCA", format_number(projection.luca_issued));
            }
        }

        Commands::Flexible { amount, days } => {
            let projection = FlexibleStakingProjection::project(&config.flexible, amount, days);

            if cli.json {
                print_json(&projection)?;
            } else {
                println!("Flexible Staking Projection");
                println!("  Principal:        {} LUMINA", format_number(projection.principal));
                println!("  Duration:         {} days", projection.days);
                println!(
                    "  Estimated reward: {} LUMINA",
                    format_number(projection.estimated_reward)
                );
                println!("  Total:            {} LUMINA", format_number(projection.total));
                println!("  APR:              {}", format_percentage(projection.apr, 2));
            }
        }

        Commands::Farm { amount, days, apr } => {
            let projection = FarmingProjection::project(&config.farming, amount, days, apr);

            if cli.json {
                print_json(&projection)?;
            } else {
                println!("Farming Projection");
                println!("  LP deposited:     {}", format_number(projection.lp_amount));
                println!(
                    "  Duration:         {} days at {} APR",
                    projection.days,
                    format_percentage(projection.apr, 0)
                );
                println!("  Daily rewards:    {} LUMINA", format_number(projection.daily_rewards));
                println!("  Total rewards:    {} LUMINA", format_number(projection.total_rewards));
                println!("  Total:            {} LUMINA", format_number(projection.total));
            }
        }

        Commands::Casino { amount, months, usage } => {
            let stake = CasinoStake::new(amount, months);
            let ret = stake.returns(&config.staking, usage);
            let break_even = stake.break_even_usage(&config.staking);

            if cli.json {
                print_json(&ret)?;
            } else {
                println!("Luca Casino Return");
                println!("  Initial stake:    {} LUMINA", format_number(ret.initial_stake));
                println!("  Luca received:    {} LUCA", format_number(ret.luca_received));
                println!("  Luca used:        {} LUCA", format_number(ret.luca_used));
                println!("  Luca remaining:   {} LUCA", format_number(ret.luca_remaining));
                println!("  Luca -> LUMINA:   {} LUMINA", format_number(ret.lumina_from_luca));
                println!("  Staking rewards:  {} LUMINA", format_number(ret.staking_rewards));
                println!("  Total return:     {} LUMINA", format_number(ret.total_return));
                println!(
                    "  Net profit:       {} LUMINA ({})",
                    format_number(ret.net_profit),
                    format_percentage(ret.profit_percent, 1)
                );
                println!();
                println!(
                    "  Break-even usage: {} - current usage {} is in the {} zone",
                    format_percentage(break_even, 1),
                    format_percentage(usage, 0),
                    if usage <= break_even { "safe" } else { "loss" }
                );
            }
        }

        Commands::BreakEven { amount, months } => {
            let stake = CasinoStake::new(amount, months);
            let break_even = stake.break_even_usage(&config.staking);

            if cli.json {
                print_json(&break_even)?;
            } else {
                println!(
                    "Break-even usage for {} LUMINA over {} months: {}",
                    format_number(amount),
                    months,
                    format_percentage(break_even, 1)
                );
                println!("Spending more than that fraction of Luca turns the position into a loss.");
            }
        }

        Commands::Revenue { scenario } => {
            let scenario = Scenario::from_name(&scenario);
            let revenue = PlatformRevenue::for_scenario(&config.scenarios, scenario);

            if cli.json {
                print_json(&revenue)?;
            } else {
                println!("Platform Revenue ({} scenario, annual)", scenario.name());
                println!(
                    "  Luca Casino:      {} ({})",
                    format_currency(revenue.casino),
                    format_percentage(revenue.casino_share, 0)
                );
                println!(
                    "  Launchpad:        {} ({})",
                    format_currency(revenue.launchpad),
                    format_percentage(revenue.launchpad_share, 0)
                );
                println!(
                    "  DEX fees:         {} ({})",
                    format_currency(revenue.dex_fees),
                    format_percentage(revenue.dex_share, 0)
                );
                println!("  Total:            {}", format_currency(revenue.total));
                println!(
                    "{}",
                    comparison_chart(&[
                        ("Luca Casino", revenue.casino),
                        ("Launchpad", revenue.launchpad),
                        ("DEX fees", revenue.dex_fees),
                    ])
                );
            }
        }

        Commands::CasinoRevenue { volume, house_edge } => {
            let revenue = CasinoRevenue::project(&config.casino, volume, house_edge);

            if cli.json {
                print_json(&revenue)?;
            } else {
                println!("Casino Revenue Projection");
                println!("  Bets volume:      {}", format_currency(revenue.total_bets_volume));
                println!("  House edge:       {}", format_percentage(revenue.house_edge, 1));
                println!("  Gross revenue:    {}", format_currency(revenue.gross_revenue));
                println!("  Operating cost:   {}", format_currency(revenue.operating_cost));
                println!("  Net revenue:      {}", format_currency(revenue.net_revenue));
                println!("  Profit margin:    {}", format_percentage(revenue.profit_margin, 1));
            }
        }

        Commands::Payback { investment } => {
            let payback = PaybackProjection::project(&config.scenarios, investment);

            if cli.json {
                print_json(&payback)?;
            } else {
                println!(
                    "Payback on a {} investment",
                    format_currency(payback.investment)
                );
                println!("  Conservative:     {} months", payback.conservative_months);
                println!("  Realistic:        {} months", payback.realistic_months);
                println!("  Optimistic:       {} months", payback.optimistic_months);
            }
        }

        Commands::Supply { months } => {
            let snapshot = CirculationSnapshot::at_month(&config.supply, months);

            if cli.json {
                print_json(&snapshot)?;
            } else {
                println!("Token Circulation after {} months", months);
                println!(
                    "  Total supply:     {} LUMINA",
                    format_number(snapshot.total_supply)
                );
                println!(
                    "  Circulating:      {} LUMINA ({})",
                    format_number(snapshot.current_circulation),
                    format_percentage(snapshot.circulation_percent, 1)
                );
                println!(
                    "  Remaining:        {} LUMINA",
                    format_number(snapshot.remaining_supply)
                );
                println!(
                    "  {}",
                    progress_bar(snapshot.circulation_percent * 100.0, "Circulation")
                );
            }
        }

        Commands::Burn { volume, usage } => {
            let burn = BurnSnapshot::project(&config.burn, &config.supply, volume, usage);

            if cli.json {
                print_json(&burn)?;
            } else {
                println!("Luca Burn Projection");
                println!("  Luca in play:     {} LUCA", format_number(burn.total_luca));
                println!("  Luca burned:      {} LUCA", format_number(burn.luca_burned));
                println!("  Burn rate:        {}", format_percentage(burn.burn_rate, 0));
                println!(
                    "  Deflationary:     {} of total supply",
                    format_percentage(burn.deflationary_effect, 4)
                );
            }
        }

        Commands::Version => {
            println!("LUMINA DEX Projection Toolkit v0.1.0");
            println!();
            println!("Calculators:");
            println!("  - Lock staking (24/36/48 month terms)");
            println!("  - Flexible staking & LP farming");
            println!("  - Luca Casino returns & break-even analysis");
            println!("  - Platform revenue scenarios & payback");
            println!("  - Token circulation & burn");
        }
    }

    Ok(())
}
