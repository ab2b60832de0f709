//! Payoff CLI - options strategy payoff and Greeks
//!
//! # Commands
//!
//! - `payoff analyze <strategy> --spot S --strike K --premium P ...` - Breakeven, limits, Greeks
//! - `payoff curve <strategy> ...` - Payoff diagram at expiry
//! - `payoff greeks --spot S --strike K --kind call|put` - Single-leg Black-Scholes
//! - `payoff strategies` - List the strategy catalogue

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use payoff_cli::commands::{self, greeks::GreeksRequest, StrategyRequest};
use payoff_cli::config::{build_config, CliArgs, CliConfig};
use payoff_cli::input::{LegInputs, MarketInputs};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Options strategy payoff and Greeks calculator
#[derive(Parser)]
#[command(name = "payoff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, env = "PAYOFF_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breakeven, max profit/loss and Greeks for a strategy
    Analyze {
        #[command(flatten)]
        strategy: StrategyArgs,
    },

    /// Payoff at expiry over [0.5, 1.5] x spot
    Curve {
        #[command(flatten)]
        strategy: StrategyArgs,

        /// Number of curve samples
        #[arg(long)]
        points: Option<usize>,
    },

    /// Black-Scholes price and Greeks for one option
    Greeks {
        /// Strike price
        #[arg(long)]
        strike: f64,

        /// Option kind (call, put)
        #[arg(short, long, default_value = "call")]
        kind: String,

        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        expiry: ExpiryArgs,
    },

    /// List the strategy catalogue
    Strategies,
}

#[derive(Args)]
struct StrategyArgs {
    /// Strategy name, e.g. "iron condor" or long-call
    strategy: String,

    #[command(flatten)]
    market: MarketArgs,

    /// First strike (K1)
    #[arg(long)]
    strike: f64,

    /// First premium per share (P1)
    #[arg(long)]
    premium: f64,

    /// Second strike (K2)
    #[arg(long)]
    strike2: Option<f64>,

    /// Second premium (P2)
    #[arg(long)]
    premium2: Option<f64>,

    /// Third strike (K3)
    #[arg(long)]
    strike3: Option<f64>,

    /// Third premium (P3)
    #[arg(long)]
    premium3: Option<f64>,

    /// Fourth strike (K4)
    #[arg(long)]
    strike4: Option<f64>,

    /// Fourth premium (P4)
    #[arg(long)]
    premium4: Option<f64>,

    /// Number of contracts (values below 1 count as 1)
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    quantity: i64,

    #[command(flatten)]
    expiry: ExpiryArgs,

    /// Greeks mode (primary, aggregate)
    #[arg(long)]
    greeks_mode: Option<String>,
}

#[derive(Args)]
struct MarketArgs {
    /// Current price of the underlying
    #[arg(long)]
    spot: f64,

    /// Annualised volatility in percent
    #[arg(long)]
    volatility: Option<f64>,

    /// Annualised risk-free rate in percent
    #[arg(long, allow_negative_numbers = true)]
    risk_free: Option<f64>,

    /// Annualised dividend yield in percent
    #[arg(long)]
    dividend: Option<f64>,
}

#[derive(Args)]
struct ExpiryArgs {
    /// Expiry date (YYYY-MM-DD), defaults to 30 days from today
    #[arg(long, conflicts_with = "days")]
    expiry: Option<String>,

    /// Calendar days to expiry
    #[arg(long)]
    days: Option<u32>,
}

impl MarketArgs {
    fn inputs(&self) -> MarketInputs {
        MarketInputs {
            spot: self.spot,
            volatility_pct: self.volatility,
            risk_free_pct: self.risk_free,
            dividend_pct: self.dividend,
        }
    }
}

impl StrategyArgs {
    fn request(&self) -> StrategyRequest {
        StrategyRequest {
            name: self.strategy.clone(),
            legs: LegInputs {
                strikes: [Some(self.strike), self.strike2, self.strike3, self.strike4],
                premiums: [Some(self.premium), self.premium2, self.premium3, self.premium4],
            },
            quantity: self.quantity,
            market: self.market.inputs(),
            expiry: self.expiry.expiry.clone(),
            days: self.expiry.days,
        }
    }
}

impl Cli {
    /// Configuration overrides from global and subcommand flags
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            format: self.format.clone(),
            ..Default::default()
        };

        let market = match &self.command {
            Commands::Analyze { strategy } => {
                args.greeks_mode = strategy.greeks_mode.clone();
                Some(&strategy.market)
            }
            Commands::Curve { strategy, points } => {
                args.greeks_mode = strategy.greeks_mode.clone();
                args.num_points = *points;
                Some(&strategy.market)
            }
            Commands::Greeks { market, .. } => Some(market),
            Commands::Strategies => None,
        };
        if let Some(market) = market {
            args.volatility_pct = market.volatility;
            args.risk_free_pct = market.risk_free;
            args.dividend_pct = market.dividend;
        }
        args
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config: CliConfig = build_config(&cli.config_args())?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    init_tracing(level);

    info!("Payoff CLI v{}", payoff_cli::VERSION);
    info!(
        format = %config.format,
        greeks_mode = ?config.greeks_mode,
        num_points = config.curve.num_points,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Analyze { strategy } => commands::analyze::run(&strategy.request(), &config)?,
        Commands::Curve { strategy, .. } => commands::curve::run(&strategy.request(), &config)?,
        Commands::Greeks {
            strike,
            kind,
            market,
            expiry,
        } => {
            let request = GreeksRequest {
                strike,
                kind,
                market: market.inputs(),
                expiry: expiry.expiry,
                days: expiry.days,
            };
            commands::greeks::run(&request, &config)?
        }
        Commands::Strategies => commands::strategies::run(config.format)?,
    }

    Ok(())
}
