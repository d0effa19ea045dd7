use std::path::PathBuf;

use clap::{Parser, Subcommand};
use yamada_time::holidays::{HistoricalGating, SubstituteRule};
use yamada_time::{BusinessDayConvention, Date};

/// Japanese national holiday calculator.
#[derive(Parser)]
#[command(
    name = "yamada-holidays",
    version,
    about = "Japanese national holidays (祝日確認)"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./yamada.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Substitute holiday rule: next-day-only or cascade.
    #[arg(long, global = true)]
    pub substitute_rule: Option<SubstituteRule>,

    /// Historical gating of fixed holidays: uniform or effective-from.
    #[arg(long, global = true)]
    pub historical_gating: Option<HistoricalGating>,

    /// Treat this date (YYYY-MM-DD) as today instead of the system date.
    #[arg(long, global = true)]
    pub today: Option<Date>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the holidays of a year.
    List(ListArgs),
    /// Show the next holiday and how many days away it is.
    Next(NextArgs),
    /// Check whether a date is a holiday or a business day.
    Check(CheckArgs),
    /// Count business days after FROM up to and including TO.
    BusinessDays(BusinessDaysArgs),
    /// Move a date onto a business day.
    Adjust(AdjustArgs),
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Year to list (default: the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Group the list under month headers.
    #[arg(long)]
    pub by_month: bool,
}

/// Arguments for the `next` subcommand.
#[derive(clap::Args)]
pub struct NextArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD).
    pub date: Date,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `business-days` subcommand.
#[derive(clap::Args)]
pub struct BusinessDaysArgs {
    /// Start date (exclusive).
    pub from: Date,

    /// End date (inclusive).
    pub to: Date,
}

/// Arguments for the `adjust` subcommand.
#[derive(clap::Args)]
pub struct AdjustArgs {
    /// Date to adjust (YYYY-MM-DD).
    pub date: Date,

    /// Business-day convention, e.g. following, modified-following, preceding.
    #[arg(long, default_value = "following")]
    pub convention: BusinessDayConvention,
}
