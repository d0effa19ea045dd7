use anyhow::{Context as _, Result};
use tracing::info;

use yamada_core::Session;
use yamada_time::holidays::{next_holiday, HolidayRules};
use yamada_time::{japanese_holidays_with, Calendar, Date, JapanCalendar};
use yamada_tools::config::YamadaConfig;
use yamada_tools::report::{self, DayReport, NextHoliday};

use crate::cli::{AdjustArgs, BusinessDaysArgs, CheckArgs, Cli, ListArgs, NextArgs};

/// Everything a subcommand needs besides its own arguments.
pub struct Context {
    /// Rules after merging the config file and command-line overrides.
    pub rules: HolidayRules,
    /// The evaluation date.
    pub today: Date,
}

impl Context {
    /// Resolve configuration and "today" from the global flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let config = YamadaConfig::discover(cli.config.as_deref(), &cwd)?;
        let rules = config.rules_with(cli.substitute_rule, cli.historical_gating);

        let session = match cli.today {
            Some(d) => Session::pinned(d.serial()),
            None => Session::new(),
        };
        let today = Date::from_serial(
            session.evaluation_date_serial_or_else(|| Date::today_local().serial()),
        )?;

        info!(%today, ?rules, "resolved context");
        Ok(Context { rules, today })
    }
}

/// `list`: the holidays of one year.
pub fn list(args: &ListArgs, ctx: &Context) -> Result<()> {
    let year = args.year.unwrap_or_else(|| ctx.today.year());
    let holidays = japanese_holidays_with(year, &ctx.rules);
    info!(year, count = holidays.len(), "listing holidays");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&holidays)?);
    } else {
        print!("{}", report::render_list(year, &holidays, ctx.today, args.by_month));
    }
    Ok(())
}

/// `next`: the first holiday on or after today.
pub fn next(args: &NextArgs, ctx: &Context) -> Result<()> {
    let holiday = next_holiday(ctx.today, &ctx.rules)
        .with_context(|| format!("no holiday found after {}", ctx.today))?;
    let next = NextHoliday::new(ctx.today, &holiday);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&next)?);
    } else {
        print!("{}", report::render_next(&next));
    }
    Ok(())
}

/// `check`: holiday, weekend, or business day.
pub fn check(args: &CheckArgs, ctx: &Context) -> Result<()> {
    let calendar = JapanCalendar::new(ctx.rules);
    let day = DayReport::new(&calendar, args.date);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&day)?);
    } else {
        print!("{}", report::render_day(&day));
    }
    Ok(())
}

/// `business-days`: business days in `(from, to]`.
pub fn business_days(args: &BusinessDaysArgs, ctx: &Context) -> Result<()> {
    let calendar = JapanCalendar::new(ctx.rules);
    let count = calendar.business_days_between(args.from, args.to);
    println!("{count}");
    Ok(())
}

/// `adjust`: roll a date onto a business day.
pub fn adjust(args: &AdjustArgs, ctx: &Context) -> Result<()> {
    let calendar = JapanCalendar::new(ctx.rules);
    let adjusted = calendar.adjust(args.date, args.convention);
    info!(date = %args.date, convention = %args.convention, %adjusted, "adjusted date");
    println!("{adjusted}");
    Ok(())
}
