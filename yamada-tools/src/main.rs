mod cli;
mod commands;

use std::process;

use anyhow::Result;
use clap::Parser;
use yamada_tools::logging;

use crate::cli::{Cli, Command};
use crate::commands::Context;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;
    match &cli.command {
        Command::List(args) => commands::list(args, &ctx),
        Command::Next(args) => commands::next(args, &ctx),
        Command::Check(args) => commands::check(args, &ctx),
        Command::BusinessDays(args) => commands::business_days(args, &ctx),
        Command::Adjust(args) => commands::adjust(args, &ctx),
    }
}
