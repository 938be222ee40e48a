use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "homebuyer-estimate",
    about = "Estimate 30-year mortgage payments across nearby interest rates",
    group(ArgGroup::new("input").multiple(true).args(["budget", "down_payment", "rate"]))
)]
pub struct Args {
    /// Total budget for the house in USD; skips the interactive form
    #[arg(long)]
    pub budget: Option<String>,

    /// Percentage of the budget used as down payment; skips the interactive form
    #[arg(long)]
    pub down_payment: Option<String>,

    /// Annual interest rate in percent; skips the interactive form
    #[arg(long)]
    pub rate: Option<String>,

    /// Print the quotes as JSON instead of a table (needs an input flag)
    #[arg(long, requires = "input")]
    pub json: bool,

    /// Write a log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log every keystroke and calculation
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn is_one_shot(&self) -> bool {
        self.budget.is_some() || self.down_payment.is_some() || self.rate.is_some()
    }
}
