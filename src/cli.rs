// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::config::options::RunOptions;
use crate::error::Result;
use crate::runner;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "f1_scrape", version, about = "Write the F1 drivers' championship standings as JSON")]
pub struct Cli {
    /// Season year (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Fetch this URL instead of the season standings page
    #[arg(long)]
    pub url: Option<String>,

    /// Output JSON path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Roster TOML file (defaults to the built-in roster)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the roster and exit
    #[arg(long)]
    pub list_roster: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn options(&self) -> RunOptions {
        let mut opts = RunOptions::default();
        if let Some(y) = self.year { opts.year = y; }
        if let Some(u) = &self.url { opts.url = Some(u.clone()); }
        if let Some(o) = &self.out { opts.out = o.clone(); }
        if let Some(r) = &self.roster { opts.roster = Some(r.clone()); }
        if let Some(t) = self.timeout { opts.timeout = Duration::from_secs(t); }
        opts
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let opts = cli.options();

    if cli.list_roster {
        let roster = opts.load_roster()?;
        for e in roster.entries() {
            println!("{},{},{},{}", e.number, e.full_name(), e.team, e.car);
        }
        return Ok(());
    }

    runner::run(&opts).map(|_| ())
}
