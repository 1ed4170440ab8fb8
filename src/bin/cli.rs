// src/bin/cli.rs
use clap::Parser;
use f1_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    f1_scrape::logger::init(args.verbose);

    cli::run(&args)?;
    Ok(())
}
