// src/bin/cli.rs
use clap::Parser;
use sunbiz_scrape::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let path = cli::run(Cli::parse())?;
    println!("{}", path.display());
    Ok(())
}
