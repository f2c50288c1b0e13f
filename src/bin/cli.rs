// src/bin/cli.rs
use color_eyre::eyre::Report;
use intern_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    cli::run().map_err(Report::msg)?;
    Ok(())
}
