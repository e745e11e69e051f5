use anyhow::{Context, Result};
use clap::Parser;
use standings_scraper::cli::{init_logging, ConfigArgs};
use standings_scraper::diagnostics::Diagnostics;
use standings_scraper::discover::YearIndex;
use standings_scraper::session;
use std::fs;
use std::path::PathBuf;

/// List the year pages the scraper would visit, without extracting them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Where to save the links as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config.load()?;

    let index = YearIndex::from_config(&config)?;
    let diagnostics = Diagnostics::new(&config.debug_dir);
    let mut session = session::open(&config)?;
    let links = index.discover(session.as_mut(), &diagnostics);
    session.close();

    if links.is_empty() {
        println!("No {} year pages found", config.league);
        return Ok(());
    }

    println!("\nYear pages:");
    for link in &links {
        println!("{}  {}", link.year, link.url);
    }

    let output = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "year_index_{}_{}_{}.json",
            config.league.slug(),
            config.min_year,
            config.max_year
        ))
    });
    let json = serde_json::to_string_pretty(&links).context("Failed to serialize year links")?;
    fs::write(&output, json).context("Failed to write JSON file")?;

    println!("\n{} links saved to {}", links.len(), output.display());
    Ok(())
}
