use anyhow::Result;
use clap::{Parser, Subcommand};
use standings_scraper::clean::clean_records;
use standings_scraper::cli::init_logging;
use standings_scraper::reference::write_reference_datasets;
use standings_scraper::{read_records, write_records};
use std::path::PathBuf;

/// Maintenance for the CSV datasets under `data/`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dedupe, check, and sort a scraped standings CSV in place
    Clean {
        csv: PathBuf,

        /// Write the cleaned rows here instead of replacing the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the World Series champion and MVP reference tables
    Reference {
        #[arg(long, default_value = "data")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();

    match Cli::parse().command {
        Command::Clean { csv, output } => {
            let records = read_records(&csv)?;
            let summary = clean_records(records);
            let output = output.unwrap_or(csv);
            write_records(&summary.records, &output)?;

            println!(
                "Wrote {} records to {} ({} duplicates removed)",
                summary.records.len(),
                output.display(),
                summary.duplicates_removed
            );
            for (year, team) in &summary.win_percentage_mismatches {
                println!("  WP mismatch: {} {}", year, team);
            }
        }
        Command::Reference { dir } => {
            for path in write_reference_datasets(&dir)? {
                println!("Saved {}", path.display());
            }
        }
    }
    Ok(())
}
